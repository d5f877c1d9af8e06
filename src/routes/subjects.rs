use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectQueryParams, UpdateSubjectRequest,
};
use crate::services::SubjectService;
use crate::utils::SafeSubjectIdI64;

// 懒加载的全局 SubjectService 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<SubjectQueryParams>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(&req, query.into_inner()).await
}

pub async fn create_subject(
    req: HttpRequest,
    data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.create_subject(&req, data.into_inner()).await
}

pub async fn get_subject(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.get_subject(&req, subject_id.0).await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
    data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(&req, subject_id.0, data.into_inner())
        .await
}

pub async fn delete_subject(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(&req, subject_id.0).await
}

// 配置科目路由
pub fn configure_subjects_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .service(
                web::resource("")
                    .route(web::get().to(list_subjects))
                    .route(web::post().to(create_subject)),
            )
            .service(
                web::resource("/{subject_id}")
                    .route(web::get().to(get_subject))
                    .route(web::put().to(update_subject))
                    .route(web::delete().to(delete_subject)),
            ),
    );
}
