use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::teachers::requests::{TeacherQueryParams, TeacherRequest};
use crate::services::TeacherService;
use crate::utils::SafeTeacherIdI64;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherQueryParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(&req, query.into_inner()).await
}

pub async fn create_teacher(
    req: HttpRequest,
    data: web::Json<TeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.create_teacher(&req, data.into_inner()).await
}

pub async fn get_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(&req, teacher_id.0).await
}

pub async fn update_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
    data: web::Json<TeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(&req, teacher_id.0, data.into_inner())
        .await
}

pub async fn delete_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(&req, teacher_id.0).await
}

// 配置教师路由
pub fn configure_teachers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .service(
                web::resource("")
                    .route(web::get().to(list_teachers))
                    .route(web::post().to(create_teacher)),
            )
            .service(
                web::resource("/{teacher_id}")
                    .route(web::get().to(get_teacher))
                    .route(web::put().to(update_teacher))
                    .route(web::delete().to(delete_teacher)),
            ),
    );
}
