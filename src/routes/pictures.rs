use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RateLimit;
use crate::models::pictures::requests::PictureQueryParams;
use crate::services::PictureService;
use crate::utils::SafePictureIdI64;

// 懒加载的全局 PictureService 实例
static PICTURE_SERVICE: Lazy<PictureService> = Lazy::new(PictureService::new_lazy);

pub async fn list_pictures(
    req: HttpRequest,
    query: web::Query<PictureQueryParams>,
) -> ActixResult<HttpResponse> {
    PICTURE_SERVICE.list_pictures(&req, query.into_inner()).await
}

pub async fn create_picture(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    PICTURE_SERVICE.create_picture(&req, payload).await
}

pub async fn get_picture(
    req: HttpRequest,
    picture_id: SafePictureIdI64,
) -> ActixResult<HttpResponse> {
    PICTURE_SERVICE.get_picture(&req, picture_id.0).await
}

pub async fn delete_picture(
    req: HttpRequest,
    picture_id: SafePictureIdI64,
) -> ActixResult<HttpResponse> {
    PICTURE_SERVICE.delete_picture(&req, picture_id.0).await
}

// 配置路由
pub fn configure_pictures_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/pictures")
            .service(
                web::resource("")
                    .route(web::get().to(list_pictures))
                    .route(
                        web::post()
                            .to(create_picture)
                            .wrap(RateLimit::media_upload()),
                    ),
            )
            .service(
                web::resource("/{picture_id}")
                    .route(web::get().to(get_picture))
                    .route(web::delete().to(delete_picture)),
            ),
    );
}
