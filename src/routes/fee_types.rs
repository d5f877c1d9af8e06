use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::fee_types::requests::{FeeTypeQueryParams, FeeTypeRequest};
use crate::services::FeeTypeService;
use crate::utils::SafeFeeTypeIdI64;

// 懒加载的全局 FeeTypeService 实例
static FEE_TYPE_SERVICE: Lazy<FeeTypeService> = Lazy::new(FeeTypeService::new_lazy);

pub async fn list_fee_types(
    req: HttpRequest,
    query: web::Query<FeeTypeQueryParams>,
) -> ActixResult<HttpResponse> {
    FEE_TYPE_SERVICE.list_fee_types(&req, query.into_inner()).await
}

pub async fn create_fee_type(
    req: HttpRequest,
    data: web::Json<FeeTypeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_TYPE_SERVICE.create_fee_type(&req, data.into_inner()).await
}

pub async fn get_fee_type(
    req: HttpRequest,
    type_id: SafeFeeTypeIdI64,
) -> ActixResult<HttpResponse> {
    FEE_TYPE_SERVICE.get_fee_type(&req, type_id.0).await
}

pub async fn update_fee_type(
    req: HttpRequest,
    type_id: SafeFeeTypeIdI64,
    data: web::Json<FeeTypeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_TYPE_SERVICE
        .update_fee_type(&req, type_id.0, data.into_inner())
        .await
}

pub async fn delete_fee_type(
    req: HttpRequest,
    type_id: SafeFeeTypeIdI64,
) -> ActixResult<HttpResponse> {
    FEE_TYPE_SERVICE.delete_fee_type(&req, type_id.0).await
}

// 配置费用类型路由
pub fn configure_fee_types_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fee-types")
            .service(
                web::resource("")
                    .route(web::get().to(list_fee_types))
                    .route(web::post().to(create_fee_type)),
            )
            .service(
                web::resource("/{type_id}")
                    .route(web::get().to(get_fee_type))
                    .route(web::put().to(update_fee_type))
                    .route(web::delete().to(delete_fee_type)),
            ),
    );
}
