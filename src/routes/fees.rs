use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::fees::requests::{CreateFeeRequest, FeeQueryParams, UpdateFeeRequest};
use crate::services::FeeService;
use crate::utils::SafeFeeIdI64;

// 懒加载的全局 FeeService 实例
static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

pub async fn list_fees(
    req: HttpRequest,
    query: web::Query<FeeQueryParams>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_fees(&req, query.into_inner()).await
}

pub async fn create_fee(
    req: HttpRequest,
    data: web::Json<CreateFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.create_fee(&req, data.into_inner()).await
}

pub async fn get_fee(req: HttpRequest, fee_id: SafeFeeIdI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.get_fee(&req, fee_id.0).await
}

pub async fn update_fee(
    req: HttpRequest,
    fee_id: SafeFeeIdI64,
    data: web::Json<UpdateFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .update_fee(&req, fee_id.0, data.into_inner())
        .await
}

pub async fn delete_fee(req: HttpRequest, fee_id: SafeFeeIdI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.delete_fee(&req, fee_id.0).await
}

// 配置费用路由
pub fn configure_fees_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fees")
            .service(
                web::resource("")
                    .route(web::get().to(list_fees))
                    .route(web::post().to(create_fee)),
            )
            .service(
                web::resource("/{fee_id}")
                    .route(web::get().to(get_fee))
                    .route(web::put().to(update_fee))
                    .route(web::delete().to(delete_fee)),
            ),
    );
}
