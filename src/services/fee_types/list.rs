use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeTypeService;
use crate::models::{
    ErrorCode,
    fee_types::requests::{FeeTypeListQuery, FeeTypeQueryParams},
};
use crate::services::common::list_response;

pub async fn list_fee_types(
    service: &FeeTypeService,
    request: &HttpRequest,
    query: FeeTypeQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = FeeTypeListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
    };

    Ok(list_response(
        storage.list_fee_types_with_pagination(list_query).await,
        (ErrorCode::FeeTypeNotFound, "No fee types found"),
        "Fee types retrieved successfully",
        "Fee type query",
    ))
}
