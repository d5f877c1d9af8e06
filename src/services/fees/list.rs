use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{
    ErrorCode,
    fees::requests::{FeeListQuery, FeeQueryParams},
};
use crate::services::common::list_response;

pub async fn list_fees(
    service: &FeeService,
    request: &HttpRequest,
    query: FeeQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = FeeListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: query.student_id,
        type_id: query.type_id,
        status: query.status,
    };

    Ok(list_response(
        storage.list_fees_with_pagination(list_query).await,
        (ErrorCode::FeeNotFound, "No fees found"),
        "Fees retrieved successfully",
        "Fee query",
    ))
}
