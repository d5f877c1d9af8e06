use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ErrorCode,
    teachers::requests::{TeacherListQuery, TeacherQueryParams},
};
use crate::services::common::list_response;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    query: TeacherQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = TeacherListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
    };

    Ok(list_response(
        storage.list_teachers_with_pagination(list_query).await,
        (ErrorCode::TeacherNotFound, "No teachers found"),
        "Teachers retrieved successfully",
        "Teacher query",
    ))
}
