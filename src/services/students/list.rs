use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ErrorCode,
    students::requests::{StudentListQuery, StudentQueryParams},
};
use crate::services::common::list_response;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = StudentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        class_id: query.class_id,
        search: query.search,
    };

    Ok(list_response(
        storage.list_students_with_pagination(list_query).await,
        (ErrorCode::StudentNotFound, "No students found"),
        "Students retrieved successfully",
        "Student query",
    ))
}
