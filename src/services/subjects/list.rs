use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::{
    ErrorCode,
    subjects::requests::{SubjectListQuery, SubjectQueryParams},
};
use crate::services::common::list_response;

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
    query: SubjectQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = SubjectListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        teacher_id: query.teacher_id,
        search: query.search,
    };

    Ok(list_response(
        storage.list_subjects_with_pagination(list_query).await,
        (ErrorCode::SubjectNotFound, "No subjects found"),
        "Subjects retrieved successfully",
        "Subject query",
    ))
}
