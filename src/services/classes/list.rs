use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{
    ErrorCode,
    classes::requests::{ClassListQuery, ClassQueryParams},
};
use crate::services::common::list_response;

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = ClassListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        section: query.section,
        search: query.search,
    };

    Ok(list_response(
        storage.list_classes_with_pagination(list_query).await,
        (ErrorCode::ClassNotFound, "No classes found"),
        "Classes retrieved successfully",
        "Class query",
    ))
}
