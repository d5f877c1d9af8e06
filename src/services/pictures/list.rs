use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PictureService;
use crate::models::{
    ErrorCode,
    pictures::requests::{PictureListQuery, PictureQueryParams},
};
use crate::services::common::list_response;

pub async fn list_pictures(
    service: &PictureService,
    request: &HttpRequest,
    query: PictureQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = PictureListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: query.student_id,
    };

    Ok(list_response(
        storage.list_pictures_with_pagination(list_query).await,
        (ErrorCode::PictureNotFound, "No pictures found"),
        "Pictures retrieved successfully",
        "Picture query",
    ))
}
