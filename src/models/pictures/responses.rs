use super::entities::Picture;
use crate::models::common::PaginatedResponse;

pub type PictureListResponse = PaginatedResponse<Picture>;
