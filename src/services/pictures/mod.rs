pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::pictures::requests::PictureQueryParams;
use crate::storage::Storage;

pub struct PictureService {
    storage: Option<Arc<dyn Storage>>,
}

impl PictureService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_pictures(
        &self,
        request: &HttpRequest,
        query: PictureQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_pictures(self, request, query).await
    }

    // 上传学生图片
    pub async fn create_picture(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        create::create_picture(self, request, payload).await
    }

    pub async fn get_picture(
        &self,
        request: &HttpRequest,
        picture_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_picture(self, request, picture_id).await
    }

    pub async fn delete_picture(
        &self,
        request: &HttpRequest,
        picture_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_picture(self, request, picture_id).await
    }
}
