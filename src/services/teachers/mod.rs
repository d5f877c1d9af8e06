pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::teachers::requests::{TeacherRequest, TeacherQueryParams};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_teachers(
        &self,
        request: &HttpRequest,
        query: TeacherQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request, query).await
    }

    pub async fn create_teacher(
        &self,
        request: &HttpRequest,
        data: TeacherRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, request, data).await
    }

    pub async fn get_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_teacher(self, request, teacher_id).await
    }

    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
        data: TeacherRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, request, teacher_id, data).await
    }

    pub async fn delete_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, request, teacher_id).await
    }
}
