pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::attendance::requests::{
    CreateAttendanceRequest, UpdateAttendanceRequest, AttendanceQueryParams,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_attendance(
        &self,
        request: &HttpRequest,
        query: AttendanceQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, request, query).await
    }

    pub async fn create_attendance(
        &self,
        request: &HttpRequest,
        data: CreateAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_attendance(self, request, data).await
    }

    pub async fn get_attendance(
        &self,
        request: &HttpRequest,
        attendance_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_attendance(self, request, attendance_id).await
    }

    pub async fn update_attendance(
        &self,
        request: &HttpRequest,
        attendance_id: i64,
        data: UpdateAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attendance(self, request, attendance_id, data).await
    }

    pub async fn delete_attendance(
        &self,
        request: &HttpRequest,
        attendance_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_attendance(self, request, attendance_id).await
    }
}
