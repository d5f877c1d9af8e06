pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::fee_types::requests::{FeeTypeRequest, FeeTypeQueryParams};
use crate::storage::Storage;

pub struct FeeTypeService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeTypeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_fee_types(
        &self,
        request: &HttpRequest,
        query: FeeTypeQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_fee_types(self, request, query).await
    }

    pub async fn create_fee_type(
        &self,
        request: &HttpRequest,
        data: FeeTypeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_fee_type(self, request, data).await
    }

    pub async fn get_fee_type(
        &self,
        request: &HttpRequest,
        type_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_fee_type(self, request, type_id).await
    }

    pub async fn update_fee_type(
        &self,
        request: &HttpRequest,
        type_id: i64,
        data: FeeTypeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_fee_type(self, request, type_id, data).await
    }

    pub async fn delete_fee_type(
        &self,
        request: &HttpRequest,
        type_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_fee_type(self, request, type_id).await
    }
}
