pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::fees::requests::{CreateFeeRequest, UpdateFeeRequest, FeeQueryParams};
use crate::storage::Storage;

pub struct FeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from_request(request),
        }
    }

    pub async fn list_fees(
        &self,
        request: &HttpRequest,
        query: FeeQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_fees(self, request, query).await
    }

    pub async fn create_fee(
        &self,
        request: &HttpRequest,
        data: CreateFeeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_fee(self, request, data).await
    }

    pub async fn get_fee(&self, request: &HttpRequest, fee_id: i64) -> ActixResult<HttpResponse> {
        get::get_fee(self, request, fee_id).await
    }

    pub async fn update_fee(
        &self,
        request: &HttpRequest,
        fee_id: i64,
        data: UpdateFeeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_fee(self, request, fee_id, data).await
    }

    pub async fn delete_fee(
        &self,
        request: &HttpRequest,
        fee_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_fee(self, request, fee_id).await
    }
}
