pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod payment;
pub mod summary;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::fees::requests::{
    CreateFeeRequest, FeeListParams, FeeSummaryParams, RecordPaymentRequest, UpdateFeeRequest,
};
use crate::storage::Storage;

pub struct FeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_fee(
        &self,
        request: &HttpRequest,
        req: CreateFeeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_fee(self, request, req).await
    }

    pub async fn list_fees(
        &self,
        request: &HttpRequest,
        query: FeeListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_fees(self, request, query).await
    }

    pub async fn get_fee(&self, request: &HttpRequest, fee_id: i64) -> ActixResult<HttpResponse> {
        detail::get_fee(self, request, fee_id).await
    }

    pub async fn update_fee(
        &self,
        request: &HttpRequest,
        fee_id: i64,
        req: UpdateFeeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_fee(self, request, fee_id, req).await
    }

    pub async fn delete_fee(
        &self,
        request: &HttpRequest,
        fee_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_fee(self, request, fee_id).await
    }

    pub async fn record_payment(
        &self,
        request: &HttpRequest,
        fee_id: i64,
        req: RecordPaymentRequest,
    ) -> ActixResult<HttpResponse> {
        payment::record_payment(self, request, fee_id, req).await
    }

    pub async fn get_fee_summary(
        &self,
        request: &HttpRequest,
        query: FeeSummaryParams,
    ) -> ActixResult<HttpResponse> {
        summary::get_fee_summary(self, request, query).await
    }
}
