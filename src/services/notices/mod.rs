pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notices::requests::{
    CreateNoticeRequest, NoticeListParams, UpdateNoticeRequest,
};
use crate::storage::Storage;

pub struct NoticeService {
    storage: Option<Arc<dyn Storage>>,
}

impl NoticeService {
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

    pub async fn create_notice(
        &self,
        request: &HttpRequest,
        created_by: i64,
        req: CreateNoticeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_notice(self, request, created_by, req).await
    }

    pub async fn list_notices(
        &self,
        request: &HttpRequest,
        query: NoticeListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_notices(self, request, query).await
    }

    pub async fn update_notice(
        &self,
        request: &HttpRequest,
        notice_id: i64,
        req: UpdateNoticeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_notice(self, request, notice_id, req).await
    }

    pub async fn delete_notice(
        &self,
        request: &HttpRequest,
        notice_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_notice(self, request, notice_id).await
    }
}
