pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::recordings::requests::{
    CreateRecordingRequest, RecordingListParams, UpdateRecordingRequest,
};
use crate::storage::Storage;

pub struct RecordingService {
    storage: Option<Arc<dyn Storage>>,
}

impl RecordingService {
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

    pub async fn create_recording(
        &self,
        request: &HttpRequest,
        created_by: i64,
        req: CreateRecordingRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_recording(self, request, created_by, req).await
    }

    pub async fn list_recordings(
        &self,
        request: &HttpRequest,
        query: RecordingListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_recordings(self, request, query).await
    }

    pub async fn get_recording(
        &self,
        request: &HttpRequest,
        recording_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_recording(self, request, recording_id).await
    }

    pub async fn update_recording(
        &self,
        request: &HttpRequest,
        recording_id: i64,
        req: UpdateRecordingRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_recording(self, request, recording_id, req).await
    }

    pub async fn delete_recording(
        &self,
        request: &HttpRequest,
        recording_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_recording(self, request, recording_id).await
    }
}
