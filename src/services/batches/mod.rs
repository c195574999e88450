pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod students;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::batches::requests::{
    BatchQueryParams, CreateBatchRequest, EnrollStudentRequest, UpdateBatchRequest,
};
use crate::models::common::PaginationQuery;
use crate::storage::Storage;

pub struct BatchService {
    storage: Option<Arc<dyn Storage>>,
}

impl BatchService {
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

    pub async fn create_batch(
        &self,
        request: &HttpRequest,
        req: CreateBatchRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_batch(self, request, req).await
    }

    pub async fn list_batches(
        &self,
        request: &HttpRequest,
        query: BatchQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_batches(self, request, query).await
    }

    pub async fn get_batch(
        &self,
        request: &HttpRequest,
        batch_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_batch(self, request, batch_id).await
    }

    pub async fn update_batch(
        &self,
        request: &HttpRequest,
        batch_id: i64,
        req: UpdateBatchRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_batch(self, request, batch_id, req).await
    }

    pub async fn delete_batch(
        &self,
        request: &HttpRequest,
        batch_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_batch(self, request, batch_id).await
    }

    pub async fn list_batch_students(
        &self,
        request: &HttpRequest,
        batch_id: i64,
        pagination: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        students::list_batch_students(self, request, batch_id, pagination).await
    }

    pub async fn enroll_student(
        &self,
        request: &HttpRequest,
        batch_id: i64,
        req: EnrollStudentRequest,
    ) -> ActixResult<HttpResponse> {
        students::enroll_student(self, request, batch_id, req).await
    }

    pub async fn unenroll_student(
        &self,
        request: &HttpRequest,
        batch_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        students::unenroll_student(self, request, batch_id, student_id).await
    }
}
