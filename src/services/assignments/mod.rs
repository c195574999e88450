pub mod create;
pub mod dashboard;
pub mod delete;
pub mod detail;
pub mod list;
pub mod submit;
pub mod summary;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::{
    AssignmentListParams, CreateAssignmentRequest, SubmitAssignmentRequest,
    UpdateAssignmentRequest,
};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        query: AssignmentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, request, query).await
    }

    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, request, created_by, req).await
    }

    pub async fn get_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_assignment(self, request, assignment_id).await
    }

    pub async fn update_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        update::update_assignment(self, request, assignment_id, req, user_id).await
    }

    pub async fn delete_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, request, assignment_id, user_id).await
    }

    pub async fn submit_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: SubmitAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, request, assignment_id, req).await
    }

    pub async fn get_assignment_summary(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        summary::get_assignment_summary(self, request, assignment_id).await
    }

    pub async fn get_teacher_dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::get_teacher_dashboard(self, request).await
    }

    pub async fn get_student_dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::get_student_dashboard(self, request).await
    }
}

/// 作业归属权限：创建者、所在班级的授课教师或管理员
pub(crate) async fn check_assignment_ownership(
    storage: &Arc<dyn Storage>,
    user: &crate::models::users::entities::User,
    assignment: &crate::models::assignments::entities::Assignment,
) -> Result<bool, crate::errors::CCMSError> {
    use crate::models::users::entities::UserRole;

    if user.role == UserRole::Admin {
        return Ok(true);
    }

    if assignment.created_by == user.id {
        return Ok(true);
    }

    if let Some(batch) = storage.get_batch_by_id(assignment.batch_id).await? {
        return Ok(batch.teacher_id == user.id);
    }

    Ok(false)
}
