pub mod bulk_grade;
pub mod detail;
pub mod grade;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{
    BulkGradeRequest, GradeSubmissionRequest, SubmissionListParams,
};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        query: SubmissionListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request, query).await
    }

    pub async fn get_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_submission(self, request, submission_id).await
    }

    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, req).await
    }

    pub async fn bulk_grade(
        &self,
        request: &HttpRequest,
        req: BulkGradeRequest,
    ) -> ActixResult<HttpResponse> {
        bulk_grade::bulk_grade(self, request, req).await
    }
}

/// 评分权限：提交所属作业的创建者、班级授课教师或管理员
pub(crate) async fn check_grading_permission(
    storage: &Arc<dyn Storage>,
    user: &crate::models::users::entities::User,
    submission: &crate::models::submissions::entities::Submission,
) -> Result<bool, String> {
    use crate::models::users::entities::UserRole;

    if user.role == UserRole::Admin {
        return Ok(true);
    }

    let assignment = storage
        .get_assignment_by_id(submission.assignment_id)
        .await
        .map_err(|e| format!("查询作业失败: {e}"))?
        .ok_or_else(|| "作业不存在".to_string())?;

    if assignment.created_by == user.id {
        return Ok(true);
    }

    let batch = storage
        .get_batch_by_id(assignment.batch_id)
        .await
        .map_err(|e| format!("查询班级失败: {e}"))?;

    Ok(batch.is_some_and(|b| b.teacher_id == user.id))
}
