use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, check_grading_permission};
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::BulkGradeRequest;
use crate::models::submissions::responses::{BulkGradeResponse, BulkGradeResult};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_grade;

/// 批量评分
/// PUT /submissions/bulk-grade
///
/// 每条独立应用，没有全或无语义：某条失败不影响之前已写入的条目，
/// 也不回滚。调用方根据逐条结果决定重试哪些。
pub async fn bulk_grade(
    service: &SubmissionService,
    request: &HttpRequest,
    req: BulkGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if req.items.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "评分列表不能为空",
        )));
    }

    let mut results: Vec<BulkGradeResult> = Vec::with_capacity(req.items.len());
    let mut graded = 0i64;
    let mut failed = 0i64;

    for item in req.items {
        let outcome = grade_one(
            &storage,
            &current_user,
            item.submission_id,
            item.grade,
            item.feedback,
        )
        .await;

        match outcome {
            Ok(()) => {
                graded += 1;
                results.push(BulkGradeResult {
                    submission_id: item.submission_id,
                    success: true,
                    message: "评分成功".to_string(),
                });
            }
            Err(msg) => {
                failed += 1;
                results.push(BulkGradeResult {
                    submission_id: item.submission_id,
                    success: false,
                    message: msg,
                });
            }
        }
    }

    tracing::info!(
        "Bulk grade by user {}: {} graded, {} failed",
        current_user.id,
        graded,
        failed
    );

    let response = BulkGradeResponse {
        graded,
        failed,
        results,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "批量评分完成")))
}

async fn grade_one(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    current_user: &crate::models::users::entities::User,
    submission_id: i64,
    grade: f64,
    feedback: Option<String>,
) -> Result<(), String> {
    let submission = storage
        .get_submission_by_id(submission_id)
        .await
        .map_err(|e| format!("查询提交失败: {e}"))?
        .ok_or_else(|| "提交不存在".to_string())?;

    if !check_grading_permission(storage, current_user, &submission).await? {
        return Err("没有评分权限".to_string());
    }

    let total_marks = match storage
        .get_assignment_by_id(submission.assignment_id)
        .await
        .map_err(|e| format!("查询作业失败: {e}"))?
    {
        Some(assignment) => assignment.total_marks,
        None => 100.0,
    };

    validate_grade(grade, total_marks)?;

    storage
        .grade_submission(submission_id, current_user.id, grade, feedback)
        .await
        .map_err(|e| format!("评分失败: {e}"))?
        .ok_or_else(|| "提交不存在".to_string())?;

    Ok(())
}
