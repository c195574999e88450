use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, check_grading_permission};
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_grade;

/// 评分
/// PUT /submissions/{id}/grade
///
/// 只更新该提交一行；课程级统计不做联动，由下次汇总查询重新聚合。
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    match check_grading_permission(&storage, &current_user, &submission).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "没有评分权限",
            )));
        }
        Err(msg) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::AssignmentNotFound, msg)));
        }
    }

    // 分数必须在 [0, 满分] 区间
    let total_marks = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => assignment.total_marks,
        _ => 100.0,
    };

    if let Err(msg) = validate_grade(req.grade, total_marks) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParams, msg)));
    }

    match storage
        .grade_submission(submission_id, current_user.id, req.grade, req.feedback)
        .await
    {
        Ok(Some(submission)) => {
            tracing::info!(
                "Submission {} graded {} by user {}",
                submission_id,
                req.grade,
                current_user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "评分成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("评分失败: {e}"),
            )),
        ),
    }
}
