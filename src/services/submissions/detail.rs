use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, check_grading_permission};
use crate::middlewares::RequireJWT;
use crate::models::submissions::responses::{
    SubmissionAssignmentInfo, SubmissionDetailResponse, SubmissionStudent,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 提交详情
///
/// 提交者本人、作业归属教师或管理员可见。
/// 作业已被删除时 assignment 字段为 null（孤儿提交照常返回）。
pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
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

    // 提交者本人直接放行；其他人按评分权限判定（孤儿提交只有管理员可见）
    if submission.student_id != current_user.id && current_user.role != UserRole::Admin {
        match check_grading_permission(&storage, &current_user, &submission).await {
            Ok(true) => {}
            Ok(false) | Err(_) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "没有查看该提交的权限",
                )));
            }
        }
    }

    let student = match storage.get_user_by_id(submission.student_id).await {
        Ok(Some(user)) => Some(SubmissionStudent {
            id: user.id,
            username: user.username,
            display_name: Some(user.profile.profile_name),
            avatar_url: user.profile.avatar_url,
        }),
        _ => None,
    };

    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => Some(SubmissionAssignmentInfo {
            id: assignment.id,
            title: assignment.title,
            total_marks: assignment.total_marks,
            due_date: assignment.due_date,
        }),
        _ => None,
    };

    let response = SubmissionDetailResponse {
        submission,
        student,
        assignment,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
