use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 学员提交作业
///
/// 截止时间只用于打 late 标签，从不拦截提交。
/// 不做 (学员, 作业) 去重：再次提交会产生新的一行。
pub async fn submit_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    req: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if current_user.role != UserRole::Student {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有学员可以提交作业",
        )));
    }

    // 文本和附件至少一项
    let has_content = req
        .content
        .as_ref()
        .is_some_and(|c| !c.trim().is_empty());
    if !has_content && req.attachment.is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "提交内容不能为空",
        )));
    }

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("提交失败: {e}"),
                )),
            );
        }
    };

    // 必须已报名该班级
    match storage
        .get_enrollment(assignment.batch_id, current_user.id)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::BatchPermissionDenied,
                "您未报名该班级",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("提交失败: {e}"),
                )),
            );
        }
    }

    // 附件校验：文件必须存在且属于当前学员
    if let Some(ref token) = req.attachment {
        match storage.get_file_by_token(token).await {
            Ok(Some(file)) if file.user_id == current_user.id => {}
            Ok(Some(_)) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "无权使用此文件",
                )));
            }
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::FileNotFound,
                    "附件不存在",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("提交失败: {e}"),
                    )),
                );
            }
        }
    }

    // 迟交只是标签，不是门槛
    let status = if assignment.is_overdue(chrono::Utc::now()) {
        SubmissionStatus::Late
    } else {
        SubmissionStatus::Submitted
    };

    match storage
        .create_submission(
            assignment_id,
            current_user.id,
            req.content,
            req.attachment,
            status,
        )
        .await
    {
        Ok(submission) => {
            tracing::info!(
                "Student {} submitted assignment {} (submission {})",
                current_user.id,
                assignment_id,
                submission.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "提交成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交失败: {e}"),
            )),
        ),
    }
}
