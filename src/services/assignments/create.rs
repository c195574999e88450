use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 创建作业
///
/// 没有幂等保障：同一表单提交两次会产生两条作业，与原系统一致。
pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "作业标题不能为空",
        )));
    }

    if let Some(total_marks) = req.total_marks
        && (!total_marks.is_finite() || total_marks <= 0.0)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "满分必须是正数",
        )));
    }

    // 班级必须存在；教师只能在自己负责的班级布置作业
    let batch = match storage.get_batch_by_id(req.batch_id).await {
        Ok(Some(batch)) => batch,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BatchNotFound,
                "班级不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建作业失败: {e}"),
                )),
            );
        }
    };

    if current_user.role != UserRole::Admin && batch.teacher_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::BatchPermissionDenied,
            "只能在自己负责的班级布置作业",
        )));
    }

    // 附件校验：文件必须存在且属于当前用户
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
                        format!("创建作业失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage
        .create_assignment(created_by, batch.course_id, req)
        .await
    {
        Ok(assignment) => {
            tracing::info!(
                "Assignment {} created in batch {} by user {}",
                assignment.id,
                assignment.batch_id,
                created_by
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(assignment, "创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建作业失败: {e}"),
            )),
        ),
    }
}
