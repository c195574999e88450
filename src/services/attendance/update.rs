use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::UpdateAttendanceRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 更新单条考勤（显式修正入口）
pub async fn update_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    id: i64,
    req: UpdateAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let record = match storage.get_attendance_by_id(id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AttendanceNotFound,
                "考勤记录不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考勤失败: {e}"),
                )),
            );
        }
    };

    // 教师只能修正自己负责班级的记录
    if current_user.role != UserRole::Admin {
        let owns = match storage.get_batch_by_id(record.batch_id).await {
            Ok(batch) => batch.is_some_and(|b| b.teacher_id == current_user.id),
            Err(_) => false,
        };
        if !owns {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::BatchPermissionDenied,
                "只能修正自己负责班级的考勤",
            )));
        }
    }

    match storage.update_attendance(id, req.status).await {
        Ok(Some(record)) => Ok(HttpResponse::Ok().json(ApiResponse::success(record, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "考勤记录不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新考勤失败: {e}"),
            )),
        ),
    }
}
