use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RecordingService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_recording(
    service: &RecordingService,
    request: &HttpRequest,
    recording_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let recording = match storage.get_recording_by_id(recording_id).await {
        Ok(Some(recording)) => recording,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RecordingNotFound,
                "录播不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询录播失败: {e}"),
                )),
            );
        }
    };

    // 学员必须已报名录播所属班级
    if current_user.role == UserRole::Student {
        match storage
            .get_enrollment(recording.batch_id, current_user.id)
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
                        format!("查询报名关系失败: {e}"),
                    )),
                );
            }
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(recording, "查询成功")))
}
