use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RecordingService;
use crate::middlewares::RequireJWT;
use crate::models::recordings::requests::UpdateRecordingRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_recording(
    service: &RecordingService,
    request: &HttpRequest,
    recording_id: i64,
    req: UpdateRecordingRequest,
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

    if current_user.role != UserRole::Admin && recording.created_by != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能修改自己发布的录播",
        )));
    }

    match storage.update_recording(recording_id, req).await {
        Ok(Some(recording)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(recording, "更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RecordingNotFound,
            "录播不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新录播失败: {e}"),
            )),
        ),
    }
}
