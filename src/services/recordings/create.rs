use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RecordingService;
use crate::middlewares::RequireJWT;
use crate::models::recordings::requests::CreateRecordingRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 发布录播
///
/// video_url 可以是外部链接，也可以是已上传文件的 download_token。
pub async fn create_recording(
    service: &RecordingService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateRecordingRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if req.title.trim().is_empty() || req.video_url.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "录播标题和视频地址不能为空",
        )));
    }

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
                    format!("发布录播失败: {e}"),
                )),
            );
        }
    };

    if current_user.role != UserRole::Admin && batch.teacher_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::BatchPermissionDenied,
            "只能给自己负责的班级发布录播",
        )));
    }

    match storage.create_recording(created_by, req).await {
        Ok(recording) => Ok(HttpResponse::Ok().json(ApiResponse::success(recording, "发布成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("发布录播失败: {e}"),
            )),
        ),
    }
}
