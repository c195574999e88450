use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NoticeService;
use crate::models::notices::requests::CreateNoticeRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 发布通知
///
/// batch_id 为空表示面向全部学员广播。
pub async fn create_notice(
    service: &NoticeService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateNoticeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().is_empty() || req.body.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "通知标题和内容不能为空",
        )));
    }

    // 定向通知的班级必须存在
    if let Some(batch_id) = req.batch_id {
        match storage.get_batch_by_id(batch_id).await {
            Ok(Some(_)) => {}
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
                        format!("发布通知失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_notice(created_by, req).await {
        Ok(notice) => Ok(HttpResponse::Ok().json(ApiResponse::success(notice, "发布成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("发布通知失败: {e}"),
            )),
        ),
    }
}
