use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::fees::requests::RecordPaymentRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 追加缴费
/// POST /fees/{id}/payments
///
/// 缴费历史只追加不修改；允许多缴，读取时待缴金额夹到 0。
pub async fn record_payment(
    service: &FeeService,
    request: &HttpRequest,
    fee_id: i64,
    req: RecordPaymentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if !req.amount.is_finite() || req.amount <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "缴费金额必须是正数",
        )));
    }

    // 费用单必须存在
    match storage.get_fee_by_id(fee_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FeeNotFound,
                "费用单不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("记录缴费失败: {e}"),
                )),
            );
        }
    }

    match storage.record_payment(fee_id, req).await {
        Ok(payment) => {
            tracing::info!("Payment {} recorded for fee {}", payment.id, fee_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(payment, "缴费成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("记录缴费失败: {e}"),
            )),
        ),
    }
}
