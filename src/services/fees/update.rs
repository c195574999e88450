use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::fees::requests::UpdateFeeRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_fee(
    service: &FeeService,
    request: &HttpRequest,
    fee_id: i64,
    req: UpdateFeeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(amount) = req.amount
        && (!amount.is_finite() || amount <= 0.0)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "金额必须是正数",
        )));
    }

    if let Some(discount) = req.discount
        && (!discount.is_finite() || discount < 0.0)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "折扣不能为负数",
        )));
    }

    match storage.update_fee(fee_id, req).await {
        Ok(Some(fee)) => Ok(HttpResponse::Ok().json(ApiResponse::success(fee, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeeNotFound,
            "费用单不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新费用单失败: {e}"),
            )),
        ),
    }
}
