use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::fees::responses::{FeeDetailResponse, FeeView};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 费用详情（含缴费历史）
pub async fn get_fee(
    service: &FeeService,
    request: &HttpRequest,
    fee_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let fee = match storage.get_fee_by_id(fee_id).await {
        Ok(Some(fee)) => fee,
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
                    format!("查询费用失败: {e}"),
                )),
            );
        }
    };

    // 学员只能看自己的费用单
    if current_user.role == UserRole::Student && fee.student_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "没有查看该费用单的权限",
        )));
    }

    let payments = match storage.list_fee_payments(fee_id).await {
        Ok(payments) => payments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询缴费记录失败: {e}"),
                )),
            );
        }
    };

    let paid_total: f64 = payments.iter().map(|p| p.amount).sum();
    let response = FeeDetailResponse {
        view: FeeView::build(fee, paid_total),
        payments,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
