use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::fees::requests::CreateFeeRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_fee(
    service: &FeeService,
    request: &HttpRequest,
    req: CreateFeeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if !req.amount.is_finite() || req.amount <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "金额必须是正数",
        )));
    }

    if let Some(discount) = req.discount
        && (!discount.is_finite() || discount < 0.0 || discount > req.amount)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "折扣必须在 0 与金额之间",
        )));
    }

    // 费用对象必须是学员
    match storage.get_user_by_id(req.student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidParams,
                "指定的用户不是学员",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "学员不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建费用单失败: {e}"),
                )),
            );
        }
    }

    match storage.create_fee(req).await {
        Ok(fee) => Ok(HttpResponse::Ok().json(ApiResponse::success(fee, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建费用单失败: {e}"),
            )),
        ),
    }
}
