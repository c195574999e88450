use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::fees::requests::FeeSummaryParams;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 学员费用汇总
/// GET /fees/summary?student_id=
pub async fn get_fee_summary(
    service: &FeeService,
    request: &HttpRequest,
    query: FeeSummaryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 学员只能汇总自己的费用
    let student_id = if current_user.role == UserRole::Student {
        current_user.id
    } else {
        query.student_id
    };

    match storage.get_fee_summary(student_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询费用汇总失败: {e}"),
            )),
        ),
    }
}
