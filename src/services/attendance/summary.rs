use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::AttendanceSummaryParams;
use crate::models::attendance::responses::AttendanceSummaryResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 考勤汇总（按学员聚合）
///
/// 每次请求对筛选范围内的记录重新聚合，出勤率不做存储。
pub async fn get_attendance_summary(
    service: &AttendanceService,
    request: &HttpRequest,
    query: AttendanceSummaryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 学员只能汇总自己的考勤
    let student_id = if current_user.role == UserRole::Student {
        Some(current_user.id)
    } else {
        query.student_id
    };

    match storage
        .summarize_attendance(query.batch_id, student_id, query.from, query.to)
        .await
    {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceSummaryResponse { items },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询考勤汇总失败: {e}"),
            )),
        ),
    }
}
