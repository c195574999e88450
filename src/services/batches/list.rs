use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::BatchService;
use crate::middlewares::RequireJWT;
use crate::models::batches::requests::{BatchListQuery, BatchQueryParams};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出班级
///
/// 可见范围按角色收窄：学员只看已报名的班级，教师只看自己负责的班级，管理员全量。
pub async fn list_batches(
    service: &BatchService,
    request: &HttpRequest,
    query: BatchQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let mut list_query = BatchListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        course_id: query.course_id,
        teacher_id: None,
        student_id: None,
        search: query.search,
    };

    match current_user.role {
        UserRole::Student => list_query.student_id = Some(current_user.id),
        UserRole::Teacher => list_query.teacher_id = Some(current_user.id),
        UserRole::Admin => {}
    }

    match storage.list_batches_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级失败: {e}"),
            )),
        ),
    }
}
