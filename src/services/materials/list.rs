use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::middlewares::RequireJWT;
use crate::models::materials::requests::{MaterialListParams, MaterialListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出资料
///
/// 学员看到面向全体的资料和已报名班级的资料。
pub async fn list_materials(
    service: &MaterialService,
    request: &HttpRequest,
    query: MaterialListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let mut list_query = MaterialListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        batch_id: query.batch_id,
        course_id: query.course_id,
        visible_batch_ids: None,
        search: query.search,
    };

    if current_user.role == UserRole::Student {
        let batch_ids = match storage.list_student_batch_ids(current_user.id).await {
            Ok(ids) => ids,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询资料失败: {e}"),
                    )),
                );
            }
        };
        list_query.visible_batch_ids = Some(batch_ids);
    }

    match storage.list_materials_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询资料失败: {e}"),
            )),
        ),
    }
}
