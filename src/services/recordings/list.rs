use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RecordingService;
use crate::middlewares::RequireJWT;
use crate::models::recordings::requests::{RecordingListParams, RecordingListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出录播
///
/// 学员只看到已报名班级的录播。
pub async fn list_recordings(
    service: &RecordingService,
    request: &HttpRequest,
    query: RecordingListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let mut list_query = RecordingListQuery {
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
                        format!("查询录播失败: {e}"),
                    )),
                );
            }
        };
        list_query.visible_batch_ids = Some(batch_ids);
    }

    match storage.list_recordings_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询录播失败: {e}"),
            )),
        ),
    }
}
