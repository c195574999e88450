use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::{AssignmentListParams, AssignmentListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出作业
///
/// 学员只看到已报名班级的作业（附带自己的提交摘要），
/// 教师只看到自己负责班级的作业，管理员全量。
pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    query: AssignmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let mut list_query = AssignmentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        batch_id: query.batch_id,
        course_id: query.course_id,
        created_by: None,
        batch_ids: None,
        search: query.search,
    };

    let mut current_user_id = None;

    match current_user.role {
        UserRole::Student => {
            let batch_ids = match storage.list_student_batch_ids(current_user.id).await {
                Ok(ids) => ids,
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询作业失败: {e}"),
                        ),
                    ));
                }
            };
            list_query.batch_ids = Some(batch_ids);
            current_user_id = Some(current_user.id);
        }
        UserRole::Teacher => {
            let batch_ids = match storage.list_teacher_batch_ids(current_user.id).await {
                Ok(ids) => ids,
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询作业失败: {e}"),
                        ),
                    ));
                }
            };
            list_query.batch_ids = Some(batch_ids);
        }
        UserRole::Admin => {}
    }

    match storage
        .list_assignments_with_pagination(list_query, current_user_id)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询作业失败: {e}"),
            )),
        ),
    }
}
