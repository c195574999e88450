use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::{SubmissionListParams, SubmissionListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出提交
///
/// 学员强制只看自己的提交；教师需要给定 assignment_id 并校验归属；管理员不限。
/// 作业被删除后其提交仍会出现在这里（孤儿行不隐藏）。
pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    query: SubmissionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let mut list_query = SubmissionListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        assignment_id: query.assignment_id,
        student_id: query.student_id,
        status: query.status,
    };

    match current_user.role {
        UserRole::Student => {
            // 学员只能查自己的提交
            list_query.student_id = Some(current_user.id);
        }
        UserRole::Teacher => {
            let assignment_id = match list_query.assignment_id {
                Some(id) => id,
                None => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::InvalidParams,
                        "教师查询提交需要指定 assignment_id",
                    )));
                }
            };

            // 校验作业归属
            let assignment = match storage.get_assignment_by_id(assignment_id).await {
                Ok(Some(assignment)) => assignment,
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::AssignmentNotFound,
                        "作业不存在",
                    )));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询作业失败: {e}"),
                        ),
                    ));
                }
            };

            let owns = assignment.created_by == current_user.id
                || match storage.get_batch_by_id(assignment.batch_id).await {
                    Ok(batch) => batch.is_some_and(|b| b.teacher_id == current_user.id),
                    Err(_) => false,
                };

            if !owns {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "没有查看该作业提交的权限",
                )));
            }
        }
        UserRole::Admin => {}
    }

    match storage.list_submissions_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询提交失败: {e}"),
            )),
        ),
    }
}
