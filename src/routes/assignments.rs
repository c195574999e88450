use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::assignments::requests::{
    AssignmentListParams, CreateAssignmentRequest, SubmitAssignmentRequest,
    UpdateAssignmentRequest,
};
use crate::models::submissions::requests::SubmissionListParams;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{AssignmentService, SubmissionService};
use crate::utils::SafeIDI64;

// 懒加载的全局服务实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 列出作业
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

// 创建作业
pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE
        .create_assignment(&req, user_id, body.into_inner())
        .await
}

// 获取作业详情
pub async fn get_assignment(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(&req, path.0).await
}

// 更新作业
pub async fn update_assignment(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE
        .update_assignment(&req, path.0, body.into_inner(), user_id)
        .await
}

// 删除作业
pub async fn delete_assignment(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE
        .delete_assignment(&req, path.0, user_id)
        .await
}

// 提交作业
pub async fn submit_assignment(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .submit_assignment(&req, path.0, body.into_inner())
        .await
}

// 作业的提交列表
pub async fn list_assignment_submissions(
    req: HttpRequest,
    path: SafeIDI64,
    query: web::Query<SubmissionListParams>,
) -> ActixResult<HttpResponse> {
    let mut params = query.into_inner();
    params.assignment_id = Some(path.0);
    SUBMISSION_SERVICE.list_submissions(&req, params).await
}

// 获取作业统计
pub async fn get_assignment_summary(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .get_assignment_summary(&req, path.0)
        .await
}

// 教师仪表盘
pub async fn get_teacher_dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_teacher_dashboard(&req).await
}

// 学员仪表盘
pub async fn get_student_dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_student_dashboard(&req).await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出作业 - 所有登录用户可访问（业务层按角色过滤）
                    .route(web::get().to(list_assignments))
                    // 创建作业 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 教师仪表盘 - 仅教师和管理员
            .service(
                web::resource("/dashboard/teacher")
                    .route(web::get().to(get_teacher_dashboard))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            // 学员仪表盘 - 所有登录用户可访问
            .service(
                web::resource("/dashboard/student").route(web::get().to(get_student_dashboard)),
            )
            .service(
                web::resource("/{id}")
                    // 获取作业详情 - 业务层验证班级报名关系
                    .route(web::get().to(get_assignment))
                    // 更新作业 - 仅教师和管理员（业务层验证归属）
                    .route(
                        web::put()
                            .to(update_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    // 删除作业 - 仅教师和管理员（提交不级联删除）
                    .route(
                        web::delete()
                            .to(delete_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 提交作业 - 学员（业务层验证角色与报名关系）
            .service(web::resource("/{id}/submit").route(web::post().to(submit_assignment)))
            // 作业的提交列表 - 仅教师和管理员
            .service(
                web::resource("/{id}/submissions")
                    .route(web::get().to(list_assignment_submissions))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            // 作业统计 - 仅教师和管理员（业务层验证归属）
            .service(
                web::resource("/{id}/summary")
                    .route(web::get().to(get_assignment_summary))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            ),
    );
}
