use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self};
use crate::models::submissions::requests::{
    BulkGradeRequest, GradeSubmissionRequest, SubmissionListParams,
};
use crate::models::users::entities::UserRole;
use crate::services::SubmissionService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 列出提交
pub async fn list_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListParams>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner())
        .await
}

// 获取提交详情
pub async fn get_submission(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.get_submission(&req, path.0).await
}

// 评分
pub async fn grade_submission(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, path.0, body.into_inner())
        .await
}

// 批量评分
pub async fn bulk_grade(
    req: HttpRequest,
    body: web::Json<BulkGradeRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.bulk_grade(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            // 列出提交 - 所有登录用户（业务层：学员只看自己的）
            .service(web::resource("").route(web::get().to(list_submissions)))
            // 批量评分 - 仅教师和管理员，逐条应用，无整体回滚
            .service(
                web::resource("/bulk-grade")
                    .route(web::put().to(bulk_grade))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            // 提交详情 - 业务层验证可见性
            .service(web::resource("/{id}").route(web::get().to(get_submission)))
            // 评分 - 仅教师和管理员（业务层验证归属）
            .service(
                web::resource("/{id}/grade")
                    .route(web::put().to(grade_submission))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            ),
    );
}
