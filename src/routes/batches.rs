use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self};
use crate::models::batches::requests::{
    BatchQueryParams, CreateBatchRequest, EnrollStudentRequest, UpdateBatchRequest,
};
use crate::models::common::PaginationQuery;
use crate::models::users::entities::UserRole;
use crate::services::BatchService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 BatchService 实例
static BATCH_SERVICE: Lazy<BatchService> = Lazy::new(BatchService::new_lazy);

// 列出班级
pub async fn list_batches(
    req: HttpRequest,
    query: web::Query<BatchQueryParams>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.list_batches(&req, query.into_inner()).await
}

// 创建班级
pub async fn create_batch(
    req: HttpRequest,
    body: web::Json<CreateBatchRequest>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.create_batch(&req, body.into_inner()).await
}

// 获取班级详情
pub async fn get_batch(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.get_batch(&req, path.0).await
}

// 更新班级
pub async fn update_batch(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateBatchRequest>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE
        .update_batch(&req, path.0, body.into_inner())
        .await
}

// 删除班级
pub async fn delete_batch(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.delete_batch(&req, path.0).await
}

// 列出班级学员
pub async fn list_batch_students(
    req: HttpRequest,
    path: SafeIDI64,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE
        .list_batch_students(&req, path.0, query.into_inner())
        .await
}

// 学员报名
pub async fn enroll_student(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE
        .enroll_student(&req, path.0, body.into_inner())
        .await
}

// 学员退班
pub async fn unenroll_student(
    req: HttpRequest,
    path: SafeIDI64,
    student: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE
        .unenroll_student(&req, path.0, student.0)
        .await
}

// 配置路由
pub fn configure_batches_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/batches")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出班级 - 所有登录用户可访问（业务层按角色过滤）
                    .route(web::get().to(list_batches))
                    // 创建班级 - 仅管理员
                    .route(
                        web::post()
                            .to(create_batch)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 获取班级详情 - 业务层验证学员报名关系
                    .route(web::get().to(get_batch))
                    .route(
                        web::put()
                            .to(update_batch)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_batch)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/students")
                    // 列出学员 - 教师和管理员
                    .route(
                        web::get()
                            .to(list_batch_students)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    // 报名 - 仅管理员
                    .route(
                        web::post()
                            .to(enroll_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/students/{student_id}")
                    // 退班 - 仅管理员
                    .route(
                        web::delete()
                            .to(unenroll_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
