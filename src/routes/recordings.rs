use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::recordings::requests::{
    CreateRecordingRequest, RecordingListParams, UpdateRecordingRequest,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::RecordingService;
use crate::utils::SafeIDI64;

// 懒加载的全局 RecordingService 实例
static RECORDING_SERVICE: Lazy<RecordingService> = Lazy::new(RecordingService::new_lazy);

// 列出录播
pub async fn list_recordings(
    req: HttpRequest,
    query: web::Query<RecordingListParams>,
) -> ActixResult<HttpResponse> {
    RECORDING_SERVICE
        .list_recordings(&req, query.into_inner())
        .await
}

// 发布录播
pub async fn create_recording(
    req: HttpRequest,
    body: web::Json<CreateRecordingRequest>,
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

    RECORDING_SERVICE
        .create_recording(&req, user_id, body.into_inner())
        .await
}

// 录播详情
pub async fn get_recording(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    RECORDING_SERVICE.get_recording(&req, path.0).await
}

// 更新录播
pub async fn update_recording(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateRecordingRequest>,
) -> ActixResult<HttpResponse> {
    RECORDING_SERVICE
        .update_recording(&req, path.0, body.into_inner())
        .await
}

// 删除录播
pub async fn delete_recording(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    RECORDING_SERVICE.delete_recording(&req, path.0).await
}

// 配置路由
pub fn configure_recordings_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/recordings")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出录播 - 所有登录用户（业务层：学员只看自己班级的）
                    .route(web::get().to(list_recordings))
                    // 发布录播 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_recording)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 录播详情 - 业务层验证报名关系
                    .route(web::get().to(get_recording))
                    .route(
                        web::put()
                            .to(update_recording)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_recording)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
