use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::notices::requests::{
    CreateNoticeRequest, NoticeListParams, UpdateNoticeRequest,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::NoticeService;
use crate::utils::SafeIDI64;

// 懒加载的全局 NoticeService 实例
static NOTICE_SERVICE: Lazy<NoticeService> = Lazy::new(NoticeService::new_lazy);

// 列出通知
pub async fn list_notices(
    req: HttpRequest,
    query: web::Query<NoticeListParams>,
) -> ActixResult<HttpResponse> {
    NOTICE_SERVICE.list_notices(&req, query.into_inner()).await
}

// 发布通知
pub async fn create_notice(
    req: HttpRequest,
    body: web::Json<CreateNoticeRequest>,
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

    NOTICE_SERVICE
        .create_notice(&req, user_id, body.into_inner())
        .await
}

// 更新通知
pub async fn update_notice(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateNoticeRequest>,
) -> ActixResult<HttpResponse> {
    NOTICE_SERVICE
        .update_notice(&req, path.0, body.into_inner())
        .await
}

// 删除通知
pub async fn delete_notice(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    NOTICE_SERVICE.delete_notice(&req, path.0).await
}

// 配置路由
pub fn configure_notices_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notices")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出通知 - 所有登录用户（业务层：学员只看广播和自己班级的）
                    .route(web::get().to(list_notices))
                    // 发布通知 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_notice)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::put()
                            .to(update_notice)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_notice)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
