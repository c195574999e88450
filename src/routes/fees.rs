use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self};
use crate::models::fees::requests::{
    CreateFeeRequest, FeeListParams, FeeSummaryParams, RecordPaymentRequest, UpdateFeeRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FeeService;
use crate::utils::SafeIDI64;

// 懒加载的全局 FeeService 实例
static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

// 创建费用单
pub async fn create_fee(
    req: HttpRequest,
    body: web::Json<CreateFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.create_fee(&req, body.into_inner()).await
}

// 列出费用单
pub async fn list_fees(
    req: HttpRequest,
    query: web::Query<FeeListParams>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_fees(&req, query.into_inner()).await
}

// 费用详情
pub async fn get_fee(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.get_fee(&req, path.0).await
}

// 更新费用单
pub async fn update_fee(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .update_fee(&req, path.0, body.into_inner())
        .await
}

// 删除费用单
pub async fn delete_fee(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.delete_fee(&req, path.0).await
}

// 追加缴费
pub async fn record_payment(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<RecordPaymentRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .record_payment(&req, path.0, body.into_inner())
        .await
}

// 学员费用汇总
pub async fn get_fee_summary(
    req: HttpRequest,
    query: web::Query<FeeSummaryParams>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.get_fee_summary(&req, query.into_inner()).await
}

// 配置路由
pub fn configure_fees_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fees")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 创建费用单 - 仅管理员
                    .route(
                        web::post()
                            .to(create_fee)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    // 列出费用单 - 所有登录用户（业务层：学员只看自己的）
                    .route(web::get().to(list_fees)),
            )
            // 费用汇总 - 所有登录用户（业务层：学员只汇总自己的）
            .service(web::resource("/summary").route(web::get().to(get_fee_summary)))
            .service(
                web::resource("/{id}")
                    // 费用详情 - 业务层验证可见性
                    .route(web::get().to(get_fee))
                    .route(
                        web::put()
                            .to(update_fee)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_fee)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // 追加缴费 - 仅管理员
            .service(
                web::resource("/{id}/payments")
                    .route(web::post().to(record_payment))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    );
}
