use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::middlewares::RequireJWT;
use crate::models::materials::requests::CreateMaterialRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 上传学习资料（元数据；文件先经 /files/upload 换 token）
pub async fn create_material(
    service: &MaterialService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateMaterialRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "资料标题不能为空",
        )));
    }

    // 定向班级必须存在
    if let Some(batch_id) = req.batch_id {
        match storage.get_batch_by_id(batch_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::BatchNotFound,
                    "班级不存在",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("创建资料失败: {e}"),
                    )),
                );
            }
        }
    }

    // 附件必须存在且属于当前用户
    match storage.get_file_by_token(&req.attachment).await {
        Ok(Some(file)) if file.user_id == current_user.id => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "无权使用此文件",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "附件不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建资料失败: {e}"),
                )),
            );
        }
    }

    match storage.create_material(created_by, req).await {
        Ok(material) => Ok(HttpResponse::Ok().json(ApiResponse::success(material, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建资料失败: {e}"),
            )),
        ),
    }
}
