use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::MarkAttendanceRequest;
use crate::models::attendance::responses::MarkAttendanceResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 批量点名（一个班级一个上课日）
///
/// 同一 (班级, 学员, 日期) 重复点名会覆盖已有记录而不是再插一行，
/// 所以对同一节课重复提交点名表是幂等的。
pub async fn mark_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    req: MarkAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if req.entries.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "点名列表不能为空",
        )));
    }

    // 班级必须存在；教师只能给自己负责的班级点名
    let batch = match storage.get_batch_by_id(req.batch_id).await {
        Ok(Some(batch)) => batch,
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
                    format!("点名失败: {e}"),
                )),
            );
        }
    };

    if current_user.role != UserRole::Admin && batch.teacher_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::BatchPermissionDenied,
            "只能给自己负责的班级点名",
        )));
    }

    // 全部点名对象必须已报名该班级
    for entry in &req.entries {
        match storage.get_enrollment(req.batch_id, entry.student_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidParams,
                    format!("学员 {} 不在该班级中", entry.student_id),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("点名失败: {e}"),
                    )),
                );
            }
        }
    }

    let mut marked = 0i64;
    let mut updated = 0i64;
    let mut records = Vec::with_capacity(req.entries.len());

    for entry in req.entries {
        match storage
            .upsert_attendance(
                req.batch_id,
                entry.student_id,
                req.date,
                entry.status,
                current_user.id,
            )
            .await
        {
            Ok((record, created)) => {
                if created {
                    marked += 1;
                } else {
                    updated += 1;
                }
                records.push(record);
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("点名失败: {e}"),
                    )),
                );
            }
        }
    }

    tracing::info!(
        "Attendance marked for batch {} on {}: {} new, {} updated",
        req.batch_id,
        req.date,
        marked,
        updated
    );

    let response = MarkAttendanceResponse {
        marked,
        updated,
        records,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "点名成功")))
}
