//! 路径参数安全提取器
//!
//! 在进入处理函数前校验路径参数格式，非法输入直接以统一响应结构拒绝。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ApiResponse, ErrorCode};

/// 生成 i64 路径参数提取器的宏
macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let value = req.match_info().get($param).unwrap_or_default();
                match value.parse::<i64>() {
                    Ok(id) if id > 0 => ready(Ok($name(id))),
                    _ => {
                        let resp = HttpResponse::BadRequest().json(
                            ApiResponse::<()>::error_empty(
                                ErrorCode::InvalidParams,
                                format!("无效的路径参数 {}: '{}'", $param, value),
                            ),
                        );
                        ready(Err(InternalError::from_response(
                            format!("invalid path param {}", $param),
                            resp,
                        )
                        .into()))
                    }
                }
            }
        }
    };
}

define_safe_id_extractor!(SafeIDI64, "id");
define_safe_id_extractor!(SafeStudentIdI64, "student_id");

// download_token 只允许 UUID 字符集，防止路径穿越
static FILE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F-]{32,36}$").expect("Invalid file token regex"));

#[derive(Debug, Clone)]
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let value = req.match_info().get("token").unwrap_or_default();
        if FILE_TOKEN_RE.is_match(value) {
            ready(Ok(SafeFileToken(value.to_string())))
        } else {
            let resp = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
                ErrorCode::InvalidParams,
                format!("无效的文件标识: '{value}'"),
            ));
            ready(Err(InternalError::from_response(
                "invalid file token".to_string(),
                resp,
            )
            .into()))
        }
    }
}
