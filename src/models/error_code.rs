//! API 业务错误码
//!
//! 错误码按 HTTP 状态分段：4xxyy / 5xxyy，0 表示成功。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400 参数错误
    BadRequest = 40000,
    InvalidParams = 40001,
    FileTypeNotAllowed = 40002,
    MultifileUploadNotAllowed = 40003,

    // 401 认证错误
    Unauthorized = 40100,
    AuthFailed = 40101,
    TokenExpired = 40102,

    // 403 权限错误
    Forbidden = 40300,
    BatchPermissionDenied = 40301,

    // 404 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    CourseNotFound = 40402,
    BatchNotFound = 40403,
    AssignmentNotFound = 40404,
    SubmissionNotFound = 40405,
    AttendanceNotFound = 40406,
    FeeNotFound = 40407,
    NoticeNotFound = 40408,
    RecordingNotFound = 40409,
    MaterialNotFound = 40410,
    FileNotFound = 40411,

    // 409 冲突
    UserAlreadyExists = 40900,
    AlreadyEnrolled = 40901,

    // 413 负载过大
    FileSizeExceeded = 41300,

    // 429 频率限制
    TooManyRequests = 42900,

    // 500 服务器错误
    InternalServerError = 50000,
    FileUploadFailed = 50001,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::FileSizeExceeded as i32, 41300);
        assert_eq!(ErrorCode::InternalServerError as i32, 50000);
    }
}
