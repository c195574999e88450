pub mod common;
pub mod error_code;

pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod batches;
pub mod courses;
pub mod fees;
pub mod files;
pub mod materials;
pub mod notices;
pub mod recordings;
pub mod submissions;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;
pub use error_code::ErrorCode;

/// 应用启动时间（用于统计预处理耗时）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
