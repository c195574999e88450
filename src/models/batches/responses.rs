use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::batches::entities::Batch;

// 班级列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct BatchListResponse {
    pub items: Vec<Batch>,
    pub pagination: PaginationInfo,
}

// 班级学员列表项（关联用户信息）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct BatchStudentItem {
    pub id: i64,
    pub student_id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

// 班级学员列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct BatchStudentListResponse {
    pub items: Vec<BatchStudentItem>,
    pub pagination: PaginationInfo,
}
