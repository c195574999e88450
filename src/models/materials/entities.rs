use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学习资料（附件必填；batch_id/course_id 至少一个用于定位可见范围）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct Material {
    pub id: i64,
    pub batch_id: Option<i64>,
    pub course_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub attachment: String, // download_token
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
