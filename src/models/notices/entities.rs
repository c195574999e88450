use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通知公告
// batch_id 为空时面向全部学员广播
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notice.ts")]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub batch_id: Option<i64>,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
