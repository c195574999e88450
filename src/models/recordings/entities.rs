use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程录播
// video_url 可以是外部链接，也可以是上传文件的 download_token
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/recording.ts")]
pub struct Recording {
    pub id: i64,
    pub batch_id: i64,
    pub course_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
