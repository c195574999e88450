use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 文件记录
// 实际字节存放在 {upload.dir}/{category}/{stored_name}
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct StoredFile {
    pub download_token: String,
    pub original_name: String,
    #[serde(skip_serializing)]
    #[ts(skip)]
    pub stored_name: String,
    // MIME 大类目录: images / documents / videos / others
    pub category: String,
    pub file_size: i64,
    pub file_type: String,
    pub user_id: i64,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
