use serde::Serialize;
use ts_rs::TS;

// 文件上传响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct FileUploadResponse {
    pub download_token: String,
    pub file_name: String,
    pub size: i64,
    pub content_type: String,
    pub url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 文件基础信息（嵌入其它资源的响应）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct FileInfo {
    pub download_token: String,
    pub file_name: String,
    pub size: i64,
    pub content_type: String,
    pub url: String,
}
