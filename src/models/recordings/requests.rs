use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

// 创建录播请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/recording.ts")]
pub struct CreateRecordingRequest {
    pub batch_id: i64,
    pub course_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
}

// 更新录播请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/recording.ts")]
pub struct UpdateRecordingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
}

// 录播查询参数（HTTP 请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/recording.ts")]
pub struct RecordingListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub batch_id: Option<i64>,
    pub course_id: Option<i64>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct RecordingListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub batch_id: Option<i64>,
    pub course_id: Option<i64>,
    // 学员视角：已报名班级
    pub visible_batch_ids: Option<Vec<i64>>,
    pub search: Option<String>,
}
