use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

// 发布通知请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notice.ts")]
pub struct CreateNoticeRequest {
    pub title: String,
    pub body: String,
    pub batch_id: Option<i64>,
}

// 更新通知请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notice.ts")]
pub struct UpdateNoticeRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub batch_id: Option<i64>,
}

// 通知查询参数（HTTP 请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notice.ts")]
pub struct NoticeListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub batch_id: Option<i64>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct NoticeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub batch_id: Option<i64>,
    // 学员视角：广播 + 已报名班级
    pub visible_batch_ids: Option<Vec<i64>>,
    pub search: Option<String>,
}
