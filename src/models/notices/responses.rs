use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::notices::entities::Notice;

// 通知列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notice.ts")]
pub struct NoticeListResponse {
    pub items: Vec<Notice>,
    pub pagination: PaginationInfo,
}
