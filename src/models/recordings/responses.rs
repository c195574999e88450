use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::recordings::entities::Recording;

// 录播列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/recording.ts")]
pub struct RecordingListResponse {
    pub items: Vec<Recording>,
    pub pagination: PaginationInfo,
}
