use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

/// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub batch_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub total_marks: Option<f64>,
    pub due_date: Option<DateTime<Utc>>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub attachment: Option<String>,      // download_token
}

/// 更新作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub total_marks: Option<f64>,
    pub due_date: Option<DateTime<Utc>>, // ISO 8601 格式
    pub attachment: Option<String>,      // download_token
}

/// 提交作业请求（文本和附件至少一项）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubmitAssignmentRequest {
    pub content: Option<String>,
    pub attachment: Option<String>, // download_token
}

/// 作业列表查询参数（HTTP 请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub batch_id: Option<i64>,
    pub course_id: Option<i64>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub batch_id: Option<i64>,
    pub course_id: Option<i64>,
    pub created_by: Option<i64>,
    // 限定这些班级（学员视角：已报名班级）
    pub batch_ids: Option<Vec<i64>>,
    pub search: Option<String>,
}
