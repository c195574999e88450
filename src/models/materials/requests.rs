use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

// 上传资料请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct CreateMaterialRequest {
    pub batch_id: Option<i64>,
    pub course_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub attachment: String, // download_token
}

// 更新资料请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct UpdateMaterialRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub attachment: Option<String>,
}

// 资料查询参数（HTTP 请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct MaterialListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub batch_id: Option<i64>,
    pub course_id: Option<i64>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct MaterialListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub batch_id: Option<i64>,
    pub course_id: Option<i64>,
    // 学员视角：广播 + 已报名班级
    pub visible_batch_ids: Option<Vec<i64>>,
    pub search: Option<String>,
}
