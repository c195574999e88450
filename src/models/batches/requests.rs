use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct BatchQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub course_id: Option<i64>,
    pub search: Option<String>,
}

// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct CreateBatchRequest {
    pub course_id: i64,
    pub teacher_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
}

// 更新班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct UpdateBatchRequest {
    pub course_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub schedule: Option<String>,
}

// 报名请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct EnrollStudentRequest {
    pub student_id: i64,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct BatchListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub teacher_id: Option<i64>,
    // 只返回该学员已报名的班级
    pub student_id: Option<i64>,
    pub search: Option<String>,
}
