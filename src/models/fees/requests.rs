use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

// 创建费用单请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct CreateFeeRequest {
    pub student_id: i64,
    pub batch_id: Option<i64>,
    pub amount: f64,
    pub discount: Option<f64>,
    pub due_date: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

// 更新费用单请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct UpdateFeeRequest {
    pub amount: Option<f64>,
    pub discount: Option<f64>,
    pub due_date: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

// 追加缴费请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct RecordPaymentRequest {
    pub amount: f64,
    pub method: Option<String>,
    pub reference: Option<String>,
}

// 费用查询参数（HTTP 请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub batch_id: Option<i64>,
}

// 费用汇总查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeSummaryParams {
    pub student_id: i64,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct FeeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub batch_id: Option<i64>,
}
