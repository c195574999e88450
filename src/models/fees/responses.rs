use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::fees::entities::{FeePayment, FeeRecord};

/// 费用单视图（含读取时计算的缴费状态）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub fee: FeeRecord,
    pub paid: f64,
    pub pending: f64,
    pub status: String, // "paid" | "pending"
}

impl FeeView {
    pub fn build(fee: FeeRecord, paid_total: f64) -> Self {
        let pending = fee.pending(paid_total);
        let status = if fee.is_paid(paid_total) {
            "paid".to_string()
        } else {
            "pending".to_string()
        };
        Self {
            fee,
            paid: paid_total,
            pending,
            status,
        }
    }
}

/// 费用详情响应（含缴费历史）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeDetailResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub view: FeeView,
    pub payments: Vec<FeePayment>,
}

/// 费用列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeListResponse {
    pub items: Vec<FeeView>,
    pub pagination: PaginationInfo,
}

/// 学员费用汇总
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeSummaryResponse {
    pub student_id: i64,
    pub total_billed: f64,
    pub total_discount: f64,
    pub total_paid: f64,
    pub total_pending: f64,
}
