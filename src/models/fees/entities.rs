use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 费用单
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeeRecord {
    pub id: i64,
    pub student_id: i64,
    pub batch_id: Option<i64>,
    pub amount: f64,
    pub discount: f64,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub note: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl FeeRecord {
    // 待缴金额 = amount - discount - 已缴总额，每次读取重新计算，不落库。
    // 多缴时夹到 0。
    pub fn pending(&self, paid_total: f64) -> f64 {
        (self.amount - self.discount - paid_total).max(0.0)
    }

    pub fn is_paid(&self, paid_total: f64) -> bool {
        self.amount - self.discount - paid_total <= 0.0
    }
}

// 缴费记录（只追加，不修改）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct FeePayment {
    pub id: i64,
    pub fee_id: i64,
    pub amount: f64,
    pub method: Option<String>,
    pub reference: Option<String>,
    pub paid_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fee(amount: f64, discount: f64) -> FeeRecord {
        FeeRecord {
            id: 1,
            student_id: 1,
            batch_id: None,
            amount,
            discount,
            due_date: None,
            note: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_pending_is_amount_minus_discount_minus_paid() {
        let f = fee(5000.0, 500.0);
        assert_eq!(f.pending(0.0), 4500.0);
        assert_eq!(f.pending(1500.0), 3000.0);
        assert!(!f.is_paid(1500.0));
    }

    #[test]
    fn test_pending_clamps_on_overpayment() {
        let f = fee(1000.0, 0.0);
        assert_eq!(f.pending(1200.0), 0.0);
        assert!(f.is_paid(1200.0));
    }

    #[test]
    fn test_exact_payment_is_paid() {
        let f = fee(1000.0, 100.0);
        assert!(f.is_paid(900.0));
        assert_eq!(f.pending(900.0), 0.0);
    }
}
