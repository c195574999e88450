//! 费用存储操作
//!
//! 待缴金额从不落库：每次读取用 amount - discount - Σ payments 重新计算。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::fee_payments::{
    ActiveModel as FeePaymentActiveModel, Column as FeePaymentColumn, Entity as FeePayments,
};
use crate::entity::fee_records::{ActiveModel, Column, Entity as FeeRecords};
use crate::errors::{CCMSError, Result};
use crate::models::{
    PaginationInfo,
    fees::{
        entities::{FeePayment, FeeRecord},
        requests::{CreateFeeRequest, FeeListQuery, RecordPaymentRequest, UpdateFeeRequest},
        responses::{FeeListResponse, FeeSummaryResponse, FeeView},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建费用单
    pub async fn create_fee_impl(&self, req: CreateFeeRequest) -> Result<FeeRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            batch_id: Set(req.batch_id),
            amount: Set(req.amount),
            discount: Set(req.discount.unwrap_or(0.0)),
            due_date: Set(req.due_date.map(|dt| dt.timestamp())),
            note: Set(req.note),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("创建费用单失败: {e}")))?;

        Ok(result.into_fee_record())
    }

    /// 通过 ID 获取费用单
    pub async fn get_fee_by_id_impl(&self, fee_id: i64) -> Result<Option<FeeRecord>> {
        let result = FeeRecords::find_by_id(fee_id)
            .one(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询费用单失败: {e}")))?;

        Ok(result.map(|m| m.into_fee_record()))
    }

    /// 更新费用单
    pub async fn update_fee_impl(
        &self,
        fee_id: i64,
        update: UpdateFeeRequest,
    ) -> Result<Option<FeeRecord>> {
        let existing = self.get_fee_by_id_impl(fee_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(fee_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(amount) = update.amount {
            model.amount = Set(amount);
        }

        if let Some(discount) = update.discount {
            model.discount = Set(discount);
        }

        if let Some(due_date) = update.due_date {
            model.due_date = Set(Some(due_date.timestamp()));
        }

        if let Some(note) = update.note {
            model.note = Set(Some(note));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("更新费用单失败: {e}")))?;

        self.get_fee_by_id_impl(fee_id).await
    }

    /// 删除费用单（连同缴费记录）
    pub async fn delete_fee_impl(&self, fee_id: i64) -> Result<bool> {
        FeePayments::delete_many()
            .filter(FeePaymentColumn::FeeId.eq(fee_id))
            .exec(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("删除缴费记录失败: {e}")))?;

        let result = FeeRecords::delete_by_id(fee_id)
            .exec(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("删除费用单失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出费用单（附带读取时计算的缴费状态）
    pub async fn list_fees_with_pagination_impl(
        &self,
        query: FeeListQuery,
    ) -> Result<FeeListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = FeeRecords::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(batch_id) = query.batch_id {
            select = select.filter(Column::BatchId.eq(batch_id));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询费用总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询费用页数失败: {e}")))?;

        let fees: Vec<FeeRecord> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询费用列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_fee_record())
            .collect();

        // 批量查询本页费用单的缴费总额
        let fee_ids: Vec<i64> = fees.iter().map(|f| f.id).collect();
        let mut paid_map: HashMap<i64, f64> = HashMap::new();
        if !fee_ids.is_empty() {
            let payments = FeePayments::find()
                .filter(FeePaymentColumn::FeeId.is_in(fee_ids))
                .all(&self.db)
                .await
                .map_err(|e| CCMSError::database_operation(format!("查询缴费记录失败: {e}")))?;

            for payment in payments {
                *paid_map.entry(payment.fee_id).or_default() += payment.amount;
            }
        }

        let items: Vec<FeeView> = fees
            .into_iter()
            .map(|fee| {
                let paid = paid_map.get(&fee.id).copied().unwrap_or(0.0);
                FeeView::build(fee, paid)
            })
            .collect();

        Ok(FeeListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 追加缴费记录
    pub async fn record_payment_impl(
        &self,
        fee_id: i64,
        payment: RecordPaymentRequest,
    ) -> Result<FeePayment> {
        let now = chrono::Utc::now().timestamp();

        let model = FeePaymentActiveModel {
            fee_id: Set(fee_id),
            amount: Set(payment.amount),
            method: Set(payment.method),
            reference: Set(payment.reference),
            paid_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("记录缴费失败: {e}")))?;

        Ok(result.into_fee_payment())
    }

    /// 列出费用单的缴费记录
    pub async fn list_fee_payments_impl(&self, fee_id: i64) -> Result<Vec<FeePayment>> {
        let payments = FeePayments::find()
            .filter(FeePaymentColumn::FeeId.eq(fee_id))
            .order_by_asc(FeePaymentColumn::PaidAt)
            .all(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询缴费记录失败: {e}")))?;

        Ok(payments.into_iter().map(|m| m.into_fee_payment()).collect())
    }

    /// 费用单缴费总额
    pub async fn sum_fee_payments_impl(&self, fee_id: i64) -> Result<f64> {
        let payments = self.list_fee_payments_impl(fee_id).await?;
        Ok(payments.iter().map(|p| p.amount).sum())
    }

    /// 学员费用汇总
    pub async fn get_fee_summary_impl(&self, student_id: i64) -> Result<FeeSummaryResponse> {
        let fees: Vec<FeeRecord> = FeeRecords::find()
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询费用单失败: {e}")))?
            .into_iter()
            .map(|m| m.into_fee_record())
            .collect();

        let fee_ids: Vec<i64> = fees.iter().map(|f| f.id).collect();
        let mut paid_map: HashMap<i64, f64> = HashMap::new();
        if !fee_ids.is_empty() {
            let payments = FeePayments::find()
                .filter(FeePaymentColumn::FeeId.is_in(fee_ids))
                .all(&self.db)
                .await
                .map_err(|e| CCMSError::database_operation(format!("查询缴费记录失败: {e}")))?;

            for payment in payments {
                *paid_map.entry(payment.fee_id).or_default() += payment.amount;
            }
        }

        let mut total_billed = 0.0;
        let mut total_discount = 0.0;
        let mut total_paid = 0.0;
        let mut total_pending = 0.0;
        for fee in &fees {
            let paid = paid_map.get(&fee.id).copied().unwrap_or(0.0);
            total_billed += fee.amount;
            total_discount += fee.discount;
            total_paid += paid;
            total_pending += fee.pending(paid);
        }

        Ok(FeeSummaryResponse {
            student_id,
            total_billed,
            total_discount,
            total_paid,
            total_pending,
        })
    }
}
