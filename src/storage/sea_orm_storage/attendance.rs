//! 考勤存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{CCMSError, Result};
use crate::models::{
    PaginationInfo,
    attendance::{
        entities::{AttendanceRecord, AttendanceStatus},
        requests::AttendanceListQuery,
        responses::{AttendanceListResponse, StudentAttendanceSummary},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

const DATE_FMT: &str = "%Y-%m-%d";

impl SeaOrmStorage {
    /// 按 (batch, student, date) 插入或覆盖考勤
    ///
    /// 返回 (记录, 是否新建)。重复点名同一上课日会覆盖状态而不是再插一行。
    pub async fn upsert_attendance_impl(
        &self,
        batch_id: i64,
        student_id: i64,
        date: chrono::NaiveDate,
        status: AttendanceStatus,
        marked_by: i64,
    ) -> Result<(AttendanceRecord, bool)> {
        let now = chrono::Utc::now().timestamp();
        let date_str = date.format(DATE_FMT).to_string();

        let existing = AttendanceRecords::find()
            .filter(Column::BatchId.eq(batch_id))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Date.eq(date_str.clone()))
            .one(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询考勤失败: {e}")))?;

        if let Some(record) = existing {
            let record_id = record.id;
            let model = ActiveModel {
                id: Set(record_id),
                status: Set(status.to_string()),
                marked_by: Set(marked_by),
                updated_at: Set(now),
                ..Default::default()
            };

            let updated = model
                .update(&self.db)
                .await
                .map_err(|e| CCMSError::database_operation(format!("更新考勤失败: {e}")))?;

            return Ok((updated.into_attendance_record(), false));
        }

        let model = ActiveModel {
            batch_id: Set(batch_id),
            student_id: Set(student_id),
            date: Set(date_str),
            status: Set(status.to_string()),
            marked_by: Set(marked_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("创建考勤失败: {e}")))?;

        Ok((result.into_attendance_record(), true))
    }

    /// 通过 ID 获取考勤记录
    pub async fn get_attendance_by_id_impl(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        let result = AttendanceRecords::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(result.map(|m| m.into_attendance_record()))
    }

    /// 更新单条考勤状态
    pub async fn update_attendance_impl(
        &self,
        id: i64,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>> {
        let existing = self.get_attendance_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("更新考勤失败: {e}")))?;

        self.get_attendance_by_id_impl(id).await
    }

    /// 分页列出考勤记录
    pub async fn list_attendance_with_pagination_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = AttendanceRecords::find();

        if let Some(batch_id) = query.batch_id {
            select = select.filter(Column::BatchId.eq(batch_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 日期按 YYYY-MM-DD 字符串比较，字典序即时间序
        if let Some(from) = query.from {
            select = select.filter(Column::Date.gte(from.format(DATE_FMT).to_string()));
        }

        if let Some(to) = query.to {
            select = select.filter(Column::Date.lte(to.format(DATE_FMT).to_string()));
        }

        select = select
            .order_by_desc(Column::Date)
            .order_by_asc(Column::StudentId);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询考勤总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询考勤页数失败: {e}")))?;

        let records: Vec<AttendanceRecord> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询考勤列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_attendance_record())
            .collect();

        Ok(AttendanceListResponse {
            items: records,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 按学员聚合考勤统计
    pub async fn summarize_attendance_impl(
        &self,
        batch_id: Option<i64>,
        student_id: Option<i64>,
        from: Option<chrono::NaiveDate>,
        to: Option<chrono::NaiveDate>,
    ) -> Result<Vec<StudentAttendanceSummary>> {
        let mut select = AttendanceRecords::find();

        if let Some(batch_id) = batch_id {
            select = select.filter(Column::BatchId.eq(batch_id));
        }

        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(from) = from {
            select = select.filter(Column::Date.gte(from.format(DATE_FMT).to_string()));
        }

        if let Some(to) = to {
            select = select.filter(Column::Date.lte(to.format(DATE_FMT).to_string()));
        }

        let records = select
            .all(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询考勤失败: {e}")))?;

        // (present, absent, leave) per student
        let mut counts: HashMap<i64, (i64, i64, i64)> = HashMap::new();
        for record in records {
            let entry = counts.entry(record.student_id).or_default();
            match record.status.as_str() {
                AttendanceStatus::PRESENT => entry.0 += 1,
                AttendanceStatus::ABSENT => entry.1 += 1,
                AttendanceStatus::LEAVE => entry.2 += 1,
                _ => {}
            }
        }

        let mut items: Vec<StudentAttendanceSummary> = counts
            .into_iter()
            .map(|(student_id, (present, absent, leave))| {
                StudentAttendanceSummary::new(student_id, present, absent, leave)
            })
            .collect();
        items.sort_by_key(|s| s.student_id);

        Ok(items)
    }
}
