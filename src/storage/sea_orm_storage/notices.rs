//! 通知存储操作

use super::SeaOrmStorage;
use crate::entity::notices::{ActiveModel, Column, Entity as Notices};
use crate::errors::{CCMSError, Result};
use crate::models::{
    PaginationInfo,
    notices::{
        entities::Notice,
        requests::{CreateNoticeRequest, NoticeListQuery, UpdateNoticeRequest},
        responses::NoticeListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 发布通知
    pub async fn create_notice_impl(
        &self,
        created_by: i64,
        req: CreateNoticeRequest,
    ) -> Result<Notice> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            body: Set(req.body),
            batch_id: Set(req.batch_id),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("发布通知失败: {e}")))?;

        Ok(result.into_notice())
    }

    /// 通过 ID 获取通知
    pub async fn get_notice_by_id_impl(&self, notice_id: i64) -> Result<Option<Notice>> {
        let result = Notices::find_by_id(notice_id)
            .one(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询通知失败: {e}")))?;

        Ok(result.map(|m| m.into_notice()))
    }

    /// 更新通知
    pub async fn update_notice_impl(
        &self,
        notice_id: i64,
        update: UpdateNoticeRequest,
    ) -> Result<Option<Notice>> {
        let existing = self.get_notice_by_id_impl(notice_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(notice_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(body) = update.body {
            model.body = Set(body);
        }

        if let Some(batch_id) = update.batch_id {
            model.batch_id = Set(Some(batch_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("更新通知失败: {e}")))?;

        self.get_notice_by_id_impl(notice_id).await
    }

    /// 删除通知
    pub async fn delete_notice_impl(&self, notice_id: i64) -> Result<bool> {
        let result = Notices::delete_by_id(notice_id)
            .exec(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("删除通知失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出通知
    pub async fn list_notices_with_pagination_impl(
        &self,
        query: NoticeListQuery,
    ) -> Result<NoticeListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Notices::find();

        if let Some(batch_id) = query.batch_id {
            select = select.filter(Column::BatchId.eq(batch_id));
        }

        // 学员视角：广播（batch_id 为空）+ 已报名班级
        if let Some(batch_ids) = query.visible_batch_ids {
            select = select.filter(
                Condition::any()
                    .add(Column::BatchId.is_null())
                    .add(Column::BatchId.is_in(batch_ids)),
            );
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询通知总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询通知页数失败: {e}")))?;

        let notices: Vec<Notice> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询通知列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_notice())
            .collect();

        Ok(NoticeListResponse {
            items: notices,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
