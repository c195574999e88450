//! 录播存储操作

use super::SeaOrmStorage;
use crate::entity::recordings::{ActiveModel, Column, Entity as Recordings};
use crate::errors::{CCMSError, Result};
use crate::models::{
    PaginationInfo,
    recordings::{
        entities::Recording,
        requests::{CreateRecordingRequest, RecordingListQuery, UpdateRecordingRequest},
        responses::RecordingListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建录播
    pub async fn create_recording_impl(
        &self,
        created_by: i64,
        req: CreateRecordingRequest,
    ) -> Result<Recording> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            batch_id: Set(req.batch_id),
            course_id: Set(req.course_id),
            title: Set(req.title),
            description: Set(req.description),
            video_url: Set(req.video_url),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("创建录播失败: {e}")))?;

        Ok(result.into_recording())
    }

    /// 通过 ID 获取录播
    pub async fn get_recording_by_id_impl(&self, recording_id: i64) -> Result<Option<Recording>> {
        let result = Recordings::find_by_id(recording_id)
            .one(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询录播失败: {e}")))?;

        Ok(result.map(|m| m.into_recording()))
    }

    /// 更新录播
    pub async fn update_recording_impl(
        &self,
        recording_id: i64,
        update: UpdateRecordingRequest,
    ) -> Result<Option<Recording>> {
        let existing = self.get_recording_by_id_impl(recording_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(recording_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(video_url) = update.video_url {
            model.video_url = Set(video_url);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("更新录播失败: {e}")))?;

        self.get_recording_by_id_impl(recording_id).await
    }

    /// 删除录播
    pub async fn delete_recording_impl(&self, recording_id: i64) -> Result<bool> {
        let result = Recordings::delete_by_id(recording_id)
            .exec(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("删除录播失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出录播
    pub async fn list_recordings_with_pagination_impl(
        &self,
        query: RecordingListQuery,
    ) -> Result<RecordingListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Recordings::find();

        if let Some(batch_id) = query.batch_id {
            select = select.filter(Column::BatchId.eq(batch_id));
        }

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 学员视角：已报名班级
        if let Some(batch_ids) = query.visible_batch_ids {
            select = select.filter(Column::BatchId.is_in(batch_ids));
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
            .map_err(|e| CCMSError::database_operation(format!("查询录播总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询录播页数失败: {e}")))?;

        let recordings: Vec<Recording> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询录播列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_recording())
            .collect();

        Ok(RecordingListResponse {
            items: recordings,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
