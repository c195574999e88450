//! 资料存储操作

use super::SeaOrmStorage;
use crate::entity::materials::{ActiveModel, Column, Entity as Materials};
use crate::errors::{CCMSError, Result};
use crate::models::{
    PaginationInfo,
    materials::{
        entities::Material,
        requests::{CreateMaterialRequest, MaterialListQuery, UpdateMaterialRequest},
        responses::MaterialListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建资料
    pub async fn create_material_impl(
        &self,
        created_by: i64,
        req: CreateMaterialRequest,
    ) -> Result<Material> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            batch_id: Set(req.batch_id),
            course_id: Set(req.course_id),
            title: Set(req.title),
            description: Set(req.description),
            attachment: Set(req.attachment),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("创建资料失败: {e}")))?;

        Ok(result.into_material())
    }

    /// 通过 ID 获取资料
    pub async fn get_material_by_id_impl(&self, material_id: i64) -> Result<Option<Material>> {
        let result = Materials::find_by_id(material_id)
            .one(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询资料失败: {e}")))?;

        Ok(result.map(|m| m.into_material()))
    }

    /// 更新资料
    pub async fn update_material_impl(
        &self,
        material_id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>> {
        let existing = self.get_material_by_id_impl(material_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(material_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(attachment) = update.attachment {
            model.attachment = Set(attachment);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("更新资料失败: {e}")))?;

        self.get_material_by_id_impl(material_id).await
    }

    /// 删除资料
    pub async fn delete_material_impl(&self, material_id: i64) -> Result<bool> {
        let result = Materials::delete_by_id(material_id)
            .exec(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("删除资料失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出资料
    pub async fn list_materials_with_pagination_impl(
        &self,
        query: MaterialListQuery,
    ) -> Result<MaterialListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Materials::find();

        if let Some(batch_id) = query.batch_id {
            select = select.filter(Column::BatchId.eq(batch_id));
        }

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 学员视角：面向全体（batch_id 为空）+ 已报名班级
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
            .map_err(|e| CCMSError::database_operation(format!("查询资料总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询资料页数失败: {e}")))?;

        let materials: Vec<Material> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询资料列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_material())
            .collect();

        Ok(MaterialListResponse {
            items: materials,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
