//! 班级与班级学员存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::batch_students::{
    ActiveModel as BatchStudentActiveModel, Column as BatchStudentColumn, Entity as BatchStudents,
};
use crate::entity::batches::{ActiveModel, Column, Entity as Batches};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{CCMSError, Result};
use crate::models::{
    PaginationInfo,
    batches::{
        entities::{Batch, BatchStudent},
        requests::{BatchListQuery, CreateBatchRequest, UpdateBatchRequest},
        responses::{BatchListResponse, BatchStudentItem, BatchStudentListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_batch_impl(&self, req: CreateBatchRequest) -> Result<Batch> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(req.course_id),
            teacher_id: Set(req.teacher_id),
            name: Set(req.name),
            description: Set(req.description),
            schedule: Set(req.schedule),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_batch())
    }

    /// 通过 ID 获取班级
    pub async fn get_batch_by_id_impl(&self, batch_id: i64) -> Result<Option<Batch>> {
        let result = Batches::find_by_id(batch_id)
            .one(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_batch()))
    }

    /// 分页列出班级
    pub async fn list_batches_with_pagination_impl(
        &self,
        query: BatchListQuery,
    ) -> Result<BatchListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Batches::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 学员视角：只返回已报名的班级
        if let Some(student_id) = query.student_id {
            let batch_ids = self.list_student_batch_ids_impl(student_id).await?;
            select = select.filter(Column::Id.is_in(batch_ids));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询班级页数失败: {e}")))?;

        let batches: Vec<Batch> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询班级列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_batch())
            .collect();

        Ok(BatchListResponse {
            items: batches,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班级
    pub async fn update_batch_impl(
        &self,
        batch_id: i64,
        update: UpdateBatchRequest,
    ) -> Result<Option<Batch>> {
        let existing = self.get_batch_by_id_impl(batch_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(batch_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(course_id) = update.course_id {
            model.course_id = Set(course_id);
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(schedule) = update.schedule {
            model.schedule = Set(Some(schedule));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_batch_by_id_impl(batch_id).await
    }

    /// 删除班级（同时清理报名关系）
    pub async fn delete_batch_impl(&self, batch_id: i64) -> Result<bool> {
        BatchStudents::delete_many()
            .filter(BatchStudentColumn::BatchId.eq(batch_id))
            .exec(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("删除班级报名关系失败: {e}")))?;

        let result = Batches::delete_by_id(batch_id)
            .exec(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学员报名
    pub async fn enroll_student_impl(
        &self,
        batch_id: i64,
        student_id: i64,
    ) -> Result<BatchStudent> {
        let now = chrono::Utc::now().timestamp();

        let model = BatchStudentActiveModel {
            batch_id: Set(batch_id),
            student_id: Set(student_id),
            joined_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("报名失败: {e}")))?;

        Ok(result.into_batch_student())
    }

    /// 学员退班
    pub async fn unenroll_student_impl(&self, batch_id: i64, student_id: i64) -> Result<bool> {
        let result = BatchStudents::delete_many()
            .filter(BatchStudentColumn::BatchId.eq(batch_id))
            .filter(BatchStudentColumn::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("退班失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 获取报名关系
    pub async fn get_enrollment_impl(
        &self,
        batch_id: i64,
        student_id: i64,
    ) -> Result<Option<BatchStudent>> {
        let result = BatchStudents::find()
            .filter(BatchStudentColumn::BatchId.eq(batch_id))
            .filter(BatchStudentColumn::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询报名关系失败: {e}")))?;

        Ok(result.map(|m| m.into_batch_student()))
    }

    /// 分页列出班级学员（附带用户信息）
    pub async fn list_batch_students_impl(
        &self,
        batch_id: i64,
        page: i64,
        size: i64,
    ) -> Result<BatchStudentListResponse> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, 100) as u64;

        let select = BatchStudents::find()
            .filter(BatchStudentColumn::BatchId.eq(batch_id))
            .order_by_asc(BatchStudentColumn::JoinedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询学员总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询学员页数失败: {e}")))?;

        let enrollments: Vec<BatchStudent> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询学员列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_batch_student())
            .collect();

        // 批量查询学员用户信息
        let student_ids: Vec<i64> = enrollments.iter().map(|e| e.student_id).collect();
        let mut user_map: HashMap<i64, (String, Option<String>, Option<String>)> = HashMap::new();
        if !student_ids.is_empty() {
            let users = Users::find()
                .filter(UserColumn::Id.is_in(student_ids))
                .all(&self.db)
                .await
                .map_err(|e| CCMSError::database_operation(format!("查询学员信息失败: {e}")))?;

            for user in users {
                user_map.insert(
                    user.id,
                    (user.username, user.profile_name, user.avatar_url),
                );
            }
        }

        let items: Vec<BatchStudentItem> = enrollments
            .into_iter()
            .map(|e| {
                let (username, display_name, avatar_url) = user_map
                    .get(&e.student_id)
                    .cloned()
                    .unwrap_or(("unknown".to_string(), None, None));
                BatchStudentItem {
                    id: e.id,
                    student_id: e.student_id,
                    username,
                    display_name,
                    avatar_url,
                    joined_at: e.joined_at,
                }
            })
            .collect();

        Ok(BatchStudentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 学员已报名的班级 ID 列表
    pub async fn list_student_batch_ids_impl(&self, student_id: i64) -> Result<Vec<i64>> {
        let results = BatchStudents::find()
            .filter(BatchStudentColumn::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询报名班级失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.batch_id).collect())
    }

    /// 教师负责的班级 ID 列表
    pub async fn list_teacher_batch_ids_impl(&self, teacher_id: i64) -> Result<Vec<i64>> {
        let results = Batches::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询教师班级失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.id).collect())
    }

    /// 班级学员数
    pub async fn count_batch_students_impl(&self, batch_id: i64) -> Result<i64> {
        let count = BatchStudents::find()
            .filter(BatchStudentColumn::BatchId.eq(batch_id))
            .count(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("统计班级学员数失败: {e}")))?;

        Ok(count as i64)
    }
}
