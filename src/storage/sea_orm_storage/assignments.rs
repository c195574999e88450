//! 作业存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::batches::{Column as BatchColumn, Entity as Batches};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::{CCMSError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{
            AssignmentCreator, AssignmentListItem, AssignmentListResponse, AssignmentSummary,
            MySubmissionSummary, StudentDashboard, TeacherDashboard,
        },
    },
    submissions::entities::SubmissionStatus,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        created_by: i64,
        course_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            batch_id: Set(req.batch_id),
            course_id: Set(course_id),
            created_by: Set(created_by),
            title: Set(req.title),
            description: Set(req.description),
            total_marks: Set(req.total_marks.unwrap_or(100.0)),
            due_date: Set(req.due_date.map(|dt| dt.timestamp())),
            attachment: Set(req.attachment),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出作业
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
        current_user_id: Option<i64>,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find();

        // 班级筛选
        if let Some(batch_id) = query.batch_id {
            select = select.filter(Column::BatchId.eq(batch_id));
        }

        // 课程筛选
        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 创建者筛选
        if let Some(created_by) = query.created_by {
            select = select.filter(Column::CreatedBy.eq(created_by));
        }

        // 限定可见班级（学员视角）
        if let Some(batch_ids) = query.batch_ids {
            select = select.filter(Column::BatchId.is_in(batch_ids));
        }

        // 搜索条件（按标题搜索）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询作业总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询作业页数失败: {e}")))?;

        let assignments: Vec<Assignment> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询作业列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_assignment())
            .collect();

        // 收集所有 created_by ID 并去重
        let creator_ids: Vec<i64> = assignments
            .iter()
            .map(|a| a.created_by)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        // 查询创建者信息
        let mut creator_map: HashMap<i64, AssignmentCreator> = HashMap::new();
        for creator_id in creator_ids {
            if let Ok(Some(user)) = self.get_user_by_id_impl(creator_id).await {
                creator_map.insert(
                    creator_id,
                    AssignmentCreator {
                        id: user.id,
                        username: user.username,
                        display_name: Some(user.profile.profile_name),
                    },
                );
            }
        }

        // 查询当前学员的提交状态（如果提供了 current_user_id）
        let mut my_submission_map: HashMap<i64, MySubmissionSummary> = HashMap::new();
        if let Some(user_id) = current_user_id {
            let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
            if !assignment_ids.is_empty() {
                // 查询该学员对这些作业的所有提交，取最近一次
                let submissions = Submissions::find()
                    .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
                    .filter(SubmissionColumn::StudentId.eq(user_id))
                    .order_by_desc(SubmissionColumn::SubmittedAt)
                    .all(&self.db)
                    .await
                    .map_err(|e| {
                        CCMSError::database_operation(format!("查询学员提交失败: {e}"))
                    })?;

                for sub in submissions {
                    let sub = sub.into_submission();
                    my_submission_map
                        .entry(sub.assignment_id)
                        .or_insert_with(|| MySubmissionSummary {
                            id: sub.id,
                            status: sub.status.to_string(),
                            grade: sub.grade,
                            submitted_at: sub.submitted_at,
                        });
                }
            }
        }

        let now = chrono::Utc::now();
        let items: Vec<AssignmentListItem> = assignments
            .into_iter()
            .map(|assignment| {
                let creator = creator_map.get(&assignment.created_by).cloned();
                let my_submission = my_submission_map.get(&assignment.id).cloned();
                let overdue = assignment.is_overdue(now);
                AssignmentListItem {
                    assignment,
                    creator,
                    overdue,
                    my_submission,
                }
            })
            .collect();

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let existing = self.get_assignment_by_id_impl(assignment_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(assignment_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(total_marks) = update.total_marks {
            model.total_marks = Set(total_marks);
        }

        if let Some(due_date) = update.due_date {
            model.due_date = Set(Some(due_date.timestamp()));
        }

        if let Some(attachment) = update.attachment {
            model.attachment = Set(Some(attachment));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("更新作业失败: {e}")))?;

        self.get_assignment_by_id_impl(assignment_id).await
    }

    /// 删除作业
    ///
    /// 只删除作业行本身。已有提交保留为孤儿行，仍可通过提交接口查询，
    /// 与原系统的引用字段语义一致。
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(assignment_id)
            .exec(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 单个作业的提交统计
    pub async fn get_assignment_summary_impl(
        &self,
        assignment_id: i64,
    ) -> Result<AssignmentSummary> {
        let assignment = self
            .get_assignment_by_id_impl(assignment_id)
            .await?
            .ok_or_else(|| CCMSError::not_found(format!("作业不存在: {assignment_id}")))?;

        let total_students = self.count_batch_students_impl(assignment.batch_id).await?;

        let submissions = Submissions::find()
            .filter(SubmissionColumn::AssignmentId.eq(assignment_id))
            .all(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询作业提交失败: {e}")))?;

        // 按学员去重统计；评分/迟交按学员的任一提交计
        let mut submitters: HashSet<i64> = HashSet::new();
        let mut graded_students: HashSet<i64> = HashSet::new();
        let mut late_students: HashSet<i64> = HashSet::new();
        let mut grades: Vec<f64> = Vec::new();

        for sub in &submissions {
            submitters.insert(sub.student_id);
            if sub.status == SubmissionStatus::LATE {
                late_students.insert(sub.student_id);
            }
            if let Some(grade) = sub.grade {
                if graded_students.insert(sub.student_id) {
                    grades.push(grade);
                }
            }
        }

        let average_grade = if grades.is_empty() {
            None
        } else {
            Some(grades.iter().sum::<f64>() / grades.len() as f64)
        };

        Ok(AssignmentSummary {
            assignment_id,
            total_students,
            submitted_count: submitters.len() as i64,
            graded_count: graded_students.len() as i64,
            late_count: late_students.len() as i64,
            average_grade,
        })
    }

    /// 教师仪表盘
    pub async fn get_teacher_dashboard_impl(&self, teacher_id: i64) -> Result<TeacherDashboard> {
        let total_batches = Batches::find()
            .filter(BatchColumn::TeacherId.eq(teacher_id))
            .count(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("统计班级数失败: {e}")))?
            as i64;

        let total_assignments = Assignments::find()
            .filter(Column::CreatedBy.eq(teacher_id))
            .count(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("统计作业数失败: {e}")))?
            as i64;

        // 该教师全部作业的提交，分已评分/未评分
        let assignment_ids: Vec<i64> = Assignments::find()
            .filter(Column::CreatedBy.eq(teacher_id))
            .select_only()
            .column(Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询作业 ID 失败: {e}")))?;

        let (mut pending_grading, mut graded_submissions) = (0i64, 0i64);
        if !assignment_ids.is_empty() {
            let submissions = Submissions::find()
                .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
                .all(&self.db)
                .await
                .map_err(|e| CCMSError::database_operation(format!("查询提交失败: {e}")))?;

            for sub in submissions {
                if sub.grade.is_some() {
                    graded_submissions += 1;
                } else {
                    pending_grading += 1;
                }
            }
        }

        let recent_assignments: Vec<_> = Assignments::find()
            .filter(Column::CreatedBy.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .limit(5)
            .all(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询最近作业失败: {e}")))?
            .into_iter()
            .map(|m| m.into_assignment())
            .collect();

        Ok(TeacherDashboard {
            total_assignments,
            total_batches,
            pending_grading,
            graded_submissions,
            recent_assignments,
        })
    }

    /// 学员仪表盘
    pub async fn get_student_dashboard_impl(&self, student_id: i64) -> Result<StudentDashboard> {
        let batch_ids = self.list_student_batch_ids_impl(student_id).await?;

        if batch_ids.is_empty() {
            return Ok(StudentDashboard {
                total_assignments: 0,
                submitted: 0,
                graded: 0,
                pending: 0,
                overdue: 0,
                recent_assignments: vec![],
            });
        }

        let assignments: Vec<Assignment> = Assignments::find()
            .filter(Column::BatchId.is_in(batch_ids.clone()))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询作业失败: {e}")))?
            .into_iter()
            .map(|m| m.into_assignment())
            .collect();

        let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();

        // 该学员的提交按作业聚合
        let mut submitted_ids: HashSet<i64> = HashSet::new();
        let mut graded_ids: HashSet<i64> = HashSet::new();
        if !assignment_ids.is_empty() {
            let submissions = Submissions::find()
                .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
                .filter(SubmissionColumn::StudentId.eq(student_id))
                .all(&self.db)
                .await
                .map_err(|e| CCMSError::database_operation(format!("查询提交失败: {e}")))?;

            for sub in submissions {
                submitted_ids.insert(sub.assignment_id);
                if sub.grade.is_some() {
                    graded_ids.insert(sub.assignment_id);
                }
            }
        }

        let now = chrono::Utc::now();
        let total_assignments = assignments.len() as i64;
        let submitted = submitted_ids.len() as i64;
        let graded = graded_ids.len() as i64;
        let pending = total_assignments - submitted;
        let overdue = assignments
            .iter()
            .filter(|a| a.is_overdue(now) && !submitted_ids.contains(&a.id))
            .count() as i64;

        let recent_assignments: Vec<Assignment> = assignments.into_iter().take(5).collect();

        Ok(StudentDashboard {
            total_assignments,
            submitted,
            graded,
            pending,
            overdue,
            recent_assignments,
        })
    }
}
