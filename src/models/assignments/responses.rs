use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::assignments::entities::Assignment;

/// 作业创建者信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentCreator {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
}

/// 当前学员的提交摘要（作业列表用）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct MySubmissionSummary {
    pub id: i64,
    pub status: String,
    pub grade: Option<f64>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// 作业列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub creator: Option<AssignmentCreator>,
    // 截止时间已过（派生字段）
    pub overdue: bool,
    // 当前学员最近一次提交（学员视角）
    pub my_submission: Option<MySubmissionSummary>,
}

/// 作业列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<AssignmentListItem>,
    pub pagination: PaginationInfo,
}

/// 单个作业的提交统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentSummary {
    pub assignment_id: i64,
    pub total_students: i64,
    // 按学员去重的提交人数
    pub submitted_count: i64,
    pub graded_count: i64,
    pub late_count: i64,
    pub average_grade: Option<f64>,
}

/// 教师仪表盘
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct TeacherDashboard {
    pub total_assignments: i64,
    pub total_batches: i64,
    pub pending_grading: i64,
    pub graded_submissions: i64,
    pub recent_assignments: Vec<Assignment>,
}

/// 学员仪表盘
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct StudentDashboard {
    pub total_assignments: i64,
    pub submitted: i64,
    pub graded: i64,
    pub pending: i64,
    pub overdue: i64,
    pub recent_assignments: Vec<Assignment>,
}
