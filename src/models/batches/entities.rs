use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级（共享同一课表和授课教师的学员群体）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct Batch {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub name: String,
    pub description: Option<String>,
    // 课表展示字符串，如 "Mon/Wed/Fri 18:00-19:30"
    pub schedule: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 班级学员（报名关系）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct BatchStudent {
    pub id: i64,
    pub batch_id: i64,
    pub student_id: i64,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}
