use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 关联的班级 ID
    pub batch_id: i64,
    // 关联的课程 ID
    pub course_id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: Option<String>,
    // 满分
    pub total_marks: f64,
    // 截止时间
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    // 附件 download_token
    pub attachment: Option<String>,
    // 创建者（教师）ID
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Assignment {
    // 是否已过截止时间（仅用于展示，不阻止提交）
    pub fn is_overdue(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.due_date.is_some_and(|d| d < now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn assignment_due(due: Option<chrono::DateTime<Utc>>) -> Assignment {
        Assignment {
            id: 1,
            batch_id: 1,
            course_id: 1,
            title: "t".into(),
            description: None,
            total_marks: 100.0,
            due_date: due,
            attachment: None,
            created_by: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_overdue_is_derived_from_due_date() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap();

        assert!(assignment_due(Some(past)).is_overdue(now));
        assert!(!assignment_due(Some(future)).is_overdue(now));
        assert!(!assignment_due(None).is_overdue(now));
    }
}
