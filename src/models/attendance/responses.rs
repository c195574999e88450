use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::attendance::entities::AttendanceRecord;

/// 考勤列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub items: Vec<AttendanceRecord>,
    pub pagination: PaginationInfo,
}

/// 批量点名响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct MarkAttendanceResponse {
    pub marked: i64,
    pub updated: i64,
    pub records: Vec<AttendanceRecord>,
}

/// 单个学员的考勤统计
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct StudentAttendanceSummary {
    pub student_id: i64,
    pub present: i64,
    pub absent: i64,
    pub leave: i64,
    pub total: i64,
    // present / total * 100，total 为 0 时为 None
    pub percentage: Option<f64>,
}

impl StudentAttendanceSummary {
    pub fn new(student_id: i64, present: i64, absent: i64, leave: i64) -> Self {
        let total = present + absent + leave;
        let percentage = if total > 0 {
            Some(present as f64 / total as f64 * 100.0)
        } else {
            None
        };
        Self {
            student_id,
            present,
            absent,
            leave,
            total,
            percentage,
        }
    }
}

/// 考勤汇总响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSummaryResponse {
    pub items: Vec<StudentAttendanceSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_percentage() {
        let s = StudentAttendanceSummary::new(7, 8, 1, 1);
        assert_eq!(s.total, 10);
        assert_eq!(s.percentage, Some(80.0));
    }

    #[test]
    fn test_summary_empty_range_has_no_percentage() {
        let s = StudentAttendanceSummary::new(7, 0, 0, 0);
        assert_eq!(s.total, 0);
        assert!(s.percentage.is_none());
    }
}
