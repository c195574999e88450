use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentListResponse, AssignmentSummary, StudentDashboard, TeacherDashboard},
    },
    attendance::{
        entities::{AttendanceRecord, AttendanceStatus},
        requests::AttendanceListQuery,
        responses::{AttendanceListResponse, StudentAttendanceSummary},
    },
    batches::{
        entities::{Batch, BatchStudent},
        requests::{BatchListQuery, CreateBatchRequest, UpdateBatchRequest},
        responses::{BatchListResponse, BatchStudentListResponse},
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    fees::{
        entities::{FeePayment, FeeRecord},
        requests::{CreateFeeRequest, FeeListQuery, RecordPaymentRequest, UpdateFeeRequest},
        responses::{FeeListResponse, FeeSummaryResponse},
    },
    files::entities::StoredFile,
    materials::{
        entities::Material,
        requests::{CreateMaterialRequest, MaterialListQuery, UpdateMaterialRequest},
        responses::MaterialListResponse,
    },
    notices::{
        entities::Notice,
        requests::{CreateNoticeRequest, NoticeListQuery, UpdateNoticeRequest},
        responses::NoticeListResponse,
    },
    recordings::{
        entities::Recording,
        requests::{CreateRecordingRequest, RecordingListQuery, UpdateRecordingRequest},
        responses::RecordingListResponse,
    },
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::SubmissionListQuery,
        responses::SubmissionListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段应已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 用户总数（用于初始化管理员）
    async fn count_users(&self) -> Result<u64>;

    /// 课程管理方法
    async fn create_course(&self, created_by: i64, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 班级管理方法
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch>;
    async fn get_batch_by_id(&self, batch_id: i64) -> Result<Option<Batch>>;
    async fn list_batches_with_pagination(
        &self,
        query: BatchListQuery,
    ) -> Result<BatchListResponse>;
    async fn update_batch(
        &self,
        batch_id: i64,
        update: UpdateBatchRequest,
    ) -> Result<Option<Batch>>;
    async fn delete_batch(&self, batch_id: i64) -> Result<bool>;

    /// 班级学员管理方法
    // 报名（重复报名由调用方先查 get_enrollment 拒绝）
    async fn enroll_student(&self, batch_id: i64, student_id: i64) -> Result<BatchStudent>;
    // 退班
    async fn unenroll_student(&self, batch_id: i64, student_id: i64) -> Result<bool>;
    // 获取报名关系
    async fn get_enrollment(&self, batch_id: i64, student_id: i64)
    -> Result<Option<BatchStudent>>;
    // 列出班级学员
    async fn list_batch_students(
        &self,
        batch_id: i64,
        page: i64,
        size: i64,
    ) -> Result<BatchStudentListResponse>;
    // 学员已报名的班级 ID 列表
    async fn list_student_batch_ids(&self, student_id: i64) -> Result<Vec<i64>>;
    // 教师负责的班级 ID 列表
    async fn list_teacher_batch_ids(&self, teacher_id: i64) -> Result<Vec<i64>>;
    // 班级学员数
    async fn count_batch_students(&self, batch_id: i64) -> Result<i64>;

    /// 作业管理方法
    async fn create_assignment(
        &self,
        created_by: i64,
        course_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 列出作业（current_user_id 用于附带该学员的提交摘要）
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
        current_user_id: Option<i64>,
    ) -> Result<AssignmentListResponse>;
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业。只删作业行本身：已有提交保留（孤儿行可继续查询）
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;
    // 单个作业的提交统计
    async fn get_assignment_summary(&self, assignment_id: i64) -> Result<AssignmentSummary>;
    // 教师仪表盘
    async fn get_teacher_dashboard(&self, teacher_id: i64) -> Result<TeacherDashboard>;
    // 学员仪表盘
    async fn get_student_dashboard(&self, student_id: i64) -> Result<StudentDashboard>;

    /// 提交管理方法
    // 创建提交。不检查 (assignment, student) 是否已有提交：重复提交各自成行
    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        content: Option<String>,
        attachment: Option<String>,
        status: SubmissionStatus,
    ) -> Result<Submission>;
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 评分：只改该行的 grade/feedback/status/graded_by/graded_at
    async fn grade_submission(
        &self,
        submission_id: i64,
        grader_id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>>;

    /// 考勤管理方法
    // 按 (batch, student, date) 插入或覆盖
    async fn upsert_attendance(
        &self,
        batch_id: i64,
        student_id: i64,
        date: chrono::NaiveDate,
        status: AttendanceStatus,
        marked_by: i64,
    ) -> Result<(AttendanceRecord, bool)>;
    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<AttendanceRecord>>;
    async fn update_attendance(
        &self,
        id: i64,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>>;
    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse>;
    // 按学员聚合考勤统计
    async fn summarize_attendance(
        &self,
        batch_id: Option<i64>,
        student_id: Option<i64>,
        from: Option<chrono::NaiveDate>,
        to: Option<chrono::NaiveDate>,
    ) -> Result<Vec<StudentAttendanceSummary>>;

    /// 费用管理方法
    async fn create_fee(&self, fee: CreateFeeRequest) -> Result<FeeRecord>;
    async fn get_fee_by_id(&self, fee_id: i64) -> Result<Option<FeeRecord>>;
    async fn update_fee(&self, fee_id: i64, update: UpdateFeeRequest) -> Result<Option<FeeRecord>>;
    async fn delete_fee(&self, fee_id: i64) -> Result<bool>;
    async fn list_fees_with_pagination(&self, query: FeeListQuery) -> Result<FeeListResponse>;
    // 追加缴费记录
    async fn record_payment(
        &self,
        fee_id: i64,
        payment: RecordPaymentRequest,
    ) -> Result<FeePayment>;
    async fn list_fee_payments(&self, fee_id: i64) -> Result<Vec<FeePayment>>;
    async fn sum_fee_payments(&self, fee_id: i64) -> Result<f64>;
    // 学员费用汇总（billed/discount/paid/pending 读取时计算）
    async fn get_fee_summary(&self, student_id: i64) -> Result<FeeSummaryResponse>;

    /// 通知管理方法
    async fn create_notice(&self, created_by: i64, notice: CreateNoticeRequest) -> Result<Notice>;
    async fn get_notice_by_id(&self, notice_id: i64) -> Result<Option<Notice>>;
    async fn update_notice(
        &self,
        notice_id: i64,
        update: UpdateNoticeRequest,
    ) -> Result<Option<Notice>>;
    async fn delete_notice(&self, notice_id: i64) -> Result<bool>;
    async fn list_notices_with_pagination(
        &self,
        query: NoticeListQuery,
    ) -> Result<NoticeListResponse>;

    /// 录播管理方法
    async fn create_recording(
        &self,
        created_by: i64,
        recording: CreateRecordingRequest,
    ) -> Result<Recording>;
    async fn get_recording_by_id(&self, recording_id: i64) -> Result<Option<Recording>>;
    async fn update_recording(
        &self,
        recording_id: i64,
        update: UpdateRecordingRequest,
    ) -> Result<Option<Recording>>;
    async fn delete_recording(&self, recording_id: i64) -> Result<bool>;
    async fn list_recordings_with_pagination(
        &self,
        query: RecordingListQuery,
    ) -> Result<RecordingListResponse>;

    /// 资料管理方法
    async fn create_material(
        &self,
        created_by: i64,
        material: CreateMaterialRequest,
    ) -> Result<Material>;
    async fn get_material_by_id(&self, material_id: i64) -> Result<Option<Material>>;
    async fn update_material(
        &self,
        material_id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>>;
    async fn delete_material(&self, material_id: i64) -> Result<bool>;
    async fn list_materials_with_pagination(
        &self,
        query: MaterialListQuery,
    ) -> Result<MaterialListResponse>;

    /// 文件管理方法
    // 记录上传文件的元数据
    #[allow(clippy::too_many_arguments)]
    async fn insert_file(
        &self,
        download_token: &str,
        original_name: &str,
        stored_name: &str,
        category: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<StoredFile>;
    // 通过唯一 token 获取文件信息
    async fn get_file_by_token(&self, token: &str) -> Result<Option<StoredFile>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
