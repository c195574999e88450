//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod attendance;
mod batches;
mod courses;
mod fees;
mod files;
mod materials;
mod notices;
mod recordings;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{CCMSError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CCMSError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CCMSError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CCMSError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CCMSError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CCMSError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 课程模块
    async fn create_course(&self, created_by: i64, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(created_by, course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    // 班级模块
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch> {
        self.create_batch_impl(batch).await
    }

    async fn get_batch_by_id(&self, batch_id: i64) -> Result<Option<Batch>> {
        self.get_batch_by_id_impl(batch_id).await
    }

    async fn list_batches_with_pagination(
        &self,
        query: BatchListQuery,
    ) -> Result<BatchListResponse> {
        self.list_batches_with_pagination_impl(query).await
    }

    async fn update_batch(
        &self,
        batch_id: i64,
        update: UpdateBatchRequest,
    ) -> Result<Option<Batch>> {
        self.update_batch_impl(batch_id, update).await
    }

    async fn delete_batch(&self, batch_id: i64) -> Result<bool> {
        self.delete_batch_impl(batch_id).await
    }

    // 班级学员模块
    async fn enroll_student(&self, batch_id: i64, student_id: i64) -> Result<BatchStudent> {
        self.enroll_student_impl(batch_id, student_id).await
    }

    async fn unenroll_student(&self, batch_id: i64, student_id: i64) -> Result<bool> {
        self.unenroll_student_impl(batch_id, student_id).await
    }

    async fn get_enrollment(
        &self,
        batch_id: i64,
        student_id: i64,
    ) -> Result<Option<BatchStudent>> {
        self.get_enrollment_impl(batch_id, student_id).await
    }

    async fn list_batch_students(
        &self,
        batch_id: i64,
        page: i64,
        size: i64,
    ) -> Result<BatchStudentListResponse> {
        self.list_batch_students_impl(batch_id, page, size).await
    }

    async fn list_student_batch_ids(&self, student_id: i64) -> Result<Vec<i64>> {
        self.list_student_batch_ids_impl(student_id).await
    }

    async fn list_teacher_batch_ids(&self, teacher_id: i64) -> Result<Vec<i64>> {
        self.list_teacher_batch_ids_impl(teacher_id).await
    }

    async fn count_batch_students(&self, batch_id: i64) -> Result<i64> {
        self.count_batch_students_impl(batch_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        created_by: i64,
        course_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(created_by, course_id, req).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
        current_user_id: Option<i64>,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query, current_user_id)
            .await
    }

    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(assignment_id, update).await
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    async fn get_assignment_summary(&self, assignment_id: i64) -> Result<AssignmentSummary> {
        self.get_assignment_summary_impl(assignment_id).await
    }

    async fn get_teacher_dashboard(&self, teacher_id: i64) -> Result<TeacherDashboard> {
        self.get_teacher_dashboard_impl(teacher_id).await
    }

    async fn get_student_dashboard(&self, student_id: i64) -> Result<StudentDashboard> {
        self.get_student_dashboard_impl(student_id).await
    }

    // 提交模块
    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        content: Option<String>,
        attachment: Option<String>,
        status: SubmissionStatus,
    ) -> Result<Submission> {
        self.create_submission_impl(assignment_id, student_id, content, attachment, status)
            .await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    async fn grade_submission(
        &self,
        submission_id: i64,
        grader_id: i64,
        grade: f64,
        feedback: Option<String>,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(submission_id, grader_id, grade, feedback)
            .await
    }

    // 考勤模块
    async fn upsert_attendance(
        &self,
        batch_id: i64,
        student_id: i64,
        date: chrono::NaiveDate,
        status: AttendanceStatus,
        marked_by: i64,
    ) -> Result<(AttendanceRecord, bool)> {
        self.upsert_attendance_impl(batch_id, student_id, date, status, marked_by)
            .await
    }

    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        self.get_attendance_by_id_impl(id).await
    }

    async fn update_attendance(
        &self,
        id: i64,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>> {
        self.update_attendance_impl(id, status).await
    }

    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        self.list_attendance_with_pagination_impl(query).await
    }

    async fn summarize_attendance(
        &self,
        batch_id: Option<i64>,
        student_id: Option<i64>,
        from: Option<chrono::NaiveDate>,
        to: Option<chrono::NaiveDate>,
    ) -> Result<Vec<StudentAttendanceSummary>> {
        self.summarize_attendance_impl(batch_id, student_id, from, to)
            .await
    }

    // 费用模块
    async fn create_fee(&self, fee: CreateFeeRequest) -> Result<FeeRecord> {
        self.create_fee_impl(fee).await
    }

    async fn get_fee_by_id(&self, fee_id: i64) -> Result<Option<FeeRecord>> {
        self.get_fee_by_id_impl(fee_id).await
    }

    async fn update_fee(&self, fee_id: i64, update: UpdateFeeRequest) -> Result<Option<FeeRecord>> {
        self.update_fee_impl(fee_id, update).await
    }

    async fn delete_fee(&self, fee_id: i64) -> Result<bool> {
        self.delete_fee_impl(fee_id).await
    }

    async fn list_fees_with_pagination(&self, query: FeeListQuery) -> Result<FeeListResponse> {
        self.list_fees_with_pagination_impl(query).await
    }

    async fn record_payment(
        &self,
        fee_id: i64,
        payment: RecordPaymentRequest,
    ) -> Result<FeePayment> {
        self.record_payment_impl(fee_id, payment).await
    }

    async fn list_fee_payments(&self, fee_id: i64) -> Result<Vec<FeePayment>> {
        self.list_fee_payments_impl(fee_id).await
    }

    async fn sum_fee_payments(&self, fee_id: i64) -> Result<f64> {
        self.sum_fee_payments_impl(fee_id).await
    }

    async fn get_fee_summary(&self, student_id: i64) -> Result<FeeSummaryResponse> {
        self.get_fee_summary_impl(student_id).await
    }

    // 通知模块
    async fn create_notice(&self, created_by: i64, notice: CreateNoticeRequest) -> Result<Notice> {
        self.create_notice_impl(created_by, notice).await
    }

    async fn get_notice_by_id(&self, notice_id: i64) -> Result<Option<Notice>> {
        self.get_notice_by_id_impl(notice_id).await
    }

    async fn update_notice(
        &self,
        notice_id: i64,
        update: UpdateNoticeRequest,
    ) -> Result<Option<Notice>> {
        self.update_notice_impl(notice_id, update).await
    }

    async fn delete_notice(&self, notice_id: i64) -> Result<bool> {
        self.delete_notice_impl(notice_id).await
    }

    async fn list_notices_with_pagination(
        &self,
        query: NoticeListQuery,
    ) -> Result<NoticeListResponse> {
        self.list_notices_with_pagination_impl(query).await
    }

    // 录播模块
    async fn create_recording(
        &self,
        created_by: i64,
        recording: CreateRecordingRequest,
    ) -> Result<Recording> {
        self.create_recording_impl(created_by, recording).await
    }

    async fn get_recording_by_id(&self, recording_id: i64) -> Result<Option<Recording>> {
        self.get_recording_by_id_impl(recording_id).await
    }

    async fn update_recording(
        &self,
        recording_id: i64,
        update: UpdateRecordingRequest,
    ) -> Result<Option<Recording>> {
        self.update_recording_impl(recording_id, update).await
    }

    async fn delete_recording(&self, recording_id: i64) -> Result<bool> {
        self.delete_recording_impl(recording_id).await
    }

    async fn list_recordings_with_pagination(
        &self,
        query: RecordingListQuery,
    ) -> Result<RecordingListResponse> {
        self.list_recordings_with_pagination_impl(query).await
    }

    // 资料模块
    async fn create_material(
        &self,
        created_by: i64,
        material: CreateMaterialRequest,
    ) -> Result<Material> {
        self.create_material_impl(created_by, material).await
    }

    async fn get_material_by_id(&self, material_id: i64) -> Result<Option<Material>> {
        self.get_material_by_id_impl(material_id).await
    }

    async fn update_material(
        &self,
        material_id: i64,
        update: UpdateMaterialRequest,
    ) -> Result<Option<Material>> {
        self.update_material_impl(material_id, update).await
    }

    async fn delete_material(&self, material_id: i64) -> Result<bool> {
        self.delete_material_impl(material_id).await
    }

    async fn list_materials_with_pagination(
        &self,
        query: MaterialListQuery,
    ) -> Result<MaterialListResponse> {
        self.list_materials_with_pagination_impl(query).await
    }

    // 文件模块
    async fn insert_file(
        &self,
        download_token: &str,
        original_name: &str,
        stored_name: &str,
        category: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<StoredFile> {
        self.insert_file_impl(
            download_token,
            original_name,
            stored_name,
            category,
            file_size,
            file_type,
            user_id,
        )
        .await
    }

    async fn get_file_by_token(&self, token: &str) -> Result<Option<StoredFile>> {
        self.get_file_by_token_impl(token).await
    }
}
