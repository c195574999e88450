pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod batches;
pub mod courses;
pub mod fees;
pub mod files;
pub mod materials;
pub mod notices;
pub mod recordings;
pub mod submissions;
pub mod users;

pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use batches::BatchService;
pub use courses::CourseService;
pub use fees::FeeService;
pub use files::FileService;
pub use materials::MaterialService;
pub use notices::NoticeService;
pub use recordings::RecordingService;
pub use submissions::SubmissionService;
pub use users::UserService;
