pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod batches;
pub mod courses;
pub mod fees;
pub mod files;
pub mod frontend;
pub mod materials;
pub mod notices;
pub mod recordings;
pub mod submissions;
pub mod users;

pub use assignments::configure_assignments_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use batches::configure_batches_routes;
pub use courses::configure_courses_routes;
pub use fees::configure_fees_routes;
pub use files::configure_file_routes;
pub use frontend::configure_frontend_routes;
pub use materials::configure_materials_routes;
pub use notices::configure_notices_routes;
pub use recordings::configure_recordings_routes;
pub use submissions::configure_submissions_routes;
pub use users::configure_user_routes;
