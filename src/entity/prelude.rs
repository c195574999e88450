pub use super::assignments::Entity as Assignments;
pub use super::attendance_records::Entity as AttendanceRecords;
pub use super::batch_students::Entity as BatchStudents;
pub use super::batches::Entity as Batches;
pub use super::courses::Entity as Courses;
pub use super::fee_payments::Entity as FeePayments;
pub use super::fee_records::Entity as FeeRecords;
pub use super::files::Entity as Files;
pub use super::materials::Entity as Materials;
pub use super::notices::Entity as Notices;
pub use super::recordings::Entity as Recordings;
pub use super::submissions::Entity as Submissions;
pub use super::users::Entity as Users;
