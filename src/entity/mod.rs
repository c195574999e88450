//! SeaORM 实体定义
//!
//! 与 migration 中的表结构一一对应，并提供到业务模型的转换。

pub mod assignments;
pub mod attendance_records;
pub mod batch_students;
pub mod batches;
pub mod courses;
pub mod fee_payments;
pub mod fee_records;
pub mod files;
pub mod materials;
pub mod notices;
pub mod recordings;
pub mod submissions;
pub mod users;

pub mod prelude;
