pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250601_000001_create_tables::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

    // 引用列刻意不建外键：跨资源删除不级联，重复提交不受唯一约束限制。
    // 这两条是对外行为，固定在这里防止 schema 改动悄悄收紧语义。

    async fn fresh_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn query_rows(db: &DatabaseConnection, sql: &str) -> usize {
        db.query_all(Statement::from_string(
            db.get_database_backend(),
            sql.to_string(),
        ))
        .await
        .unwrap()
        .len()
    }

    #[tokio::test]
    async fn test_submissions_have_no_foreign_keys() {
        let db = fresh_db().await;
        let fk_count = query_rows(&db, "PRAGMA foreign_key_list(submissions)").await;
        assert_eq!(fk_count, 0);
    }

    #[tokio::test]
    async fn test_duplicate_submissions_per_student_are_allowed() {
        let db = fresh_db().await;

        for _ in 0..2 {
            db.execute_unprepared(
                "INSERT INTO submissions (assignment_id, student_id, status, submitted_at) \
                 VALUES (1, 2, 'submitted', 0)",
            )
            .await
            .unwrap();
        }

        let rows = query_rows(
            &db,
            "SELECT id FROM submissions WHERE assignment_id = 1 AND student_id = 2",
        )
        .await;
        assert_eq!(rows, 2);
    }

    #[tokio::test]
    async fn test_deleting_assignment_leaves_submissions_queryable() {
        let db = fresh_db().await;

        db.execute_unprepared(
            "INSERT INTO assignments \
             (id, batch_id, course_id, created_by, title, total_marks, created_at, updated_at) \
             VALUES (7, 1, 1, 1, 'hw', 100.0, 0, 0)",
        )
        .await
        .unwrap();
        db.execute_unprepared(
            "INSERT INTO submissions (assignment_id, student_id, status, submitted_at) \
             VALUES (7, 2, 'submitted', 0)",
        )
        .await
        .unwrap();

        db.execute_unprepared("DELETE FROM assignments WHERE id = 7")
            .await
            .unwrap();

        // 提交成为孤儿行，但仍然可查
        let rows = query_rows(&db, "SELECT id FROM submissions WHERE assignment_id = 7").await;
        assert_eq!(rows, 1);
    }
}
