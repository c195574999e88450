//! 文件元数据存储操作

use super::SeaOrmStorage;
use crate::entity::files::{ActiveModel, Entity as Files};
use crate::errors::{CCMSError, Result};
use crate::models::files::entities::StoredFile;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 记录上传文件
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_file_impl(
        &self,
        download_token: &str,
        original_name: &str,
        stored_name: &str,
        category: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<StoredFile> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            download_token: Set(download_token.to_string()),
            original_name: Set(original_name.to_string()),
            stored_name: Set(stored_name.to_string()),
            category: Set(category.to_string()),
            file_size: Set(file_size),
            file_type: Set(file_type.to_string()),
            user_id: Set(user_id),
            uploaded_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("记录上传文件失败: {e}")))?;

        Ok(result.into_stored_file())
    }

    /// 通过 token 获取文件
    pub async fn get_file_by_token_impl(&self, token: &str) -> Result<Option<StoredFile>> {
        let result = Files::find_by_id(token.to_string())
            .one(&self.db)
            .await
            .map_err(|e| CCMSError::database_operation(format!("查询文件失败: {e}")))?;

        Ok(result.map(|m| m.into_stored_file()))
    }
}
