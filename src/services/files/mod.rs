pub mod download;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct FileService {
    storage: Option<Arc<dyn Storage>>,
}

impl FileService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn upload(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload(self, request, payload).await
    }

    pub async fn download(&self, request: &HttpRequest, token: &str) -> ActixResult<HttpResponse> {
        download::handle_download(self, request, token).await
    }
}

/// 按扩展名归类到 MIME 大类目录
pub(crate) fn category_for_extension(extension: &str) -> &'static str {
    match extension {
        ".jpg" | ".jpeg" | ".png" | ".gif" | ".webp" => "images",
        ".mp4" | ".m4v" | ".webm" | ".mkv" => "videos",
        ".pdf" | ".doc" | ".docx" | ".xls" | ".xlsx" | ".ppt" | ".pptx" | ".txt" | ".md"
        | ".csv" | ".zip" => "documents",
        _ => "others",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        assert_eq!(category_for_extension(".png"), "images");
        assert_eq!(category_for_extension(".mp4"), "videos");
        assert_eq!(category_for_extension(".pdf"), "documents");
        assert_eq!(category_for_extension(".xyz"), "others");
    }
}
