pub mod blob_store;
pub mod common_structs;
pub mod emotion_service;
pub mod errors;


#[derive(Debug, Clone)]
pub struct CommonService {
    pub emotion: emotion_service::EmotionService,
    pub blobs: blob_store::BlobStore,
}

impl CommonService {
    pub fn new() -> Self {
        Self {
            emotion: emotion_service::EmotionService::new(),
            blobs: blob_store::BlobStore::new(),
        }
    }
}

impl Default for CommonService {
    fn default() -> Self {
        Self::new()
    }
}
