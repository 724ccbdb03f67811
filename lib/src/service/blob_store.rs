use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::common_structs::ImageFile;

pub const BLOB_PATH_PREFIX: &str = "/blob/";


/// Files registered for display, addressed by `/blob/{id}`.
/// Entries live as long as the store; nothing revokes them.
#[derive(Debug, Clone, Default)]
pub struct BlobStore {
    blobs: Arc<RwLock<HashMap<Uuid, ImageFile>>>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_object_url(&self, file: &ImageFile) -> String {
        let id = Uuid::new_v4();
        self.blobs.write().await.insert(id, file.to_owned());
        debug!(%id, file_name = %file.file_name, "registered blob");
        format!("{}{}", BLOB_PATH_PREFIX, id)
    }

    pub async fn get(&self, id: &str) -> Option<ImageFile> {
        let id = Uuid::parse_str(id).ok()?;
        self.blobs.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn url_resolves_to_registered_file() {
        let store = BlobStore::new();
        let file = ImageFile::new("face.png", None, vec![7, 7, 7]);
        let url = store.create_object_url(&file).await;

        assert!(url.starts_with(BLOB_PATH_PREFIX));
        let id = url.trim_start_matches(BLOB_PATH_PREFIX);
        assert_eq!(store.get(id).await, Some(file));
    }

    #[tokio::test]
    async fn unknown_ids_resolve_to_nothing() {
        let store = BlobStore::new();
        assert_eq!(store.get("not-a-uuid").await, None);
        assert_eq!(store.get(&Uuid::new_v4().to_string()).await, None);
    }
}
