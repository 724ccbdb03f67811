use tracing::info;

use crate::service::blob_store::BlobStore;
use crate::service::common_structs::ImageFile;
use crate::service::errors::PreviewError;
use super::elements::ImageElement;


#[derive(Debug, Clone, Default)]
pub struct FileSelectionEvent {
    pub files: Vec<ImageFile>,
}

impl FileSelectionEvent {
    pub fn new(files: Vec<ImageFile>) -> Self {
        Self { files }
    }
}


#[derive(Debug, Clone)]
pub struct PreviewHandler {
    blobs: BlobStore,
}

impl PreviewHandler {
    pub fn new(blobs: &BlobStore) -> Self {
        Self {
            blobs: blobs.to_owned()
        }
    }

    /// Points `image` at a display URL for the first selected file.
    /// URLs handed out earlier stay registered.
    pub async fn load_file(&self, event: &FileSelectionEvent, image: &impl ImageElement) -> Result<String, PreviewError> {
        let file = event.files.first().ok_or(PreviewError::NoFileSelected)?;
        let url = self.blobs.create_object_url(file).await;
        image.set_src(&url);
        info!(file_name = %file.file_name, %url, "preview updated");
        Ok(url)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::elements::PreviewImage;

    fn png(name: &str, bytes: Vec<u8>) -> ImageFile {
        ImageFile::new(name, Some("image/png"), bytes)
    }

    #[tokio::test]
    async fn sets_preview_source() {
        let blobs = BlobStore::new();
        let handler = PreviewHandler::new(&blobs);
        let image = PreviewImage::new();

        let url = handler.load_file(&FileSelectionEvent::new(vec![png("a.png", vec![1])]), &image).await.unwrap();

        assert!(!url.is_empty());
        assert_eq!(image.src(), Some(url));
    }

    #[tokio::test]
    async fn only_first_file_is_previewed() {
        let blobs = BlobStore::new();
        let handler = PreviewHandler::new(&blobs);
        let image = PreviewImage::new();
        let event = FileSelectionEvent::new(vec![png("a.png", vec![1]), png("b.png", vec![2])]);

        let url = handler.load_file(&event, &image).await.unwrap();

        let id = url.trim_start_matches(crate::service::blob_store::BLOB_PATH_PREFIX);
        assert_eq!(blobs.get(id).await.unwrap().file_name, "a.png");
        assert_eq!(blobs.len().await, 1);
    }

    #[tokio::test]
    async fn last_selection_wins() {
        let blobs = BlobStore::new();
        let handler = PreviewHandler::new(&blobs);
        let image = PreviewImage::new();

        let first = handler.load_file(&FileSelectionEvent::new(vec![png("a.png", vec![1])]), &image).await.unwrap();
        let second = handler.load_file(&FileSelectionEvent::new(vec![png("b.png", vec![2])]), &image).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(image.src(), Some(second));
        // the earlier url is never released
        assert_eq!(blobs.len().await, 2);
    }

    #[tokio::test]
    async fn empty_selection_leaves_image_alone() {
        let handler = PreviewHandler::new(&BlobStore::new());
        let image = PreviewImage::new();
        image.set_src("/blob/old");

        let result = handler.load_file(&FileSelectionEvent::default(), &image).await;

        assert!(matches!(result, Err(PreviewError::NoFileSelected)));
        assert_eq!(image.src().as_deref(), Some("/blob/old"));
    }
}
