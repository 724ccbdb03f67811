use super::elements::{HtmlContainer, PreviewImage};


/// Elements of the upload page shared by every request.
#[derive(Debug, Clone)]
pub struct PageState {
    pub preview: PreviewImage,
    pub result: HtmlContainer,
    pub image_field_name: String,
}

impl PageState {
    pub fn new(image_field_name: &str) -> Self {
        Self {
            preview: PreviewImage::new(),
            result: HtmlContainer::new(),
            image_field_name: image_field_name.to_owned(),
        }
    }
}
