use std::sync::{Arc, RwLock};


/// Image element showing the selected file.
pub trait ImageElement: Send + Sync {
    fn set_src(&self, url: &str);
    fn src(&self) -> Option<String>;
}

/// Element receiving status text and detection results.
///
/// Writes tagged with a submission token are ordered: `claim` only moves
/// forward, and `set_html_if` only lands while its token is still the
/// latest claimed one.
pub trait ResultContainer: Send + Sync {
    fn set_html(&self, html: &str);
    fn html(&self) -> String;
    fn claim(&self, token: u64, html: &str) -> bool;
    fn set_html_if(&self, token: u64, html: &str) -> bool;
}


#[derive(Debug, Clone, Default)]
pub struct PreviewImage {
    src: Arc<RwLock<Option<String>>>,
}

impl PreviewImage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageElement for PreviewImage {
    fn set_src(&self, url: &str) {
        let mut src = self.src.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *src = Some(url.to_owned());
    }

    fn src(&self) -> Option<String> {
        self.src.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }
}


#[derive(Debug, Default)]
struct ContainerState {
    token: u64,
    html: String,
}

#[derive(Debug, Clone, Default)]
pub struct HtmlContainer {
    state: Arc<RwLock<ContainerState>>,
}

impl HtmlContainer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultContainer for HtmlContainer {
    fn set_html(&self, html: &str) {
        let mut state = self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        state.html = html.to_owned();
    }

    fn html(&self) -> String {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner()).html.clone()
    }

    fn claim(&self, token: u64, html: &str) -> bool {
        let mut state = self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if token <= state.token {
            return false;
        }
        state.token = token;
        state.html = html.to_owned();
        true
    }

    fn set_html_if(&self, token: u64, html: &str) -> bool {
        let mut state = self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if state.token != token {
            return false;
        }
        state.html = html.to_owned();
        true
    }
}
