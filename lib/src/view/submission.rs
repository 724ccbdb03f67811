use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::service::common_structs::{EmotionScores, ImageForm};
use crate::service::emotion_service::EmotionApi;
use crate::service::errors::DetectError;
use super::elements::ResultContainer;
use super::render::{render_error, render_scores, LOADING_TEXT};


#[derive(Debug, Clone)]
pub struct SubmitEvent {
    form: ImageForm,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form: ImageForm) -> Self {
        Self {
            form,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn form(&self) -> &ImageForm {
        &self.form
    }
}


#[derive(Debug)]
pub enum SubmissionOutcome {
    Rendered(EmotionScores),
    Failed(DetectError),
    // a newer submission started before this one resolved
    Stale,
}


#[derive(Debug)]
pub struct SubmissionHandler<A> {
    api: Arc<A>,
    latest_token: Arc<AtomicU64>,
}

impl<A> Clone for SubmissionHandler<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            latest_token: self.latest_token.clone(),
        }
    }
}

impl<A: EmotionApi> SubmissionHandler<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            latest_token: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn handle(&self, event: &mut SubmitEvent, container: &impl ResultContainer) -> SubmissionOutcome {
        event.prevent_default();
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        container.claim(token, LOADING_TEXT);
        info!(token, "submitting form");

        let result = self.api.detect(event.form()).await;

        let html = match &result {
            Ok(scores) => render_scores(scores),
            Err(error) => render_error(&error.to_string()),
        };
        // check and write happen under the container's lock
        if !container.set_html_if(token, &html) {
            info!(token, "discarding stale detection result");
            return SubmissionOutcome::Stale;
        }

        match result {
            Ok(scores) => SubmissionOutcome::Rendered(scores),
            Err(error) => {
                warn!(token, "emotion detection failed: {}", error);
                SubmissionOutcome::Failed(error)
            },
        }
    }
}
