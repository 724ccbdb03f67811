use std::future::Future;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::env_keys::{EMOTION_API_CODE, EMOTION_API_ENDPOINT};
use super::common_structs::{DetectResponse, EmotionScores, FormField, ImageForm};
use super::errors::DetectError;

pub const DEFAULT_ENDPOINT: &str = "https://rishkserverless.azurewebsites.net/api/HttpTrigger1";
const CODE_QUERY_KEY: &str = "code";


/// Anything that can turn an upload form into the emotion record of the first face.
pub trait EmotionApi: Send + Sync {
    fn detect(&self, form: &ImageForm) -> impl Future<Output = Result<EmotionScores, DetectError>> + Send;
}

#[derive(Debug, Clone)]
pub struct EmotionService {
    client: Client,
    endpoint: String,
}

impl EmotionService {
    pub fn new() -> Self {
        let base = std::env::var(EMOTION_API_ENDPOINT).unwrap_or(DEFAULT_ENDPOINT.to_owned());
        let code = std::env::var(EMOTION_API_CODE).ok();
        if code.is_none() {
            warn!("{} not set, calling emotion API without access code", EMOTION_API_CODE);
        }
        let endpoint = build_endpoint(&base, code.as_deref());
        Self::with_endpoint(Client::new(), &endpoint)
    }

    pub fn with_endpoint(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_owned(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_multipart(&self, form: &ImageForm) -> Result<Form, DetectError> {
        let mut multipart = Form::new();
        for field in form.fields.iter() {
            multipart = match field {
                FormField::Text { name, value } => multipart.text(name.to_owned(), value.to_owned()),
                FormField::File { name, file } => {
                    let part = Part::bytes(file.bytes.clone())
                        .file_name(file.file_name.to_owned())
                        .mime_str(&file.content_type)?;
                    multipart.part(name.to_owned(), part)
                },
            };
        }
        Ok(multipart)
    }
}

impl Default for EmotionService {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionApi for EmotionService {
    async fn detect(&self, form: &ImageForm) -> Result<EmotionScores, DetectError> {
        let multipart = self.build_multipart(form)?;
        info!(fields = form.fields.len(), "posting form to emotion API");

        let response = self.client
            .post(&self.endpoint)
            .multipart(multipart)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "emotion API responded");

        if !status.is_success() {
            return Err(DetectError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        DetectResponse::from_slice(&body)?.first_emotion()
    }
}


// base?code=<key>, keeping any query the base already has
pub fn build_endpoint(base: &str, code: Option<&str>) -> String {
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        return base.to_owned();
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", base, separator, CODE_QUERY_KEY, urlencoding::encode(code))
}
