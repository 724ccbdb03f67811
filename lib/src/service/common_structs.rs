use serde::{Deserialize, Serialize};

use crate::utilities::resolve_content_type;
use super::errors::DetectError;


#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct EmotionScores {
    pub anger: f64,
    pub contempt: f64,
    pub disgust: f64,
    pub fear: f64,
    pub happiness: f64,
    pub neutral: f64,
    pub sadness: f64,
    pub surprise: f64,
}

impl EmotionScores {
    // display order of the result template
    pub fn labeled(&self) -> [(&'static str, f64); 8] {
        [
            ("anger", self.anger),
            ("contempt", self.contempt),
            ("disgust", self.disgust),
            ("fear", self.fear),
            ("happiness", self.happiness),
            ("neutral", self.neutral),
            ("sadness", self.sadness),
            ("surprise", self.surprise),
        ]
    }
}


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FaceAttributes {
    pub emotion: EmotionScores,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DetectedFace {
    #[serde(rename = "faceAttributes")]
    pub face_attributes: FaceAttributes,
}

/// Body returned by the detection endpoint, one entry per detected face.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DetectResponse {
    pub result: Vec<DetectedFace>,
}

impl DetectResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, DetectError> {
        serde_json::from_slice::<DetectResponse>(body).map_err(DetectError::MalformedResponse)
    }

    pub fn first_emotion(self) -> Result<EmotionScores, DetectError> {
        self.result
            .into_iter()
            .next()
            .map(|face| face.face_attributes.emotion)
            .ok_or(DetectError::NoFaceDetected)
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: &str, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_owned(),
            content_type: resolve_content_type(content_type, file_name),
            bytes,
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, file: ImageFile },
}

impl FormField {
    pub fn name(&self) -> &str {
        match self {
            FormField::Text { name, .. } => name,
            FormField::File { name, .. } => name,
        }
    }
}

/// Fields of the upload form in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageForm {
    pub fields: Vec<FormField>,
}

impl ImageForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.fields.push(FormField::Text { name: name.to_owned(), value: value.to_owned() });
        self
    }

    pub fn with_file(mut self, name: &str, file: ImageFile) -> Self {
        self.fields.push(FormField::File { name: name.to_owned(), file });
        self
    }

    pub fn files(&self) -> impl Iterator<Item = &ImageFile> {
        self.fields.iter().filter_map(|field| match field {
            FormField::File { file, .. } => Some(file),
            FormField::Text { .. } => None,
        })
    }
}
