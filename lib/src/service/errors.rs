use reqwest::StatusCode;


#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Emotion API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Unexpected response shape: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("No face detected in the image")]
    NoFaceDetected,
}

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("No file selected")]
    NoFileSelected,
}
