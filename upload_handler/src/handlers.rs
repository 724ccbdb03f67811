use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use tracing::{info, warn};
use upload_lib::service::common_structs::{ImageFile, ImageForm};
use upload_lib::service::emotion_service::EmotionService;
use upload_lib::service::CommonService;
use upload_lib::view::elements::ResultContainer;
use upload_lib::view::page::PageState;
use upload_lib::view::preview::{FileSelectionEvent, PreviewHandler};
use upload_lib::view::render::{render_error, render_page};
use upload_lib::view::submission::{SubmissionHandler, SubmissionOutcome, SubmitEvent};


// Lambda's synchronous invocation payload cap
pub const MAX_UPLOAD_BYTES: usize = 6 * 1024 * 1024;


#[derive(Clone)]
pub struct AppState {
    pub service: CommonService,
    pub page: PageState,
    pub preview: PreviewHandler,
    pub submission: SubmissionHandler<EmotionService>,
}

impl AppState {
    pub fn new(service: CommonService, image_field_name: &str) -> Self {
        Self {
            page: PageState::new(image_field_name),
            preview: PreviewHandler::new(&service.blobs),
            submission: SubmissionHandler::new(service.emotion.clone()),
            service,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_requested))
        .route("/preview", post(preview_received))
        .route("/emotion", get(emotion_requested).post(submission_received))
        .route("/blob/:id", get(blob_requested))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}


fn build_error_response(status: StatusCode, message: &str) -> Response {
    let mut json_header = HeaderMap::new();
    json_header.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let body = json!({
        "success": false,
        "message": message
    });
    (status, json_header, body.to_string()).into_response()
}

fn build_success_response(body: &Value) -> Response {
    let mut json_header = HeaderMap::new();
    json_header.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    (json_header, body.to_string()).into_response()
}

fn build_html_response(status: StatusCode, html: &str) -> Response {
    let mut html_header = HeaderMap::new();
    html_header.insert(CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
    (status, html_header, html.to_owned()).into_response()
}


// same shape as browser FormData; an empty file input is skipped
async fn read_form(mut multipart: Multipart) -> anyhow::Result<ImageForm> {
    let mut form = ImageForm::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_owned();
        match field.file_name().map(|n| n.to_owned()) {
            Some(file_name) => {
                let content_type = field.content_type().map(|c| c.to_owned());
                let bytes = field.bytes().await?;
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                form = form.with_file(&name, ImageFile::new(&file_name, content_type.as_deref(), bytes.to_vec()));
            },
            None => {
                let value = field.text().await?;
                form = form.with_text(&name, &value);
            },
        }
    }
    Ok(form)
}


pub async fn page_requested(State(state): State<AppState>) -> Response {
    build_html_response(StatusCode::OK, &render_page(&state.page))
}

pub async fn preview_received(
    State(state): State<AppState>,
    multipart: Multipart
) -> Response {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(error) => {
            warn!("Error reading preview upload: {:?}", error);
            return build_error_response(StatusCode::BAD_REQUEST, "Error reading upload.");
        },
    };

    let event = FileSelectionEvent::new(form.files().cloned().collect());
    match state.preview.load_file(&event, &state.page.preview).await {
        Ok(url) => build_success_response(&json!({
            "success": true,
            "url": url
        })),
        Err(error) => {
            warn!("Error loading preview: {}", error);
            build_error_response(StatusCode::BAD_REQUEST, &error.to_string())
        },
    }
}

pub async fn blob_requested(
    State(state): State<AppState>,
    Path(id): Path<String>
) -> Response {
    let Some(file) = state.service.blobs.get(&id).await else {
        return build_error_response(StatusCode::NOT_FOUND, "Unknown blob.");
    };

    let mut headers = HeaderMap::new();
    let content_type = HeaderValue::from_str(&file.content_type)
        .unwrap_or(HeaderValue::from_static("application/octet-stream"));
    headers.insert(CONTENT_TYPE, content_type);
    (headers, file.bytes).into_response()
}

pub async fn emotion_requested(State(state): State<AppState>) -> Response {
    build_html_response(StatusCode::OK, &state.page.result.html())
}

pub async fn submission_received(
    State(state): State<AppState>,
    multipart: Multipart
) -> Response {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(error) => {
            warn!("Error reading submitted form: {:?}", error);
            return build_html_response(StatusCode::BAD_REQUEST, &render_error("could not read the submitted form"));
        },
    };

    let mut event = SubmitEvent::new(form);
    let status = match state.submission.handle(&mut event, &state.page.result).await {
        SubmissionOutcome::Rendered(scores) => {
            info!("rendered scores: {:?}", scores);
            StatusCode::OK
        },
        SubmissionOutcome::Stale => StatusCode::OK,
        SubmissionOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
    };

    build_html_response(status, &state.page.result.html())
}
