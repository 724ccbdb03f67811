use crate::env_keys::IMAGE_FIELD_NAME;

pub const DEFAULT_IMAGE_FIELD_NAME: &str = "image";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";


// form field carrying the image, `image` unless overridden
pub fn get_image_field_name() -> String {
    image_field_name_from(std::env::var(IMAGE_FIELD_NAME).ok())
}

pub fn image_field_name_from(configured: Option<String>) -> String {
    configured
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_IMAGE_FIELD_NAME.to_owned())
}

// declared type first, then a guess from the file name
pub fn resolve_content_type(declared: Option<&str>, file_name: &str) -> String {
    if let Some(declared) = declared {
        if !declared.trim().is_empty() {
            return declared.to_owned();
        }
    }
    mime_guess::from_path(file_name)
        .first_raw()
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_owned()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// quoted literal safe inside an inline <script>
pub fn js_string_literal(text: &str) -> String {
    serde_json::to_string(text)
        .unwrap_or_default()
        .replace('<', "\\u003c")
}
