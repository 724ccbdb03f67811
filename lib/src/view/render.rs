use crate::service::common_structs::EmotionScores;
use crate::utilities::{escape_html, js_string_literal};
use super::page::PageState;
use super::elements::{ImageElement, ResultContainer};

pub const LOADING_TEXT: &str = "Loading...";

pub const PREVIEW_ELEMENT_ID: &str = "output";
pub const FORM_ELEMENT_ID: &str = "image-form";
pub const RESULT_ELEMENT_ID: &str = "emotion";


pub fn render_scores(scores: &EmotionScores) -> String {
    let lines = scores.labeled()
        .iter()
        .map(|(label, value)| format!("    <p>{}: {}</p>\n", label, value))
        .collect::<String>();
    format!("\n    <h3>Emotions in the image:</h3><br />\n{}    ", lines)
}

pub fn render_error(message: &str) -> String {
    format!("<p class=\"error\">Emotion detection failed: {}</p>", escape_html(message))
}

pub fn render_page(page: &PageState) -> String {
    let preview_src = page.preview.src().unwrap_or_default();
    format!(r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    <title>Emotion Detection</title>
</head>
<body>
    <form id="{form_id}" action="/emotion" method="post" enctype="multipart/form-data">
        <input type="file" name="{field}" accept="image/*" onchange="loadFile(event)" />
        <button type="submit">Detect</button>
    </form>
    <img id="{preview_id}" src="{src}" width="320" />
    <div id="{result_id}">{result}</div>
    <script>
    function loadFile(event) {{
        var payload = new FormData();
        payload.append({field_js}, event.target.files[0]);
        fetch("/preview", {{ method: "POST", body: payload }})
            .then(function (resp) {{ return resp.json(); }})
            .then(function (data) {{ if (data.success) {{ document.getElementById("{preview_id}").src = data.url; }} }});
    }}
    document.getElementById("{form_id}").addEventListener("submit", function (event) {{
        event.preventDefault();
        var container = document.getElementById("{result_id}");
        container.innerHTML = "{loading}";
        fetch("/emotion", {{ method: "POST", body: new FormData(event.target) }})
            .then(function (resp) {{ return resp.text(); }})
            .then(function (html) {{ container.innerHTML = html; }});
    }});
    </script>
</body>
</html>
"#,
        form_id = FORM_ELEMENT_ID,
        preview_id = PREVIEW_ELEMENT_ID,
        result_id = RESULT_ELEMENT_ID,
        field = escape_html(&page.image_field_name),
        field_js = js_string_literal(&page.image_field_name),
        src = escape_html(&preview_src),
        result = page.result.html(),
        loading = LOADING_TEXT,
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scores() -> EmotionScores {
        EmotionScores {
            anger: 0.1,
            contempt: 0.0,
            disgust: 0.0,
            fear: 0.0,
            happiness: 0.8,
            neutral: 0.1,
            sadness: 0.0,
            surprise: 0.0,
        }
    }

    #[test]
    fn scores_render_in_fixed_order() {
        let html = render_scores(&sample_scores());
        assert!(html.contains("<h3>Emotions in the image:</h3>"));
        assert!(html.contains("happiness: 0.8"));
        assert!(html.contains("anger: 0.1"));
        assert!(html.contains("contempt: 0</p>"));

        let labels = ["anger", "contempt", "disgust", "fear", "happiness", "neutral", "sadness", "surprise"];
        let positions: Vec<usize> = labels.iter()
            .map(|label| html.find(&format!("<p>{}: ", label)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn error_message_is_escaped() {
        assert_eq!(
            render_error("<bad>"),
            "<p class=\"error\">Emotion detection failed: &lt;bad&gt;</p>"
        );
    }

    #[test]
    fn page_carries_element_ids_and_state() {
        let page = PageState::new("photo");
        page.preview.set_src("/blob/abc");
        page.result.set_html(LOADING_TEXT);

        let html = render_page(&page);
        assert!(html.contains(r#"id="output" src="/blob/abc""#));
        assert!(html.contains(r#"id="image-form""#));
        assert!(html.contains(r#"<div id="emotion">Loading...</div>"#));
        assert!(html.contains(r#"name="photo""#));
    }

    #[test]
    fn field_name_matches_in_form_and_script() {
        let page = PageState::new("pic\"&'1");

        let html = render_page(&page);
        assert!(html.contains(r#"<input type="file" name="pic&quot;&amp;&#39;1""#));
        assert!(html.contains(r#"payload.append("pic\"&'1", event.target.files[0]);"#));
    }
}
