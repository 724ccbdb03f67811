pub static EMOTION_API_ENDPOINT: &str = "EMOTION_API_ENDPOINT";
pub static EMOTION_API_CODE: &str = "EMOTION_API_CODE";

pub static IMAGE_FIELD_NAME: &str = "IMAGE_FIELD_NAME";
