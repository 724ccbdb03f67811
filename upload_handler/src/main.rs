pub mod handlers;

use handlers::{router, AppState};
use lambda_http::{run, Error};
use tracing::info;
use upload_lib::service::CommonService;
use upload_lib::utilities::get_image_field_name;
use std::env::set_var;


#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    lambda_http::tracing::init_default_subscriber();

    let service = CommonService::new();
    let field_name = get_image_field_name();
    let api_base = service.emotion.endpoint().split('?').next().unwrap_or_default().to_owned();
    info!(%api_base, %field_name, "starting upload handler");

    let app = router(AppState::new(service, &field_name));

    run(app).await
}
