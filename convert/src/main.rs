use lambda_runtime::{error::HandlerError, lambda, Context};
use serde::{Deserialize, Serialize};

const IMAGE_URI: &str = "s3://mybucket/foo/XXXX.png";
const DOCUMENT_URI: &str = "s3://mybucket/foo/XXXX.pdf";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Event {
    str_value: Option<String>,
    mode: Option<String>,
    code_value: Option<u16>,
}

#[derive(Debug, Serialize)]
struct Output {
    available: bool,
    #[serde(rename = "imageURI")]
    image_uri: String,
    #[serde(rename = "documentURI")]
    document_uri: String,
}

fn main() {
    env_logger::init();
    lambda!(handler)
}

fn handler(event: Event, _: Context) -> Result<Output, HandlerError> {
    log::info!("converting {:?} as {:?}", event.str_value, event.mode);
    Ok(convert(event))
}

fn convert(_: Event) -> Output {
    Output {
        available: true,
        image_uri: IMAGE_URI.into(),
        document_uri: DOCUMENT_URI.into(),
    }
}
