use lambda_runtime::{error::HandlerError, lambda, Context};
use serde::{Deserialize, Serialize};

const RESULT_URI: &str = "s3://mybucket/foo/XXXX.png";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Event {
    str_value: Option<String>,
}

#[derive(Debug, Serialize)]
struct Output {
    #[serde(rename = "resultURI")]
    result_uri: String,
}

fn main() {
    env_logger::init();
    lambda!(handler)
}

fn handler(event: Event, _: Context) -> Result<Output, HandlerError> {
    log::info!("thumbnailing {:?}", event.str_value);
    Ok(thumbnail(event))
}

fn thumbnail(_: Event) -> Output {
    Output {
        result_uri: RESULT_URI.into(),
    }
}
