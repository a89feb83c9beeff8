use lambda_runtime::{error::HandlerError, lambda, Context};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_OPT_PARAM: &str = "defaultValue";
const RESULT_URI: &str = "s3://mybucket/XXXXX.pdf";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Event {
    #[serde(default)]
    str_value: Value,
    #[serde(default)]
    opt_param: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    available: bool,
    opt_param: Value,
    #[serde(rename = "resultURI")]
    result_uri: String,
}

fn main() {
    env_logger::init();
    lambda!(handler)
}

fn handler(event: Event, _: Context) -> Result<Output, HandlerError> {
    log::info!("rendering {:?}", event.str_value);
    Ok(render(event))
}

fn render(event: Event) -> Output {
    Output {
        available: true,
        opt_param: resolve_param(event.opt_param),
        result_uri: RESULT_URI.into(),
    }
}

// absent, null, false, 0 and "" all fall back to the default
fn resolve_param(param: Value) -> Value {
    let fallback = match &param {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    };
    if fallback {
        Value::String(DEFAULT_OPT_PARAM.into())
    } else {
        param
    }
}
