use lambda_runtime::{error::HandlerError, lambda, Context};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Event {
    str_value: Option<String>,
    #[serde(default)]
    bool_value: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Verdict {
    available: bool,
    mode: String,
    option: bool,
    processing_seconds: u64,
    code_value: u16,
    type_value: String,
}

fn main() {
    env_logger::init();
    lambda!(handler)
}

fn handler(event: Event, _: Context) -> Result<Verdict, HandlerError> {
    log::info!(
        "analyzing {:?} (option {})",
        event.str_value,
        event.bool_value
    );
    Ok(analyze(event))
}

// canned verdict until the real analyzer lands
fn analyze(_: Event) -> Verdict {
    Verdict {
        available: true,
        mode: "html".into(),
        option: false,
        processing_seconds: 4,
        code_value: 200,
        type_value: "text/html".into(),
    }
}
