//! Alexa Skill Lambda - Handles Alexa voice interactions.
//!
//! Answers launch, help, stop/cancel, favorite-language and random-number
//! requests. Session state lives only in the attributes echoed back to the
//! Alexa service each turn.

mod diagnostics;
mod handlers;
mod router;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use rand::Rng;
use serde_json::Value;
use shared::{Config, LogFormat, ResponseEnvelope, SkillEvent};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::diagnostics::{DiagnosticEvent, Diagnostics, TracingDiagnostics};

/// Parse and route one raw event.
///
/// Every failure, including a malformed event, comes back as `Err`, so the
/// caller always gets exactly one outcome per event.
fn handle_event<R: Rng + ?Sized>(
    payload: Value,
    rng: &mut R,
    diagnostics: &dyn Diagnostics,
) -> shared::Result<Option<ResponseEnvelope>> {
    let event: SkillEvent =
        serde_json::from_value(payload).map_err(shared::Error::MalformedEvent)?;

    // Application ID is logged only; verification is not enforced.
    diagnostics.record(DiagnosticEvent::Invocation {
        application_id: event.session.application.application_id.clone(),
    });

    router::route(&event, rng, diagnostics)
}

async fn handler(event: LambdaEvent<Value>) -> Result<Option<ResponseEnvelope>, Error> {
    let (payload, context) = event.into_parts();

    let mut rng = rand::thread_rng();
    handle_event(payload, &mut rng, &TracingDiagnostics).map_err(|e| {
        error!(
            request_id = %context.request_id,
            kind = e.kind(),
            error = %e,
            "Failed to handle skill event"
        );
        Error::from(e)
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::new(&config.log_filter));
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }

    run(service_fn(handler)).await
}
