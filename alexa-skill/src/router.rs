//! Routes an incoming event by request type and intent name.

use rand::Rng;
use shared::models::{IntentRequest, LaunchRequest, SessionEndedRequest};
use shared::{Error, Request, ResponseEnvelope, Result, Session, SkillEvent};

use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use crate::handlers;

/// Intents this skill registers for. Names match exactly, case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIntent {
    MyLanguageIs,
    WhatsMyLanguage,
    GetRandomNumber,
    Help,
    Stop,
    Cancel,
}

impl SkillIntent {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "MyLanguageIsIntent" => Ok(SkillIntent::MyLanguageIs),
            "WhatsMyLanguageIntent" => Ok(SkillIntent::WhatsMyLanguage),
            "GetRandomNumberIntent" => Ok(SkillIntent::GetRandomNumber),
            "AMAZON.HelpIntent" => Ok(SkillIntent::Help),
            "AMAZON.StopIntent" => Ok(SkillIntent::Stop),
            "AMAZON.CancelIntent" => Ok(SkillIntent::Cancel),
            other => Err(Error::UnhandledIntent(other.to_string())),
        }
    }
}

/// Dispatch one event.
///
/// Returns `Ok(None)` for `SessionEndedRequest`: the service expects no
/// response body for it.
pub fn route<R: Rng + ?Sized>(
    event: &SkillEvent,
    rng: &mut R,
    diagnostics: &dyn Diagnostics,
) -> Result<Option<ResponseEnvelope>> {
    let session = &event.session;

    if session.new {
        let request_id = event.request.request_id().unwrap_or_default();
        on_session_started(request_id, session, diagnostics);
    }

    match &event.request {
        Request::LaunchRequest(request) => Ok(Some(on_launch(request, session, diagnostics))),
        Request::IntentRequest(request) => on_intent(request, session, rng, diagnostics).map(Some),
        Request::SessionEndedRequest(request) => {
            on_session_ended(request, session, diagnostics);
            Ok(None)
        }
        Request::Unsupported => Err(Error::UnsupportedRequestType),
    }
}

fn on_session_started(request_id: &str, session: &Session, diagnostics: &dyn Diagnostics) {
    diagnostics.record(DiagnosticEvent::SessionStarted {
        request_id: request_id.to_string(),
        session_id: session.session_id.clone(),
    });
}

/// The user launched the skill without saying what they want.
fn on_launch(
    request: &LaunchRequest,
    session: &Session,
    diagnostics: &dyn Diagnostics,
) -> ResponseEnvelope {
    diagnostics.record(DiagnosticEvent::Launch {
        request_id: request.request_id.clone(),
        session_id: session.session_id.clone(),
    });

    handlers::welcome_response()
}

fn on_intent<R: Rng + ?Sized>(
    request: &IntentRequest,
    session: &Session,
    rng: &mut R,
    diagnostics: &dyn Diagnostics,
) -> Result<ResponseEnvelope> {
    let intent = &request.intent;

    diagnostics.record(DiagnosticEvent::Intent {
        request_id: request.request_id.clone(),
        session_id: session.session_id.clone(),
        intent: intent.name.clone(),
    });

    let envelope = match SkillIntent::from_name(&intent.name)? {
        SkillIntent::MyLanguageIs => handlers::set_favorite_language(intent, diagnostics),
        SkillIntent::WhatsMyLanguage => {
            handlers::get_favorite_language(intent, session, diagnostics)
        }
        SkillIntent::GetRandomNumber => handlers::random_number(intent, rng, diagnostics),
        SkillIntent::Help => handlers::welcome_response(),
        SkillIntent::Stop | SkillIntent::Cancel => handlers::session_end_response(),
    };

    Ok(envelope)
}

/// Not called when a previous response already ended the session.
fn on_session_ended(
    request: &SessionEndedRequest,
    session: &Session,
    diagnostics: &dyn Diagnostics,
) {
    diagnostics.record(DiagnosticEvent::SessionEnded {
        request_id: request.request_id.clone(),
        session_id: session.session_id.clone(),
        reason: request.reason.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::testing::RecordingDiagnostics;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn event(request: serde_json::Value, new: bool) -> SkillEvent {
        serde_json::from_value(json!({
            "session": {
                "new": new,
                "sessionId": "session-1",
                "application": { "applicationId": "app-1" },
                "attributes": { "favoriteLanguage": "Rust" }
            },
            "request": request
        }))
        .unwrap()
    }

    fn intent_event(name: &str) -> SkillEvent {
        event(
            json!({
                "type": "IntentRequest",
                "requestId": "req-1",
                "intent": { "name": name, "slots": {} }
            }),
            false,
        )
    }

    fn route_event(
        event: &SkillEvent,
    ) -> (Result<Option<ResponseEnvelope>>, Vec<DiagnosticEvent>) {
        let diagnostics = RecordingDiagnostics::default();
        let mut rng = StdRng::seed_from_u64(1);
        let result = route(event, &mut rng, &diagnostics);
        (result, diagnostics.events())
    }

    #[test]
    fn test_intent_names_map_exactly() {
        let cases = [
            ("MyLanguageIsIntent", SkillIntent::MyLanguageIs),
            ("WhatsMyLanguageIntent", SkillIntent::WhatsMyLanguage),
            ("GetRandomNumberIntent", SkillIntent::GetRandomNumber),
            ("AMAZON.HelpIntent", SkillIntent::Help),
            ("AMAZON.StopIntent", SkillIntent::Stop),
            ("AMAZON.CancelIntent", SkillIntent::Cancel),
        ];
        for (name, expected) in cases {
            assert_eq!(SkillIntent::from_name(name).unwrap(), expected);
        }
        assert!(matches!(
            SkillIntent::from_name("amazon.helpintent"),
            Err(Error::UnhandledIntent(name)) if name == "amazon.helpintent"
        ));
    }

    #[test]
    fn test_launch_routes_to_welcome() {
        for new in [true, false] {
            let (result, _) = route_event(&event(
                json!({ "type": "LaunchRequest", "requestId": "req-1" }),
                new,
            ));
            assert_eq!(result.unwrap(), Some(handlers::welcome_response()));
        }
    }

    #[test]
    fn test_new_session_fires_started_hook() {
        let (_, events) = route_event(&event(
            json!({ "type": "LaunchRequest", "requestId": "req-1" }),
            true,
        ));
        assert_eq!(
            events,
            vec![
                DiagnosticEvent::SessionStarted {
                    request_id: "req-1".to_string(),
                    session_id: "session-1".to_string(),
                },
                DiagnosticEvent::Launch {
                    request_id: "req-1".to_string(),
                    session_id: "session-1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_help_stop_cancel() {
        let (help, _) = route_event(&intent_event("AMAZON.HelpIntent"));
        assert_eq!(help.unwrap(), Some(handlers::welcome_response()));

        for name in ["AMAZON.StopIntent", "AMAZON.CancelIntent"] {
            let (result, _) = route_event(&intent_event(name));
            assert_eq!(result.unwrap(), Some(handlers::session_end_response()));
        }
    }

    #[test]
    fn test_whats_my_language_reads_session() {
        let (result, _) = route_event(&intent_event("WhatsMyLanguageIntent"));
        let envelope = result.unwrap().unwrap();
        assert_eq!(
            envelope.response.output_speech.text,
            "Your favorite language is Rust, Goodbye."
        );
    }

    #[test]
    fn test_my_language_without_slot_drops_prior_attributes() {
        let (result, _) = route_event(&intent_event("MyLanguageIsIntent"));
        let envelope = result.unwrap().unwrap();
        assert!(envelope.session_attributes.is_empty());
        assert!(!envelope.response.should_end_session);
    }

    #[test]
    fn test_get_random_number_routes() {
        let (result, _) = route_event(&intent_event("GetRandomNumberIntent"));
        let envelope = result.unwrap().unwrap();
        assert_eq!(
            envelope.response.output_speech.text,
            handlers::MISSING_LIMITS_SPEECH
        );
    }

    #[test]
    fn test_unknown_intent_is_an_error() {
        let (result, events) = route_event(&intent_event("OrderPizzaIntent"));
        assert!(matches!(result, Err(Error::UnhandledIntent(name)) if name == "OrderPizzaIntent"));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_session_ended_has_no_envelope() {
        let (result, events) = route_event(&event(
            json!({
                "type": "SessionEndedRequest",
                "requestId": "req-9",
                "reason": "USER_INITIATED"
            }),
            false,
        ));
        assert!(result.unwrap().is_none());
        assert_eq!(
            events,
            vec![DiagnosticEvent::SessionEnded {
                request_id: "req-9".to_string(),
                session_id: "session-1".to_string(),
                reason: Some("USER_INITIATED".to_string()),
            }]
        );
    }

    #[test]
    fn test_unsupported_request_type() {
        let (result, _) = route_event(&event(
            json!({ "type": "Display.ElementSelected", "requestId": "req-2" }),
            false,
        ));
        assert!(matches!(result, Err(Error::UnsupportedRequestType)));
    }
}
