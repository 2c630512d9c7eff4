//! Diagnostic event recording.
//!
//! Handlers and the router never log directly; they hand a
//! [`DiagnosticEvent`] to whatever [`Diagnostics`] sink they were given.

use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Every inbound event, before routing
    Invocation { application_id: String },
    SessionStarted { request_id: String, session_id: String },
    Launch { request_id: String, session_id: String },
    Intent {
        request_id: String,
        session_id: String,
        intent: String,
    },
    SessionEnded {
        request_id: String,
        session_id: String,
        reason: Option<String>,
    },
    LanguageSet { language: String },
    LanguageLookup { favorite_language: Option<String> },
    RandomNumberLimits { low: i64, up: i64 },
}

/// Sink for diagnostic events. Not part of the response contract.
pub trait Diagnostics {
    fn record(&self, event: DiagnosticEvent);
}

/// Emits every event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record(&self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::Invocation { application_id } => {
                info!(application_id = %application_id, "Received skill event");
            }
            DiagnosticEvent::SessionStarted {
                request_id,
                session_id,
            } => {
                info!(request_id = %request_id, session_id = %session_id, "Session started");
            }
            DiagnosticEvent::Launch {
                request_id,
                session_id,
            } => {
                info!(request_id = %request_id, session_id = %session_id, "Launch request");
            }
            DiagnosticEvent::Intent {
                request_id,
                session_id,
                intent,
            } => {
                info!(
                    request_id = %request_id,
                    session_id = %session_id,
                    intent = %intent,
                    "Intent request"
                );
            }
            DiagnosticEvent::SessionEnded {
                request_id,
                session_id,
                reason,
            } => {
                info!(
                    request_id = %request_id,
                    session_id = %session_id,
                    reason = reason.as_deref().unwrap_or("unknown"),
                    "Session ended"
                );
            }
            DiagnosticEvent::LanguageSet { language } => {
                debug!(language = %language, "Favorite language stored in session");
            }
            DiagnosticEvent::LanguageLookup { favorite_language } => {
                debug!(
                    favorite_language = favorite_language.as_deref().unwrap_or(""),
                    found = favorite_language.is_some(),
                    "Favorite language lookup"
                );
            }
            DiagnosticEvent::RandomNumberLimits { low, up } => {
                debug!(min = low, max = up, "Random number limits");
            }
        }
    }
}
