//! Alexa Skills Kit request and response models.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version stamped on every response envelope.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Speech type for plain (non-SSML) output.
pub const PLAIN_TEXT: &str = "PlainText";

/// Card type for title + content cards.
pub const SIMPLE_CARD: &str = "Simple";

/// Caller-persisted key/value bag, echoed back every turn.
///
/// The map returned with a response is the complete new session state; it is
/// never merged with what the caller sent.
pub type SessionAttributes = BTreeMap<String, String>;

/// Inbound event delivered by the Alexa service.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillEvent {
    #[serde(default)]
    pub session: Session,
    pub request: Request,
    /// Device/system context, unused by this skill
    #[serde(default)]
    pub context: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub application: Application,
    #[serde(default)]
    pub attributes: Option<SessionAttributes>,
}

impl Session {
    /// Look up a session attribute set on a previous turn.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attrs| attrs.get(key))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub application_id: String,
}

/// Request body, tagged by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest(LaunchRequest),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
    /// Any request type this skill does not register for
    #[serde(other)]
    Unsupported,
}

impl Request {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Request::LaunchRequest(r) => Some(r.request_id.as_str()),
            Request::IntentRequest(r) => Some(r.request_id.as_str()),
            Request::SessionEndedRequest(r) => Some(r.request_id.as_str()),
            Request::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    #[serde(default)]
    pub request_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(default)]
    pub request_id: String,
    pub intent: Intent,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    #[serde(default)]
    pub request_id: String,
    /// USER_INITIATED, ERROR or EXCEEDED_MAX_REPROMPTS
    #[serde(default)]
    pub reason: Option<String>,
}

/// A pre-classified user action with its slot values.
#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: Option<HashMap<String, Slot>>,
}

impl Intent {
    /// Value of the named slot, if the slot exists and was filled.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .as_ref()
            .and_then(|slots| slots.get(name))
            .and_then(|slot| slot.value.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Outbound response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: SessionAttributes,
    pub response: SpeechletResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub reprompt: Reprompt,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: RepromptSpeech,
}

/// Reprompt speech. A `None` text is sent as `null` and means "do not
/// reprompt", which the service treats differently from an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepromptSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: Option<String>,
}
