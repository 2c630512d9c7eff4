//! Helpers that build Alexa responses.

use crate::models::{
    Card, OutputSpeech, Reprompt, RepromptSpeech, ResponseEnvelope, SessionAttributes,
    SpeechletResponse, PLAIN_TEXT, PROTOCOL_VERSION, SIMPLE_CARD,
};

/// Prefix applied to card titles and contents.
pub const CARD_PREFIX: &str = "SessionSpeechlet";

/// Assemble the speech, card and reprompt payload.
///
/// Strings are taken verbatim. A `None` reprompt stays `None` (sent as
/// `null`), which tells the service not to reprompt at all.
pub fn build_speechlet_response(
    title: &str,
    output: &str,
    reprompt_text: Option<&str>,
    should_end_session: bool,
) -> SpeechletResponse {
    SpeechletResponse {
        output_speech: OutputSpeech {
            speech_type: PLAIN_TEXT.to_string(),
            text: output.to_string(),
        },
        card: Card {
            card_type: SIMPLE_CARD.to_string(),
            title: format!("{} - {}", CARD_PREFIX, title),
            content: format!("{} - {}", CARD_PREFIX, output),
        },
        reprompt: Reprompt {
            output_speech: RepromptSpeech {
                speech_type: PLAIN_TEXT.to_string(),
                text: reprompt_text.map(str::to_string),
            },
        },
        should_end_session,
    }
}

/// Wrap a speechlet response with the session attributes to persist.
pub fn build_response(
    session_attributes: SessionAttributes,
    speechlet_response: SpeechletResponse,
) -> ResponseEnvelope {
    ResponseEnvelope {
        version: PROTOCOL_VERSION.to_string(),
        session_attributes,
        response: speechlet_response,
    }
}
