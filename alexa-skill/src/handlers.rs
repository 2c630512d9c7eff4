//! Functions that control the skill's behavior.
//!
//! Each handler produces the complete envelope for its turn, including the
//! session attributes the caller should send back next time.

use std::num::IntErrorKind;

use rand::Rng;
use shared::{
    build_response, build_speechlet_response, Intent, ResponseEnvelope, Session,
    SessionAttributes,
};

use crate::diagnostics::{DiagnosticEvent, Diagnostics};

pub const FAVORITE_LANGUAGE_KEY: &str = "favoriteLanguage";

const LANGUAGE_SLOT: &str = "Language";
const UP_LIMIT_SLOT: &str = "UpLimit";
const LOW_LIMIT_SLOT: &str = "LowLimit";

pub const WELCOME_SPEECH: &str = "Hi, my name is Alexa. Welcome to the Tenerife Dev talk about Amazon Echo and the internet of voice. Today your host  will show you how to write your own skills using node JS, and also the dot net framework. This way you can get ahead of the rest and start developing applications with voice today. I hope that you will enjoy it. Speak to you later.";

pub const FAREWELL_SPEECH: &str = "Thank you for your attention. I hope you've learned something today and perhaps will even try to write Alexa skill your self. Have a nice evening!";

pub const LANGUAGE_UNKNOWN_SPEECH: &str =
    "I'm not sure what your favorite language is. Please try again.";

const LANGUAGE_UNKNOWN_REPROMPT: &str = "I'm not sure what your favorite language is. You can tell me your favorite programming language by saying, my favorite programming language is C Sharp";

const LANGUAGE_SET_REPROMPT: &str = "You can ask me your favorite programming language by saying, what's my favorite programming language?";

pub const LANGUAGE_NOT_SET_SPEECH: &str =
    "I'm not sure what your favorite language is, you can say, my favorite language  is C Sharp";

pub const MISSING_LIMITS_SPEECH: &str =
    "Sorry, you did not specify the low and up limits for the random number.";

/// Greeting used for launch and help.
pub fn welcome_response() -> ResponseEnvelope {
    build_response(
        SessionAttributes::new(),
        build_speechlet_response("Welcome", WELCOME_SPEECH, Some(""), true),
    )
}

/// Farewell used for stop and cancel. Clears the session.
pub fn session_end_response() -> ResponseEnvelope {
    build_response(
        SessionAttributes::new(),
        build_speechlet_response("Session Ended", FAREWELL_SPEECH, None, true),
    )
}

/// Store the `Language` slot as the favorite language.
///
/// When the slot is missing the returned attributes are empty rather than
/// the caller's previous ones, so a failed retry forgets an earlier answer.
pub fn set_favorite_language(
    intent: &Intent,
    diagnostics: &dyn Diagnostics,
) -> ResponseEnvelope {
    let mut session_attributes = SessionAttributes::new();

    let (speech_output, reprompt_text) =
        match intent.slot_value(LANGUAGE_SLOT).filter(|v| !v.is_empty()) {
            Some(favorite_language) => {
                diagnostics.record(DiagnosticEvent::LanguageSet {
                    language: favorite_language.to_string(),
                });
                session_attributes.insert(
                    FAVORITE_LANGUAGE_KEY.to_string(),
                    favorite_language.to_string(),
                );
                (
                    format!(
                        "I now know your favorite programming language is {}. You can ask me \
                         what's my favorite programming language?",
                        favorite_language
                    ),
                    LANGUAGE_SET_REPROMPT,
                )
            }
            None => (LANGUAGE_UNKNOWN_SPEECH.to_string(), LANGUAGE_UNKNOWN_REPROMPT),
        };

    build_response(
        session_attributes,
        build_speechlet_response(&intent.name, &speech_output, Some(reprompt_text), false),
    )
}

/// Announce the favorite language remembered in the session, if any.
pub fn get_favorite_language(
    intent: &Intent,
    session: &Session,
    diagnostics: &dyn Diagnostics,
) -> ResponseEnvelope {
    let favorite_language = session
        .attribute(FAVORITE_LANGUAGE_KEY)
        .filter(|v| !v.is_empty());

    diagnostics.record(DiagnosticEvent::LanguageLookup {
        favorite_language: favorite_language.map(str::to_string),
    });

    let (speech_output, should_end_session) = match favorite_language {
        Some(language) => (
            format!("Your favorite language is {}, Goodbye.", language),
            true,
        ),
        None => (LANGUAGE_NOT_SET_SPEECH.to_string(), false),
    };

    build_response(
        SessionAttributes::new(),
        build_speechlet_response(&intent.name, &speech_output, None, should_end_session),
    )
}

/// Answer with a random number between the `LowLimit` and `UpLimit` slots.
///
/// A limit of `0` cannot be told apart from a missing limit.
pub fn random_number<R: Rng + ?Sized>(
    intent: &Intent,
    rng: &mut R,
    diagnostics: &dyn Diagnostics,
) -> ResponseEnvelope {
    let up_limit = parse_limit(intent.slot_value(UP_LIMIT_SLOT));
    let low_limit = parse_limit(intent.slot_value(LOW_LIMIT_SLOT));

    let speech_output = if up_limit == 0 || low_limit == 0 {
        MISSING_LIMITS_SPEECH.to_string()
    } else {
        diagnostics.record(DiagnosticEvent::RandomNumberLimits {
            low: low_limit,
            up: up_limit,
        });
        let random_num = random_between(rng, low_limit, up_limit);
        format!(
            "The random number between {} and {} is {}.",
            low_limit, up_limit, random_num
        )
    };

    build_response(
        SessionAttributes::new(),
        build_speechlet_response(&intent.name, &speech_output, None, true),
    )
}

/// `round(random() * (max - min) + min)` with half-up rounding.
///
/// The end points get half the weight of interior values. Nothing guards
/// `min > max`; the result then lies in `[max, min]`.
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let sample: f64 = rng.gen();
    let scaled = sample * (max as f64 - min as f64) + min as f64;
    (scaled + 0.5).floor() as i64
}

/// Leading-integer parse: surrounding text after the digits is ignored,
/// anything without a leading integer counts as `0`, and a number too large
/// for `i64` saturates at `i64::MAX` / `i64::MIN`.
fn parse_limit(value: Option<&str>) -> i64 {
    let Some(value) = value else {
        return 0;
    };
    let value = value.trim_start();

    let end = value
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    match value[..end].parse::<i64>() {
        Ok(limit) => limit,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}
