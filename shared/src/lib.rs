//! Shared library for the skill Lambda.
//!
//! This crate provides the Alexa wire models, response builders, configuration
//! and error types used by the Lambda binary.

pub mod config;
pub mod error;
pub mod models;
pub mod response;

pub use config::{Config, LogFormat};
pub use error::{Error, Result};
pub use models::{
    Intent, IntentRequest, Request, ResponseEnvelope, Session, SessionAttributes, SkillEvent,
    SpeechletResponse,
};
pub use response::{build_response, build_speechlet_response};
