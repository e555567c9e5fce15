//! Kids Classic Books - voice-skill backend for a children's book catalog.
//!
//! Given a parsed skill-platform event (launch, intent, or session-end),
//! this crate resolves the user's conversational intent, optionally looks a
//! book up in a third-party catalog, classifies it as child-appropriate,
//! and produces a speech/card response plus updated session state. The
//! service is stateless between turns; dialog state rides in the
//! caller-persisted session-attributes blob.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod platform;
pub mod ports;
