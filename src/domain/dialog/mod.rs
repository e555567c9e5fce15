//! The dialog state machine and its supporting types.
//!
//! A dialog walks the user through a fixed follow-up sequence after a
//! successful lookup: basic facts, description, similar books, more books
//! connected to the author, then goodbye. Progress is tracked by
//! [`RequestStage`] inside [`SessionState`], which rides the caller's
//! session-attributes blob between turns.

mod intent;
mod machine;
mod session;
mod stage;

pub use intent::SkillIntent;
pub use machine::{CardImage, DialogMachine, SlotValues, Turn};
pub use session::SessionState;
pub use stage::RequestStage;
