//! Glob-import the outcome surface: `use planetgame_core::prelude::*;`

pub use crate::capture::IntoOutcome;
pub use crate::error::Error;
pub use crate::outcome::Outcome;
pub use crate::pending::PendingOutcomeExt;
