//! Open/closed status evaluation.
//!
//! Answers "open now?", "open until when?" and "next opening at when?" from
//! a weekly schedule and a set of closed dates. Evaluation is a pure function
//! of its inputs; callers supply the instant and its timezone.

mod evaluator;
mod result;

pub use evaluator::{LOOKAHEAD_DAYS, determine_status, find_next_opening};
pub use result::StatusResult;
