//! The advice engines behind each endpoint.
//!
//! Every engine here is a pure function of its input: a fixed formula, a
//! static table, or (for triage) an ordered keyword rule table.  None of them
//! hold state between calls, so they can be called from any task without
//! coordination.

pub mod future_self;
pub mod hangover;
pub mod harm_reduction;
pub mod triage;
