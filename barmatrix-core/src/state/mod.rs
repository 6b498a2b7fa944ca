//! Render scheduling state
//!
//! The tick and the main loop hand a single render request back and forth
//! through a three-state machine. The machine is explicit and finite; the
//! flag stores it in one atomic so the tick can run in interrupt context.

pub mod flag;
pub mod machine;

pub use flag::{TickFlag, TickOutcome};
pub use machine::{RenderEvent, RenderState};
