//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, speech,
//! clocks) from component logic to improve reuse and testability.

pub mod clock;
pub mod markdown;
pub mod speech;
pub mod ticker;
