//! Widget-local state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `conversation`, `persona`, `typing`,
//! `voice`) so components depend on small focused models. Each model is a
//! plain struct wrapped in an `RwSignal` owned by one widget instance; none of
//! them touch the DOM, which keeps every transition testable natively.

pub mod conversation;
pub mod persona;
pub mod typing;
pub mod ui;
pub mod voice;
