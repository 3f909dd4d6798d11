//! Widget component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` owns every per-instance signal and resource handle and
//! provides them through Leptos context; the remaining components render one
//! surface each and call back into [`chat_widget::WidgetActions`].

pub mod chat_panel;
pub mod chat_widget;
pub mod launcher;
pub mod message_list;
pub mod preview_bubble;
pub mod settings_dropdown;
pub mod suggested_questions;
