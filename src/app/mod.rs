//! Application orchestration: state, event reading and input handling.

pub mod event;
pub mod handler;
pub mod state;
