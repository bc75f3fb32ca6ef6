//! Core sequencing – scroll progress, interpolation, pinning, reveal and counters.
//!
//! Nothing in this module depends on any TUI or rendering crate.  It produces
//! numbers (offsets, opacities, widths) on demand; the `ui` layer binds them
//! to terminal cells.

pub mod counter;
pub mod geometry;
pub mod keyframes;
pub mod motion;
pub mod pin;
pub mod progress;
pub mod sequencer;
pub mod visibility;
