//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer reads the sequencer's section state and turns it into cells on
//! the terminal.  It also supplies the terminal's motion driver.

pub mod about;
pub mod easing;
pub mod hero;
pub mod layout;
pub mod page;
pub mod paint;
pub mod projects;
pub mod pulse;
pub mod skills;
pub mod theme;
