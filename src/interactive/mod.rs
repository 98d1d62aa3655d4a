//! Interactive TUI interface
//!
//! Full-screen game mode with the board, an on-screen keyboard showing
//! accumulated letter knowledge, and a score panel.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
