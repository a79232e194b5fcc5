//! Terminal user interface for browsing and sending requests.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┬────────────────────┐
//! │                    │                    │
//! │      Groups        │     Requests       │
//! │                    │                    │
//! ├────────────────────┴────────────────────┤
//! │                                         │
//! │                Response                 │
//! │   Status line and pretty-printed body   │
//! │                                         │
//! ├─────────────────────────────────────────┤
//! │ [h/j/k/l] move | [Enter] send | [q] quit│
//! └─────────────────────────────────────────┘
//! ```
//!
//! Focus moves over a [`NavigationGrid`] whose bottom row is the response
//! panel in both columns.

pub mod app;
pub mod grid;
pub mod input;
pub mod layout;
pub mod panel;
pub mod runner;
pub mod widgets;

pub use app::{App, FetchJob, FetchOutcome};
pub use grid::{Direction, NavigationGrid, Position};
pub use input::{handle_event, handle_key, InputResult};
pub use layout::TuiLayout;
pub use panel::{ListPanel, Panel, PanelKind, ResponsePanel};
pub use runner::{run_tui, TuiRunner};
