//! # Presentation Layer
//!
//! MVVM-style console output. The data flow is strictly one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! * `view_models/`: what the user can see. Serializable, raw values.
//! * `presenters/`: pure functions from session state to view models.
//! * `views/`: `fmt::Display` layouts for plain text.
//! * `renderers/`: picks JSON or text and adds badge and tips.
//!
//! `--format json` always prints the full view model; only plain text
//! hides rows of collapsed countries.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
