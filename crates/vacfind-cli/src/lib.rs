// NOTE: vacfind layering
//
// types   - plain data shared by every layer (months, sort keys, wire records)
// engine  - pure functions over that data: validation, grouping, ordering
// runtime - the search session, the HTTP lookup and configuration
// cli     - argument parsing and presentation; no search logic lives here
//
// Handlers drive a SearchSession exactly the way a form would: one submit,
// then header clicks (`--expand`, `--sort`) against the displayed result set.

mod args;
mod commands;
pub mod export;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, SearchArgs};
pub use commands::run;
