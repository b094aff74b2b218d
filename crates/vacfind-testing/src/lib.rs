//! Testing infrastructure for vacfind integration tests.
//!
//! - `TestWorld`: isolated data directory and environment for running the CLI
//! - `MockApiServer`: a local `/cities` service with a scripted reply
//! - `lookups`: in-process [`CityLookup`](vacfind_runtime::CityLookup) stubs
//! - `fixtures`: sample lookup responses
//! - `assertions`: checks against the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod lookups;
pub mod server;
pub mod world;

pub use server::{MockApiServer, MockReply};
pub use world::TestWorld;
