pub mod common;
pub mod config;
pub mod months;
pub mod result;
pub mod search;

pub use common::*;
pub use config::*;
pub use months::*;
pub use result::*;
pub use search::*;
