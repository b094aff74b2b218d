pub mod config;
pub mod months;
pub mod search;
