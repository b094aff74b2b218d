// Plain-text layouts for view models. Views only arrange what presenters computed.

pub mod config;
pub mod months;
pub mod search;
