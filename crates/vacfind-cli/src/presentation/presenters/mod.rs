pub mod config;
pub mod months;
pub mod search;

pub use config::present_config;
pub use months::present_months;
pub use search::{SearchDisplay, present_search_results};
