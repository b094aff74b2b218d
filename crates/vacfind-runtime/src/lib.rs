pub mod config;
pub mod error;
pub mod lookup;
pub mod session;

pub use config::{Config, DEFAULT_API_URL, resolve_data_dir, resolve_endpoint};
pub use error::{Error, Result};
pub use lookup::{CityLookup, HttpLookup, LookupError};
pub use session::{
    Completion, Failure, PendingSearch, Phase, SearchSession, TRANSPORT_FAILURE_MESSAGE, Ticket,
};
