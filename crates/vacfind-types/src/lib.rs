pub mod city;
pub mod month;
pub mod query;
pub mod sort;
pub mod validation;

pub use city::*;
pub use month::*;
pub use query::*;
pub use sort::*;
pub use validation::*;
