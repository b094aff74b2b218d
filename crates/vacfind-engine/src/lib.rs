// Engine module - Core result shaping (validation, grouping, ordering, visibility)
// This layer sits between raw lookup data (types) and the session/CLI layers

pub mod collate;
pub mod expansion;
pub mod group;
pub mod sort;
pub mod summary;
pub mod validate;

pub use collate::collate;
pub use expansion::ExpansionState;
pub use group::{CountryGroup, GroupedResults, group_records, group_response};
pub use sort::{TableSorts, compare_cities, sorted_cities, toggle};
pub use summary::{city_count_label, summary_line};
pub use validate::{RAINY_DAYS_MAX, SearchCriteria, validate};
