use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct MonthListViewModel {
    pub months: Vec<MonthEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct MonthEntryViewModel {
    pub name: String,
    pub abbreviation: String,
}

impl fmt::Display for MonthListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::presentation::views::months::MonthListView;
        write!(f, "{}", MonthListView::new(self))
    }
}
