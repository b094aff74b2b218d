use std::fmt;

use crate::presentation::view_models::MonthListViewModel;

pub struct MonthListView<'a> {
    data: &'a MonthListViewModel,
}

impl<'a> MonthListView<'a> {
    pub fn new(data: &'a MonthListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for MonthListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self
            .data
            .months
            .iter()
            .map(|month| month.name.len())
            .max()
            .unwrap_or(0);

        for month in &self.data.months {
            writeln!(f, "{:<width$}  {}", month.name, month.abbreviation)?;
        }
        Ok(())
    }
}
