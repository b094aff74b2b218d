use vacfind_types::Month;

use crate::presentation::view_models::{
    CommandResultViewModel, MonthEntryViewModel, MonthListViewModel,
};

pub fn present_months() -> CommandResultViewModel<MonthListViewModel> {
    let months = Month::ALL
        .iter()
        .map(|month| MonthEntryViewModel {
            name: month.as_str().to_string(),
            abbreviation: month.short().to_string(),
        })
        .collect();

    CommandResultViewModel::new(MonthListViewModel { months })
}
