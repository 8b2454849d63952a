use chrono::{Datelike, Local};
use common::{PeriodQuery, TransactionQuery};

/// Filter and pagination selection owned by the coordinator.
///
/// Changing year, month or search always moves back to page 1. Month and year
/// are not range-checked; the API decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    year: i32,
    month: u32,
    search: String,
    page: u32,
    page_size: u32,
}

impl FilterState {
    /// Creates a selection on page 1 with an empty search. A zero page size is raised to 1.
    pub fn new(year: i32, month: u32, page_size: u32) -> Self {
        Self {
            year,
            month,
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Selection for the current local year and month.
    pub fn for_today(page_size: u32) -> Self {
        let today = Local::now().date_naive();
        Self::new(today.year(), today.month(), page_size)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// True when both selections differ at most in the page.
    pub fn same_selection(&self, other: &FilterState) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.search == other.search
            && self.page_size == other.page_size
    }

    pub fn transaction_query(&self) -> TransactionQuery {
        TransactionQuery {
            year: self.year,
            month: self.month,
            search: self.search.clone(),
            page: self.page,
            per_page: self.page_size,
        }
    }

    pub fn period_query(&self) -> PeriodQuery {
        PeriodQuery {
            year: self.year,
            month: self.month,
        }
    }

    // The mutators below report whether anything changed, so that assigning
    // an equal value does not start a refresh cycle.

    pub(crate) fn set_year(&mut self, year: i32) -> bool {
        let changed = self.year != year || self.page != 1;
        self.year = year;
        self.page = 1;
        changed
    }

    pub(crate) fn set_month(&mut self, month: u32) -> bool {
        let changed = self.month != month || self.page != 1;
        self.month = month;
        self.page = 1;
        changed
    }

    pub(crate) fn set_search(&mut self, search: String) -> bool {
        let changed = self.search != search || self.page != 1;
        self.search = search;
        self.page = 1;
        changed
    }

    /// Advance one page unless `last_page` is known and already reached.
    pub(crate) fn next_page(&mut self, last_page: Option<u32>) -> bool {
        if let Some(last_page) = last_page {
            if self.page >= last_page {
                return false;
            }
        }
        self.page = self.page.saturating_add(1);
        true
    }

    pub(crate) fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }
}
