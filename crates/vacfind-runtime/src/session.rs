//! Search session: validation, lookup and the browsable result set.
//!
//! ```text
//! Idle | Success | Failed --submit--> Validating
//! Validating --invalid--> Failed            (no lookup issued)
//! Validating --valid----> AwaitingResponse  (lookup issued with a fresh ticket)
//! AwaitingResponse --ok--> Success
//! AwaitingResponse --error--> Failed
//! ```
//!
//! Every submit supersedes the outstanding one: a completion carrying an older
//! ticket is discarded. The last displayed result set, its expansion flags and
//! its per-table sort state stay available in every phase.

use std::time::Duration;
use tracing::{debug, info, warn};
use vacfind_engine::{
    ExpansionState, GroupedResults, SearchCriteria, TableSorts, group_response, sorted_cities,
    validate,
};
use vacfind_types::{CityRecord, LookupResponse, RawQuery, SortKey, SortSpec, ValidationError};

use crate::lookup::{CityLookup, LookupError};

pub const TRANSPORT_FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Identifies one issued lookup; later tickets supersede earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    Validation(ValidationError),
    Transport(LookupError),
}

impl Failure {
    pub fn message(&self) -> String {
        match self {
            Failure::Validation(err) => err.message(),
            Failure::Transport(_) => TRANSPORT_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Validating,
    AwaitingResponse(Ticket),
    Success,
    Failed(Failure),
}

/// A validated search whose lookup is outstanding
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub ticket: Ticket,
    pub criteria: SearchCriteria,
}

/// What happened to a lookup outcome handed to [`SearchSession::complete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    /// A newer submit superseded this ticket; the outcome was dropped
    Stale,
}

pub struct SearchSession {
    phase: Phase,
    pending: Option<PendingSearch>,
    next_ticket: u64,
    timeout: Duration,
    criteria: Option<SearchCriteria>,
    results: Option<GroupedResults>,
    expansion: ExpansionState,
    sorts: TableSorts,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            pending: None,
            next_ticket: 0,
            timeout: DEFAULT_TIMEOUT,
            criteria: None,
            results: None,
            expansion: ExpansionState::new(),
            sorts: TableSorts::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.phase, Phase::AwaitingResponse(_))
    }

    /// User-facing message when the last submit failed
    pub fn failure_message(&self) -> Option<String> {
        match &self.phase {
            Phase::Failed(failure) => Some(failure.message()),
            _ => None,
        }
    }

    /// Criteria that produced the displayed results
    pub fn criteria(&self) -> Option<&SearchCriteria> {
        self.criteria.as_ref()
    }

    /// Most recent successful result set, if any search has succeeded
    pub fn results(&self) -> Option<&GroupedResults> {
        self.results.as_ref()
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn sorts(&self) -> &TableSorts {
        &self.sorts
    }

    /// Validate a submit and, if valid, issue a ticket for its lookup.
    ///
    /// Any outstanding lookup is superseded even when validation fails.
    pub fn begin(&mut self, raw: &RawQuery) -> Result<PendingSearch, ValidationError> {
        self.phase = Phase::Validating;
        if let Some(previous) = self.pending.take() {
            debug!(ticket = previous.ticket.0, "superseding outstanding search");
        }

        match validate(raw) {
            Ok(criteria) => {
                self.next_ticket += 1;
                let pending = PendingSearch {
                    ticket: Ticket(self.next_ticket),
                    criteria,
                };
                self.phase = Phase::AwaitingResponse(pending.ticket);
                self.pending = Some(pending.clone());
                Ok(pending)
            }
            Err(err) => {
                debug!(kind = ?err.kind(), "search rejected before lookup");
                self.phase = Phase::Failed(Failure::Validation(err.clone()));
                Err(err)
            }
        }
    }

    /// Hand back the outcome of the lookup issued for `ticket`
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<LookupResponse, LookupError>,
    ) -> Completion {
        let Some(pending) = self.pending.take_if(|pending| pending.ticket == ticket) else {
            debug!(ticket = ticket.0, "discarding stale lookup outcome");
            return Completion::Stale;
        };

        match outcome {
            Ok(response) => {
                let results = group_response(response);
                info!(
                    countries = results.country_count,
                    cities = results.total_cities,
                    "search completed"
                );
                self.adopt(results);
                self.criteria = Some(pending.criteria);
                self.phase = Phase::Success;
                Completion::Applied
            }
            Err(err) => {
                warn!(error = %err, "search failed");
                self.phase = Phase::Failed(Failure::Transport(err));
                Completion::Failed
            }
        }
    }

    /// Validate, look up and apply in one step, bounded by the session timeout
    pub async fn submit<L>(&mut self, raw: &RawQuery, lookup: &L) -> &Phase
    where
        L: CityLookup + ?Sized,
    {
        let Ok(pending) = self.begin(raw) else {
            return &self.phase;
        };

        let request = lookup.find_cities(&pending.criteria);
        let outcome = match tokio::time::timeout(self.timeout, request).await {
            Ok(outcome) => outcome,
            Err(_) => Err(LookupError::Timeout(self.timeout)),
        };

        self.complete(pending.ticket, outcome);
        &self.phase
    }

    /// Click on a country header; returns whether the group is now expanded
    pub fn toggle_country(&mut self, country: &str) -> bool {
        self.expansion.toggle(country)
    }

    pub fn expand_all(&mut self) {
        if let Some(results) = &self.results {
            self.expansion.expand_all(results.countries());
        }
    }

    /// Click on a column header of one country's table
    pub fn click_sort(&mut self, country: &str, key: SortKey) -> SortSpec {
        self.sorts.click(country, key)
    }

    /// Apply the same header click to every displayed table
    pub fn click_sort_all(&mut self, key: SortKey) {
        if let Some(results) = &self.results {
            for country in results.countries() {
                self.sorts.click(country, key);
            }
        }
    }

    /// A country's cities in its table's current order, expanded or not
    pub fn table(&self, country: &str) -> Option<Vec<CityRecord>> {
        let group = self.results.as_ref()?.group(country)?;
        Some(sorted_cities(&group.cities, self.sorts.spec_for(country)))
    }

    /// Like [`table`](Self::table) but only for expanded groups
    pub fn visible_table(&self, country: &str) -> Option<Vec<CityRecord>> {
        if !self.expansion.is_expanded(country) {
            return None;
        }
        self.table(country)
    }

    // UI state is kept for countries that are still present and dropped for the rest.
    fn adopt(&mut self, results: GroupedResults) {
        self.expansion.retain(results.countries());
        self.sorts.retain(results.countries());
        for country in results.countries() {
            self.expansion.observe(country);
        }
        self.results = Some(results);
    }
}
