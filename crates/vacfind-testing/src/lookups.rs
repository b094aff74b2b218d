//! In-process lookup stubs for driving a `SearchSession` without a network.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use vacfind_engine::SearchCriteria;
use vacfind_runtime::{CityLookup, LookupError};
use vacfind_types::LookupResponse;

/// Answers every request with the same response and remembers what it was asked
pub struct StaticLookup {
    response: LookupResponse,
    requests: Mutex<Vec<SearchCriteria>>,
}

impl StaticLookup {
    pub fn new(response: LookupResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SearchCriteria> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock poisoned").len()
    }
}

#[async_trait]
impl CityLookup for StaticLookup {
    async fn find_cities(&self, criteria: &SearchCriteria) -> Result<LookupResponse, LookupError> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(criteria.clone());
        Ok(self.response.clone())
    }
}

/// Fails every request with the given error
pub struct FailingLookup(pub LookupError);

#[async_trait]
impl CityLookup for FailingLookup {
    async fn find_cities(&self, _criteria: &SearchCriteria) -> Result<LookupResponse, LookupError> {
        Err(self.0.clone())
    }
}

/// Replays a queue of outcomes in order; an exhausted script is a transport failure
pub struct ScriptedLookup {
    outcomes: Mutex<VecDeque<Result<LookupResponse, LookupError>>>,
}

impl ScriptedLookup {
    pub fn new(outcomes: impl IntoIterator<Item = Result<LookupResponse, LookupError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
        }
    }
}

#[async_trait]
impl CityLookup for ScriptedLookup {
    async fn find_cities(&self, _criteria: &SearchCriteria) -> Result<LookupResponse, LookupError> {
        self.outcomes
            .lock()
            .expect("outcomes lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(LookupError::Transport("script exhausted".to_string())))
    }
}

/// Sleeps before answering; pair with a short session timeout
pub struct SlowLookup {
    delay: Duration,
    response: LookupResponse,
}

impl SlowLookup {
    pub fn new(delay: Duration, response: LookupResponse) -> Self {
        Self { delay, response }
    }
}

#[async_trait]
impl CityLookup for SlowLookup {
    async fn find_cities(&self, _criteria: &SearchCriteria) -> Result<LookupResponse, LookupError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.response.clone())
    }
}
