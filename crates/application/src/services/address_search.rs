//! Address search session
//!
//! Owns the query text and the current suggestion set. Every qualifying
//! keystroke issues one autocomplete request; only the response to the most
//! recently issued query is applied ("latest query wins"). There is no
//! debounce, so fast typing produces one request per keystroke.

use std::sync::Arc;

use domain::Suggestion;
use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::AutocompletePort;

/// Queries with this many characters or fewer never reach the provider
pub const MAX_SILENT_QUERY_CHARS: usize = 2;

/// State of the search workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No query text
    Empty,
    /// Request in flight for the current query
    Typing,
    /// Suggestions available for the current query
    SuggestionsLoaded,
    /// Query too short, or the provider had no results
    NoSuggestions,
    /// Provider failed for the current query
    Error,
    /// A suggestion was picked and handed to the resolver
    Selected,
}

/// Result of a query change
#[derive(Debug)]
pub enum SearchOutcome {
    /// Query too short; suggestions cleared without a request
    Cleared,
    /// Suggestions for the current query (possibly empty)
    Loaded(Vec<Suggestion>),
    /// The query changed while the request was in flight; response dropped
    Stale,
    /// Provider failed; suggestions left empty
    Failed(ApplicationError),
}

#[derive(Debug)]
struct SearchInner {
    query: String,
    suggestions: Vec<Suggestion>,
    state: SearchState,
    generation: u64,
    last_error: Option<String>,
}

impl SearchInner {
    /// Invalidate any in-flight request and return the new generation
    fn bump(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    fn find(&self, id: &str) -> Result<Suggestion, ApplicationError> {
        self.suggestions
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| ApplicationError::NotFound(format!("suggestion {id}")))
    }

    fn select(&mut self, suggestion: &Suggestion) {
        self.bump();
        self.query.clone_from(&suggestion.label);
        self.suggestions.clear();
        self.last_error = None;
        self.state = SearchState::Selected;
        debug!(label = %suggestion.label, "Suggestion selected");
    }
}

/// Autocomplete workflow over a single query field
pub struct AddressSearchSession {
    provider: Arc<dyn AutocompletePort>,
    inner: Mutex<SearchInner>,
}

impl std::fmt::Debug for AddressSearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressSearchSession")
            .field("inner", &*self.inner.lock())
            .finish_non_exhaustive()
    }
}

impl AddressSearchSession {
    /// Create a new session backed by an autocomplete provider
    pub fn new(provider: Arc<dyn AutocompletePort>) -> Self {
        Self {
            provider,
            inner: Mutex::new(SearchInner {
                query: String::new(),
                suggestions: Vec::new(),
                state: SearchState::Empty,
                generation: 0,
                last_error: None,
            }),
        }
    }

    /// Handle a change of the query text
    ///
    /// Short queries clear the suggestion set synchronously. Longer ones
    /// issue an autocomplete request; if another query change happens before
    /// the response arrives, the response is discarded.
    #[instrument(skip(self))]
    pub async fn on_query_changed(&self, text: &str) -> SearchOutcome {
        let generation = {
            let mut inner = self.inner.lock();
            let generation = inner.bump();
            inner.query = text.to_string();
            inner.suggestions.clear();
            inner.last_error = None;

            if text.chars().count() <= MAX_SILENT_QUERY_CHARS {
                inner.state = if text.is_empty() {
                    SearchState::Empty
                } else {
                    SearchState::NoSuggestions
                };
                return SearchOutcome::Cleared;
            }

            inner.state = SearchState::Typing;
            generation
        };

        let result = self.provider.autocomplete(text).await;

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            debug!(generation, current = inner.generation, "Discarding stale suggestions");
            return SearchOutcome::Stale;
        }

        match result {
            Ok(suggestions) => {
                debug!(count = suggestions.len(), "Suggestions loaded");
                inner.state = if suggestions.is_empty() {
                    SearchState::NoSuggestions
                } else {
                    SearchState::SuggestionsLoaded
                };
                inner.suggestions.clone_from(&suggestions);
                SearchOutcome::Loaded(suggestions)
            },
            Err(e) => {
                warn!(error = %e, "Autocomplete request failed");
                inner.state = SearchState::Error;
                inner.last_error = Some(e.to_string());
                SearchOutcome::Failed(e)
            },
        }
    }

    /// Look up a suggestion in the current set without selecting it
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if the id is not in the current
    /// suggestion set.
    pub fn find_suggestion(&self, id: &str) -> Result<Suggestion, ApplicationError> {
        self.inner.lock().find(id)
    }

    /// Pick a suggestion from the current set
    ///
    /// Clears the suggestion set, shows the suggestion's label as the query
    /// and returns the suggestion so its id can be resolved.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if the id is not in the current
    /// suggestion set; the session is left unchanged.
    #[instrument(skip(self))]
    pub fn on_suggestion_selected(&self, id: &str) -> Result<Suggestion, ApplicationError> {
        let mut inner = self.inner.lock();
        let suggestion = inner.find(id)?;
        inner.select(&suggestion);
        Ok(suggestion)
    }

    /// Mark a previously looked-up suggestion as selected
    ///
    /// Used once the suggestion's place has been resolved, when the set may
    /// already have been replaced by a newer query.
    pub fn commit_selection(&self, suggestion: &Suggestion) {
        self.inner.lock().select(suggestion);
    }

    /// Drop the suggestion set and invalidate any in-flight request
    ///
    /// The query text is kept.
    pub fn clear_suggestions(&self) {
        let mut inner = self.inner.lock();
        inner.bump();
        inner.suggestions.clear();
        inner.last_error = None;
        inner.state = if inner.query.is_empty() {
            SearchState::Empty
        } else {
            SearchState::NoSuggestions
        };
    }

    /// Current query text
    pub fn query(&self) -> String {
        self.inner.lock().query.clone()
    }

    /// Current suggestion set
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.inner.lock().suggestions.clone()
    }

    /// Current workflow state
    pub fn state(&self) -> SearchState {
        self.inner.lock().state
    }

    /// Message of the last provider failure for the current query
    pub fn last_error(&self) -> Option<String> {
        self.inner.lock().last_error.clone()
    }
}
