//! Fetch lifecycle of a list view.
//!
//! A [`RequestScope`] numbers the fetches a view starts. Only the response
//! of the most recent fetch is applied; earlier ones, or any response that
//! arrives after the view closed, are discarded.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::error::{ApiError, ApiErrorKind};

/// Generation of one fetch issued through a [`RequestScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct ScopeState {
    latest: AtomicU64,
    closed: AtomicBool,
}

/// Shared generation counter. Clones observe the same generations.
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    state: Arc<ScopeState>,
}

impl RequestScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; every earlier ticket becomes stale.
    pub fn begin(&self) -> Ticket {
        Ticket(self.state.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a response for `ticket` may still be applied.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.state.closed.load(Ordering::SeqCst)
            && self.state.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Invalidate every outstanding ticket for good.
    pub fn close(&self) {
        self.state.closed.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.closed.load(Ordering::SeqCst)
    }

    /// Run `fetch` under a fresh ticket and return its output only if no
    /// later fetch started and the scope is still open when it completes.
    pub async fn run<F, T>(&self, fetch: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let ticket = self.begin();
        let output = fetch.await;
        self.is_current(ticket).then_some(output)
    }
}

/// What a list view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    /// A fetch is in flight.
    Loading,
    /// Records of the last applied fetch.
    Ready { items: Vec<T> },
    /// A create/edit form is open over `items`. `error` holds the message of
    /// the last failed submit.
    Editing {
        items: Vec<T>,
        error: Option<String>,
    },
    /// The last fetch failed.
    Failed { kind: ApiErrorKind, message: String },
}

/// Loading → Ready/Failed → Editing → (submit) → Loading state machine of
/// an admin list screen.
#[derive(Debug)]
pub struct ListScreen<T> {
    state: ScreenState<T>,
    scope: RequestScope,
}

impl<T> Default for ListScreen<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListScreen<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ScreenState::Loading,
            scope: RequestScope::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ScreenState<T> {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> ScreenState<T> {
        self.state
    }

    /// Scope shared with fetches running outside this value.
    #[must_use]
    pub const fn scope(&self) -> &RequestScope {
        &self.scope
    }

    /// A screen already showing `items`, e.g. one opened to submit a form
    /// without listing first.
    #[must_use]
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            state: ScreenState::Ready { items },
            scope: RequestScope::new(),
        }
    }

    /// Items currently displayed, if any.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match &self.state {
            ScreenState::Ready { items } | ScreenState::Editing { items, .. } => items,
            ScreenState::Loading | ScreenState::Failed { .. } => &[],
        }
    }

    /// Enter `Loading` and hand out the ticket for the new fetch.
    pub fn begin_fetch(&mut self) -> Ticket {
        self.state = ScreenState::Loading;
        self.scope.begin()
    }

    /// Apply the outcome of fetch `ticket`. Returns `false` and leaves the
    /// state alone if the ticket is stale or the screen closed.
    pub fn finish_fetch(&mut self, ticket: Ticket, result: Result<Vec<T>, ApiError>) -> bool {
        if !self.scope.is_current(ticket) {
            tracing::debug!(?ticket, "discarding stale list response");
            return false;
        }
        self.state = match result {
            Ok(items) => ScreenState::Ready { items },
            Err(error) => ScreenState::Failed {
                kind: error.kind(),
                message: error.message(),
            },
        };
        true
    }

    /// Fetch and apply in one step.
    pub async fn refresh<F, Fut>(&mut self, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, ApiError>>,
    {
        let ticket = self.begin_fetch();
        let result = fetch().await;
        self.finish_fetch(ticket, result)
    }

    /// Open the form. Allowed from `Ready` and `Failed`; returns whether the
    /// state changed.
    pub fn begin_edit(&mut self) -> bool {
        let items = match std::mem::replace(&mut self.state, ScreenState::Loading) {
            ScreenState::Ready { items } => items,
            ScreenState::Failed { .. } => Vec::new(),
            other => {
                self.state = other;
                return false;
            }
        };
        self.state = ScreenState::Editing { items, error: None };
        true
    }

    /// Close the form without submitting.
    pub fn cancel_edit(&mut self) {
        if let ScreenState::Editing { items, .. } =
            std::mem::replace(&mut self.state, ScreenState::Loading)
        {
            self.state = ScreenState::Ready { items };
        }
    }

    /// A submit failed: stay in the form and show `error`.
    pub fn submit_failed(&mut self, error: &ApiError) {
        if let ScreenState::Editing { error: slot, .. } = &mut self.state {
            *slot = Some(error.message());
        }
    }

    /// A submit succeeded: close the form and start the refetch.
    pub fn submit_succeeded(&mut self) -> Ticket {
        self.begin_fetch()
    }

    /// The view went away; late responses are dropped.
    pub fn close(&self) {
        self.scope.close();
    }
}
