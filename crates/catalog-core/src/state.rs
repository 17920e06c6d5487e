//! Session state.
//!
//! ```text
//!            DataLoaded                      ReloadRequested
//! Loading ─────────────▶ Ready ────────────────────────────▶ Loading
//!    │                    ▲ │ filter / open / close / route / layout
//!    │ DataFailed         └─┘
//!    ▼
//!  Error ──ReloadRequested──▶ Loading
//! ```
//!
//! While loading (or failed), navigation and filter requests are remembered in
//! [`Pending`]; the last request of each kind wins and is applied once data
//! arrives. A language switch is a load of its own: the catalog text is
//! resolved for one language at a time.

use std::sync::Arc;

use catalog_ingest::DEFAULT_LANGUAGE;
use catalog_model::{CatalogStore, FilterState, ViewTarget};

use crate::error::LoadError;
use crate::plan::{Layout, RenderPlan};

/// A requested view target. Detail ids are kept raw until they can be
/// checked against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Detail(String),
}

impl From<&ViewTarget> for Request {
    fn from(target: &ViewTarget) -> Self {
        match target {
            ViewTarget::List => Self::List,
            ViewTarget::Detail(id) => Self::Detail(id.to_string()),
        }
    }
}

/// Where a request came from, which decides how the history is updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A user intent. Changes the history with a push.
    User,
    /// A fragment reported by the router. Only canonicalised with a replace.
    Route(String),
}

/// Requests recorded before the catalog is ready.
#[derive(Debug, Clone, PartialEq)]
pub struct Pending {
    pub(crate) filter: Option<FilterState>,
    pub(crate) layout: Option<Layout>,
    pub(crate) request: Option<(Request, Origin)>,
    /// Target named by the address bar as last reported.
    pub(crate) route: ViewTarget,
    /// Language of the load in flight, or of the next one after a failure.
    pub(crate) language: String,
    /// A different language asked for since that load started.
    pub(crate) requested_language: Option<String>,
}

impl Default for Pending {
    fn default() -> Self {
        Self {
            filter: None,
            layout: None,
            request: None,
            route: ViewTarget::List,
            language: DEFAULT_LANGUAGE.to_string(),
            requested_language: None,
        }
    }
}

impl Pending {
    pub fn filter(&self) -> Option<&FilterState> {
        self.filter.as_ref()
    }

    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    pub fn request(&self) -> Option<&Request> {
        self.request.as_ref().map(|(request, _)| request)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn requested_language(&self) -> Option<&str> {
        self.requested_language.as_deref()
    }

    /// Adopt the last requested language, returning the one to load next.
    pub(crate) fn settle_language(&mut self) -> &str {
        if let Some(language) = self.requested_language.take() {
            self.language = language;
        }
        &self.language
    }

    pub(crate) fn base_filter(&self) -> FilterState {
        self.filter.clone().unwrap_or_default()
    }
}

/// A loaded catalog and what is being shown of it.
#[derive(Debug, Clone)]
pub struct Ready {
    pub(crate) store: Arc<CatalogStore>,
    pub(crate) target: ViewTarget,
    pub(crate) filter: FilterState,
    pub(crate) layout: Layout,
    /// Language the catalog text was resolved for.
    pub(crate) language: String,
}

impl Ready {
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn target(&self) -> &ViewTarget {
        &self.target
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Plan for the current state with no pending not-found report.
    pub fn plan(&self) -> RenderPlan {
        self.plan_with(None)
    }

    pub(crate) fn plan_with(&self, not_found: Option<String>) -> RenderPlan {
        RenderPlan::build(
            &self.store,
            &self.target,
            &self.filter,
            self.layout,
            &self.language,
            not_found,
        )
    }
}

#[derive(Debug, Clone)]
pub enum Session {
    Loading(Pending),
    Error { error: LoadError, pending: Pending },
    Ready(Ready),
}

impl Default for Session {
    fn default() -> Self {
        Self::Loading(Pending::default())
    }
}

impl Session {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading(_) => "loading",
            Self::Error { .. } => "error",
            Self::Ready(_) => "ready",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    pub fn ready(&self) -> Option<&Ready> {
        match self {
            Self::Ready(ready) => Some(ready),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Error { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&Pending> {
        match self {
            Self::Loading(pending) | Self::Error { pending, .. } => Some(pending),
            Self::Ready(_) => None,
        }
    }
}
