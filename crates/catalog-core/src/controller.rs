//! View controller.
//!
//! [`reduce`] is the whole state machine: it takes the current session and
//! one event, and returns the next session plus the effects the host must
//! carry out (paint, touch history, start a load). It performs no I/O, so
//! every transition is atomic and testable without a renderer or runtime.

use std::mem;
use std::sync::Arc;

use catalog_model::{CatalogStore, FilterState, Item, ViewTarget};

use crate::error::LoadError;
use crate::fragment::{fragment_for, parse_fragment, strip_marker};
use crate::message::Event;
use crate::plan::RenderPlan;
use crate::state::{Origin, Pending, Ready, Request, Session};

/// Work the host performs after a transition, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    RenderLoading,
    RenderError(LoadError),
    Render(RenderPlan),
    /// Add a history entry for a user navigation.
    PushRoute(ViewTarget),
    /// Rewrite the current history entry.
    ReplaceRoute(ViewTarget),
    /// Ask the data source for the catalog in `language`.
    StartLoad { language: String },
}

/// Result of one reduction.
#[derive(Debug, Clone)]
pub struct Transition {
    pub session: Session,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn quiet(session: Session) -> Self {
        Self {
            session,
            effects: Vec::new(),
        }
    }
}

/// Apply one event to a session.
pub fn reduce(session: Session, event: Event) -> Transition {
    tracing::debug!(state = session.name(), event = event.name(), "Reducing event");
    match session {
        Session::Loading(pending) => reduce_loading(pending, event),
        Session::Error { error, pending } => reduce_error(error, pending, event),
        Session::Ready(ready) => reduce_ready(ready, event),
    }
}

fn reduce_loading(mut pending: Pending, event: Event) -> Transition {
    match event {
        Event::DataLoaded(_) | Event::DataFailed(_) if pending.requested_language.is_some() => {
            // The outcome is for a language nobody wants any more.
            let language = pending.settle_language().to_string();
            tracing::info!(%language, "Language changed during load; loading again");
            Transition {
                effects: vec![Effect::StartLoad { language }],
                session: Session::Loading(pending),
            }
        }
        Event::DataLoaded(items) => finish_load(pending, items),
        Event::DataFailed(error) => fail(error, pending),
        Event::ReloadRequested => {
            tracing::debug!("Load already in flight");
            Transition::quiet(Session::Loading(pending))
        }
        request => {
            record(&mut pending, request);
            Transition::quiet(Session::Loading(pending))
        }
    }
}

fn reduce_error(error: LoadError, mut pending: Pending, event: Event) -> Transition {
    match event {
        Event::ReloadRequested => {
            tracing::info!("Reloading catalog");
            pending.settle_language();
            start_load(pending)
        }
        Event::DataLoaded(_) | Event::DataFailed(_) => {
            tracing::warn!("Ignoring load outcome outside of loading");
            Transition::quiet(Session::Error { error, pending })
        }
        request => {
            record(&mut pending, request);
            Transition::quiet(Session::Error { error, pending })
        }
    }
}

fn reduce_ready(mut ready: Ready, event: Event) -> Transition {
    match event {
        Event::FilterChanged(filter) => refilter(ready, filter),
        Event::CategorySelected(category) => {
            let filter = ready.filter.with_category(category);
            refilter(ready, filter)
        }
        Event::SubcategorySelected(subcategory) => {
            let filter = ready.filter.with_subcategory(subcategory);
            refilter(ready, filter)
        }
        Event::QueryChanged(query) => {
            let filter = ready.filter.with_query(&query);
            refilter(ready, filter)
        }
        Event::OpenDetail(id) => {
            let previous = ready.target.clone();
            settle(ready, Request::Detail(id), Origin::User, &previous)
        }
        Event::CloseDetail => {
            let previous = ready.target.clone();
            settle(ready, Request::List, Origin::User, &previous)
        }
        Event::RouteChanged(fragment) => {
            let request = Request::from(&parse_fragment(&fragment));
            let previous = ready.target.clone();
            settle(ready, request, Origin::Route(fragment), &previous)
        }
        Event::LayoutChanged(layout) => {
            ready.layout = layout;
            let plan = ready.plan();
            Transition {
                session: Session::Ready(ready),
                effects: vec![Effect::Render(plan)],
            }
        }
        Event::LanguageChanged(language) if language == ready.language => {
            Transition::quiet(Session::Ready(ready))
        }
        Event::LanguageChanged(language) => {
            tracing::info!(from = %ready.language, to = %language, "Switching language");
            reload(ready, language)
        }
        Event::ReloadRequested => {
            tracing::info!("Reloading catalog");
            let language = ready.language.clone();
            reload(ready, language)
        }
        Event::DataLoaded(_) | Event::DataFailed(_) => {
            tracing::warn!("Ignoring load outcome outside of loading");
            Transition::quiet(Session::Ready(ready))
        }
    }
}

/// Remember a request made before the catalog is ready.
fn record(pending: &mut Pending, event: Event) {
    let filter = match event {
        Event::FilterChanged(filter) => filter,
        Event::CategorySelected(category) => pending.base_filter().with_category(category),
        Event::SubcategorySelected(subcategory) => {
            pending.base_filter().with_subcategory(subcategory)
        }
        Event::QueryChanged(query) => pending.base_filter().with_query(&query),
        Event::OpenDetail(id) => {
            pending.request = Some((Request::Detail(id), Origin::User));
            return;
        }
        Event::CloseDetail => {
            pending.request = Some((Request::List, Origin::User));
            return;
        }
        Event::RouteChanged(fragment) => {
            let target = parse_fragment(&fragment);
            pending.request = Some((Request::from(&target), Origin::Route(fragment)));
            pending.route = target;
            return;
        }
        Event::LayoutChanged(layout) => {
            pending.layout = Some(layout);
            return;
        }
        Event::LanguageChanged(language) => {
            pending.requested_language = (language != pending.language).then_some(language);
            return;
        }
        Event::DataLoaded(_) | Event::DataFailed(_) | Event::ReloadRequested => return,
    };
    pending.filter = Some(filter);
    pending.request = Some((Request::List, Origin::User));
}

/// Leave a ready session for a fresh load, remembering what was shown.
fn reload(ready: Ready, language: String) -> Transition {
    let fragment = fragment_for(&ready.target);
    let pending = Pending {
        request: Some((Request::from(&ready.target), Origin::Route(fragment))),
        route: ready.target,
        filter: Some(ready.filter),
        layout: Some(ready.layout),
        language,
        requested_language: None,
    };
    start_load(pending)
}

fn start_load(pending: Pending) -> Transition {
    Transition {
        effects: vec![
            Effect::RenderLoading,
            Effect::StartLoad {
                language: pending.language.clone(),
            },
        ],
        session: Session::Loading(pending),
    }
}

fn fail(error: LoadError, pending: Pending) -> Transition {
    tracing::warn!(%error, "Catalog load failed");
    Transition {
        effects: vec![Effect::RenderError(error.clone())],
        session: Session::Error { error, pending },
    }
}

fn finish_load(pending: Pending, items: Vec<Item>) -> Transition {
    let store = match CatalogStore::new(items) {
        Ok(store) => store,
        Err(err) => return fail(LoadError::from(err), pending),
    };
    tracing::info!(items = store.len(), "Catalog ready");

    let filter = pending.base_filter().sanitized(&store);
    let ready = Ready {
        store: Arc::new(store),
        target: ViewTarget::List,
        filter,
        layout: pending.layout.unwrap_or_default(),
        language: pending.language,
    };
    match pending.request {
        Some((request, origin)) => settle(ready, request, origin, &pending.route),
        None => {
            let plan = ready.plan();
            Transition {
                session: Session::Ready(ready),
                effects: vec![Effect::Render(plan)],
            }
        }
    }
}

fn refilter(mut ready: Ready, filter: FilterState) -> Transition {
    ready.filter = filter.sanitized(&ready.store);
    let previous = ready.target.clone();
    settle(ready, Request::List, Origin::User, &previous)
}

/// Resolve a request against the store, then update history and paint.
///
/// `shown` is the target the address bar currently names. Unknown detail ids
/// fall back to the list with the filter untouched and are reported in the
/// plan.
fn settle(mut ready: Ready, request: Request, origin: Origin, shown: &ViewTarget) -> Transition {
    let (target, not_found) = match request {
        Request::List => (ViewTarget::List, None),
        Request::Detail(id) => {
            // Same reading as a fragment id: trimmed, and blank means the list.
            let id = id.trim();
            if id.is_empty() {
                (ViewTarget::List, None)
            } else if let Some(item) = ready.store.get(id) {
                (ViewTarget::Detail(item.id.clone()), None)
            } else {
                tracing::warn!(id, "Destination not found");
                (ViewTarget::List, Some(id.to_string()))
            }
        }
    };

    let mut effects = Vec::with_capacity(2);
    match origin {
        Origin::User if target != *shown => effects.push(Effect::PushRoute(target.clone())),
        Origin::User => {}
        Origin::Route(fragment) => {
            if strip_marker(&fragment) != fragment_for(&target) {
                effects.push(Effect::ReplaceRoute(target.clone()));
            }
        }
    }

    ready.target = target;
    effects.push(Effect::Render(ready.plan_with(not_found)));
    Transition {
        session: Session::Ready(ready),
        effects,
    }
}

/// Owns the session and feeds it events.
#[derive(Debug, Default)]
pub struct ViewController {
    session: Session,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process one event and return the effects to carry out.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let session = mem::take(&mut self.session);
        let Transition { session, effects } = reduce(session, event);
        self.session = session;
        effects
    }

    pub fn set_filter(&mut self, filter: FilterState) -> Vec<Effect> {
        self.dispatch(Event::FilterChanged(filter))
    }

    pub fn open_detail(&mut self, id: &str) -> Vec<Effect> {
        self.dispatch(Event::OpenDetail(id.to_string()))
    }

    pub fn close_detail(&mut self) -> Vec<Effect> {
        self.dispatch(Event::CloseDetail)
    }

    pub fn route_changed(&mut self, fragment: &str) -> Vec<Effect> {
        self.dispatch(Event::RouteChanged(fragment.to_string()))
    }

    pub fn set_language(&mut self, language: &str) -> Vec<Effect> {
        self.dispatch(Event::LanguageChanged(language.to_string()))
    }

    /// Language for the first load, adopting any switch requested before it.
    pub(crate) fn initial_language(&mut self) -> Option<String> {
        match &mut self.session {
            Session::Loading(pending) => Some(pending.settle_language().to_string()),
            Session::Error { .. } | Session::Ready(_) => None,
        }
    }

    /// Plan for the current state, if the catalog is ready.
    pub fn plan(&self) -> Option<RenderPlan> {
        self.session.ready().map(Ready::plan)
    }
}
