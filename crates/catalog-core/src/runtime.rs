//! Event loop tying controller, router, renderer and data source together.

use catalog_model::{CategoryFilter, FilterState};

use crate::controller::{Effect, ViewController};
use crate::history::{History, MemoryHistory};
use crate::message::Event;
use crate::plan::Layout;
use crate::renderer::Renderer;
use crate::router::Router;
use crate::source::DataSource;

/// A running catalog browser.
///
/// Events are handled strictly one at a time: [`dispatch`](Self::dispatch)
/// takes `&mut self` and only returns once every effect, including any load
/// it started, has been carried out.
pub struct Browser<S, R, H>
where
    S: DataSource,
    R: Renderer,
    H: History,
{
    controller: ViewController,
    router: Router<H>,
    renderer: R,
    source: S,
}

impl<S, R, H> Browser<S, R, H>
where
    S: DataSource,
    R: Renderer,
    H: History,
{
    pub fn new(source: S, renderer: R, history: H) -> Self {
        Self {
            controller: ViewController::new(),
            router: Router::new(history),
            renderer,
            source,
        }
    }

    /// Paint the loading frame, adopt the current fragment and load.
    pub async fn start(&mut self) {
        self.renderer.render_loading();
        let fragment = self.router.history().fragment();
        tracing::info!(fragment = %fragment, "Starting catalog browser");
        let effects = self.controller.route_changed(&fragment);
        let language = self.controller.initial_language();
        self.run(effects, language).await;
    }

    /// Process one event.
    pub async fn dispatch(&mut self, event: Event) {
        let effects = self.controller.dispatch(event);
        self.run(effects, None).await;
    }

    pub async fn set_filter(&mut self, filter: FilterState) {
        self.dispatch(Event::FilterChanged(filter)).await;
    }

    pub async fn select_category(&mut self, category: CategoryFilter) {
        self.dispatch(Event::CategorySelected(category)).await;
    }

    pub async fn select_subcategory(&mut self, subcategory: Option<String>) {
        self.dispatch(Event::SubcategorySelected(subcategory)).await;
    }

    pub async fn search(&mut self, query: &str) {
        self.dispatch(Event::QueryChanged(query.to_string())).await;
    }

    pub async fn open_detail(&mut self, id: &str) {
        self.dispatch(Event::OpenDetail(id.to_string())).await;
    }

    pub async fn close_detail(&mut self) {
        self.dispatch(Event::CloseDetail).await;
    }

    pub async fn set_layout(&mut self, layout: Layout) {
        self.dispatch(Event::LayoutChanged(layout)).await;
    }

    /// Show the catalog in another language. Before [`start`](Self::start)
    /// this picks the language of the first load.
    pub async fn set_language(&mut self, language: &str) {
        self.dispatch(Event::LanguageChanged(language.to_string())).await;
    }

    pub async fn reload(&mut self) {
        self.dispatch(Event::ReloadRequested).await;
    }

    /// The host reports a fragment change; echoes of the router's own
    /// navigation are dropped.
    pub async fn fragment_changed(&mut self, fragment: &str) {
        if self.router.notify(fragment).is_some() {
            self.dispatch(Event::RouteChanged(fragment.to_string())).await;
        }
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub fn router(&self) -> &Router<H> {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router<H> {
        &mut self.router
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Carry out effects; loads feed their outcome back in until none is asked for.
    async fn run(&mut self, mut effects: Vec<Effect>, mut load: Option<String>) {
        loop {
            if let Some(language) = self.apply(effects) {
                load = Some(language);
            }
            let Some(language) = load.take() else {
                return;
            };
            tracing::debug!(%language, "Loading catalog");
            let event = match self.source.load(&language).await {
                Ok(items) => Event::DataLoaded(items),
                Err(error) => Event::DataFailed(error),
            };
            effects = self.controller.dispatch(event);
        }
    }

    /// Returns the language of the load requested, if any.
    fn apply(&mut self, effects: Vec<Effect>) -> Option<String> {
        let mut load = None;
        for effect in effects {
            match effect {
                Effect::RenderLoading => self.renderer.render_loading(),
                Effect::RenderError(error) => self.renderer.render_error(&error),
                Effect::Render(plan) => self.renderer.render(&plan),
                Effect::PushRoute(target) => self.router.navigate_to(&target),
                Effect::ReplaceRoute(target) => self.router.replace_with(&target),
                Effect::StartLoad { language } => load = Some(language),
            }
        }
        load
    }
}

impl<S, R> Browser<S, R, MemoryHistory>
where
    S: DataSource,
    R: Renderer,
{
    /// Press the back button.
    pub async fn back(&mut self) -> bool {
        let moved = self.router.history_mut().back();
        self.drain_history().await;
        moved
    }

    /// Press the forward button.
    pub async fn forward(&mut self) -> bool {
        let moved = self.router.history_mut().forward();
        self.drain_history().await;
        moved
    }

    /// Type or follow a link to `fragment`.
    pub async fn visit(&mut self, fragment: &str) {
        self.router.history_mut().visit(fragment);
        self.drain_history().await;
    }

    async fn drain_history(&mut self) {
        let changes = self.router.history_mut().take_changes();
        for fragment in changes {
            self.fragment_changed(&fragment).await;
        }
    }
}
