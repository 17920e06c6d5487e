//! Catalog browser core.
//!
//! Holds the view/filter state machine and everything around it that is not
//! painting:
//!
//! - [`reduce`] / [`ViewController`]: the session state machine
//! - [`Router`]: keeps a [`History`] of URL fragments in step with the view
//! - [`RenderPlan`]: what a [`Renderer`] paints for one frame
//! - [`Browser`]: the event loop that wires a [`DataSource`] to all of the above
//!
//! # Example
//!
//! ```
//! use catalog_core::{Browser, MemoryHistory, RecordingRenderer, StaticSource};
//! use catalog_model::{Category, Item, ViewTarget};
//!
//! let items = vec![Item::new("salto", Category::Nature, "Laja Falls").unwrap()];
//! let mut browser = Browser::new(
//!     StaticSource::items(items),
//!     RecordingRenderer::new(),
//!     MemoryHistory::starting_at("#dest/salto"),
//! );
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! runtime.block_on(browser.start());
//!
//! let plan = browser.renderer().last_plan().unwrap();
//! assert!(matches!(plan.target, ViewTarget::Detail(_)));
//! ```

mod controller;
mod error;
mod fragment;
mod history;
mod message;
mod plan;
mod renderer;
mod router;
mod runtime;
mod source;
mod state;

// === Errors ===
pub use error::LoadError;

// === State Machine ===
pub use controller::{Effect, Transition, ViewController, reduce};
pub use message::Event;
pub use state::{Origin, Pending, Ready, Request, Session};

// === Routing ===
pub use fragment::{DETAIL_PREFIX, fragment_for, parse_fragment};
pub use history::{EntryState, History, MemoryHistory};
pub use router::Router;

// === Rendering ===
pub use plan::{Layout, MapMarker, RenderPlan};
pub use renderer::{Frame, RecordingRenderer, Renderer};

// === Runtime ===
pub use runtime::Browser;
pub use source::{DataSource, JsonFileSource, StaticSource};
