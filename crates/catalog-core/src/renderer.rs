//! Painting seam.

use crate::error::LoadError;
use crate::plan::RenderPlan;

/// Paints frames. Implementations hold no catalog state of their own.
pub trait Renderer {
    fn render(&mut self, plan: &RenderPlan);

    fn render_error(&mut self, error: &LoadError);

    fn render_loading(&mut self);
}

/// One painted frame, as captured by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Loading,
    Error(LoadError),
    Plan(Box<RenderPlan>),
}

/// Keeps every frame it is asked to paint.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    frames: Vec<Frame>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// The most recent plan, skipping loading and error frames.
    pub fn last_plan(&self) -> Option<&RenderPlan> {
        self.frames.iter().rev().find_map(|frame| match frame {
            Frame::Plan(plan) => Some(plan.as_ref()),
            _ => None,
        })
    }

    /// Plans in paint order.
    pub fn plans(&self) -> impl Iterator<Item = &RenderPlan> {
        self.frames.iter().filter_map(|frame| match frame {
            Frame::Plan(plan) => Some(plan.as_ref()),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, plan: &RenderPlan) {
        self.frames.push(Frame::Plan(Box::new(plan.clone())));
    }

    fn render_error(&mut self, error: &LoadError) {
        self.frames.push(Frame::Error(error.clone()));
    }

    fn render_loading(&mut self) {
        self.frames.push(Frame::Loading);
    }
}
