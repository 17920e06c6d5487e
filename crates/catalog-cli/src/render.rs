//! Terminal painting of render plans.
//!
//! Text output is meant for people; JSON output writes one object per frame
//! and line so it can be piped into other tools.

use std::io::{self, Write};
use std::sync::Arc;

use catalog_core::{Frame, Layout, LoadError, RenderPlan, Renderer};
use catalog_ingest::{TextKey, Translations};
use catalog_model::{Category, CategoryFilter, Item, ViewTarget};
use serde_json::json;

/// How frames are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Display labels in one language.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    translations: Arc<Translations>,
    language: String,
}

impl Labels {
    pub fn new(translations: Translations, language: impl Into<String>) -> Self {
        Self {
            translations: Arc::new(translations),
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The same label table read in another language.
    pub fn in_language(&self, language: &str) -> Self {
        Self {
            translations: Arc::clone(&self.translations),
            language: language.to_string(),
        }
    }

    pub fn text(&self, key: TextKey) -> &str {
        self.translations.text(&self.language, key)
    }

    pub fn category(&self, category: Category) -> String {
        self.translations.category_label(&self.language, category)
    }

    pub fn category_filter(&self, filter: CategoryFilter) -> String {
        match filter {
            CategoryFilter::All => self.text(TextKey::FilterAll).to_string(),
            CategoryFilter::Only(category) => self.category(category),
        }
    }

    pub fn subcategory(&self, subcategory: &str) -> String {
        self.translations.subcategory_label(&self.language, subcategory)
    }

    fn item_kind(&self, item: &Item) -> String {
        let category = self.category(item.category);
        match &item.subcategory {
            Some(sub) => format!("{category} / {}", self.subcategory(sub)),
            None => category,
        }
    }
}

/// Write any captured frame.
pub fn write_frame(
    out: &mut impl Write,
    frame: &Frame,
    labels: &Labels,
    format: OutputFormat,
) -> io::Result<()> {
    match frame {
        Frame::Loading => write_loading(out, labels, format),
        Frame::Error(error) => write_error(out, error, labels, format),
        Frame::Plan(plan) => write_plan(out, plan, labels, format),
    }
}

pub fn write_loading(out: &mut impl Write, labels: &Labels, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}\n", labels.text(TextKey::Loading)),
        OutputFormat::Json => write_json_line(out, &json!({ "frame": "loading" })),
    }
}

pub fn write_error(
    out: &mut impl Write,
    error: &LoadError,
    labels: &Labels,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", labels.text(TextKey::LoadFailed))?;
            writeln!(out, "({error})\n")
        }
        OutputFormat::Json => write_json_line(
            out,
            &json!({ "frame": "error", "message": error.to_string() }),
        ),
    }
}

pub fn write_plan(
    out: &mut impl Write,
    plan: &RenderPlan,
    labels: &Labels,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_plan_text(out, plan, labels),
        OutputFormat::Json => {
            let plan = serde_json::to_value(plan)?;
            write_json_line(out, &json!({ "frame": "plan", "plan": plan }))
        }
    }
}

fn write_json_line(out: &mut impl Write, value: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

fn write_plan_text(out: &mut impl Write, plan: &RenderPlan, labels: &Labels) -> io::Result<()> {
    let labels = &labels.in_language(&plan.language);
    writeln!(out, "route: #{}", plan.fragment)?;
    writeln!(out, "layout: {}", plan.layout)?;

    let mut filter = labels.category_filter(plan.filter.category());
    if let Some(sub) = plan.filter.subcategory() {
        filter.push_str(&format!(" > {}", labels.subcategory(sub)));
    }
    if !plan.filter.query().is_empty() {
        filter.push_str(&format!(" | search: {}", plan.filter.query()));
    }
    writeln!(out, "filter: {filter}")?;

    if !plan.subcategories.is_empty() {
        let selected = plan.filter.subcategory();
        let mut options = vec![mark(labels.text(TextKey::SubfilterAll), selected.is_none())];
        options.extend(plan.subcategories.iter().map(|sub| {
            mark(&labels.subcategory(sub), selected == Some(sub.as_str()))
        }));
        writeln!(out, "subfilters: {}", options.join(", "))?;
    }

    if let Some(id) = &plan.not_found {
        writeln!(out, "! {} ({id})", labels.text(TextKey::NotFound))?;
    }

    if plan.is_empty {
        writeln!(out, "{}", labels.text(TextKey::NoResults))?;
    } else if plan.layout == Layout::Map {
        for marker in &plan.markers {
            writeln!(
                out,
                "@ {} ({}, {}) {}",
                marker.title, marker.coordinates.lat, marker.coordinates.lng, marker.color
            )?;
        }
    } else {
        for item in &plan.visible_items {
            writeln!(out, "- {} [{}] ({})", item.title, labels.item_kind(item), item.id)?;
            if plan.layout == Layout::List && !item.short_text.is_empty() {
                writeln!(out, "    {}", item.short_text)?;
            }
        }
    }

    if let (ViewTarget::Detail(_), Some(item)) = (&plan.target, &plan.detail) {
        write_detail(out, item, labels)?;
    }
    writeln!(out)
}

fn write_detail(out: &mut impl Write, item: &Item, labels: &Labels) -> io::Result<()> {
    writeln!(out, "== {} ==", item.title)?;
    writeln!(out, "{}", labels.item_kind(item))?;
    for text in [&item.short_text, &item.long_text] {
        if !text.is_empty() {
            writeln!(out, "{text}")?;
        }
    }
    if let Some(address) = &item.address {
        writeln!(out, "Address: {address}")?;
    }
    if !item.badges.is_empty() {
        writeln!(
            out,
            "{} {}",
            labels.text(TextKey::ActivitiesFeatures),
            item.badges.join(", ")
        )?;
    }
    if let Some(coordinates) = &item.coordinates {
        writeln!(out, "{}: {}", labels.text(TextKey::OpenInMaps), coordinates.maps_url())?;
    }
    if let Some(sheet) = &item.info_sheet_ref {
        writeln!(out, "{}: {sheet}", labels.text(TextKey::InfoSheet))?;
    }
    Ok(())
}

fn mark(label: &str, selected: bool) -> String {
    if selected {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}

/// Streams every frame to a writer as it is painted.
///
/// Write failures stop further output and are returned by
/// [`finish`](Self::finish).
pub struct TerminalRenderer<W: Write> {
    out: W,
    labels: Labels,
    format: OutputFormat,
    failure: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, labels: Labels, format: OutputFormat) -> Self {
        Self {
            out,
            labels,
            format,
            failure: None,
        }
    }

    /// Flush and hand back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.failure.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn paint(&mut self, write: impl FnOnce(&mut W, &Labels, OutputFormat) -> io::Result<()>) {
        if self.failure.is_some() {
            return;
        }
        if let Err(error) = write(&mut self.out, &self.labels, self.format) {
            tracing::error!(%error, "Failed to write frame");
            self.failure = Some(error);
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, plan: &RenderPlan) {
        // Later loading and error frames follow the language last shown.
        if plan.language != self.labels.language() {
            self.labels = self.labels.in_language(&plan.language);
        }
        self.paint(|out, labels, format| write_plan(out, plan, labels, format));
    }

    fn render_error(&mut self, error: &LoadError) {
        self.paint(|out, labels, format| write_error(out, error, labels, format));
    }

    fn render_loading(&mut self) {
        self.paint(|out, labels, format| write_loading(out, labels, format));
    }
}
