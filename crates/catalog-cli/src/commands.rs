use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catalog_cli::render::{Labels, OutputFormat, TerminalRenderer, write_frame};
use catalog_cli::script::{parse_script, replay};
use catalog_cli::settings::Settings;
use catalog_core::{
    Browser, Frame, JsonFileSource, Layout, MemoryHistory, RecordingRenderer,
};
use catalog_ingest::{Translations, load_catalog};
use catalog_model::{CatalogStore, FilterState};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::cli::{OutputArgs, ReplayArgs, ShowArgs, SourceArgs};

/// Catalog location and labelling after merging flags with settings.
struct Source {
    data: PathBuf,
    language: String,
    labels: Labels,
}

impl Source {
    fn resolve(args: &SourceArgs, settings: &Settings) -> Result<Self> {
        let data = args
            .data
            .clone()
            .or_else(|| settings.general.data_path.clone())
            .context("no destination document given and no data_path in settings")?;
        let language = args
            .language
            .clone()
            .unwrap_or_else(|| settings.general.language.clone());

        let i18n = args.i18n.as_deref().or(settings.general.i18n_path.as_deref());
        let translations = match i18n {
            Some(path) => load_labels(path, &language)?,
            None => Translations::default(),
        };

        Ok(Self {
            labels: Labels::new(translations, language.clone()),
            data,
            language,
        })
    }

    fn data_source(&self) -> JsonFileSource {
        JsonFileSource::new(&self.data)
    }
}

fn load_labels(path: &Path, language: &str) -> Result<Translations> {
    let translations = Translations::load(path)
        .with_context(|| format!("load label table {}", path.display()))?;
    if !translations.has_language(language) {
        warn!(language, path = %path.display(), "Label table has no entries for language");
    }
    Ok(translations)
}

fn output_choice(args: &OutputArgs, settings: &Settings) -> (Layout, OutputFormat) {
    let layout = args.layout.map_or(settings.display.layout, Layout::from);
    let format = if args.json || settings.display.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    (layout, format)
}

fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .context("start async runtime")
}

/// Print the view reached from a fragment and filter. Returns whether the load failed.
pub fn run_show(args: &ShowArgs, settings: &Settings) -> Result<bool> {
    let source = Source::resolve(&args.source, settings)?;
    let (layout, format) = output_choice(&args.output, settings);

    let mut browser = Browser::new(
        source.data_source(),
        RecordingRenderer::new(),
        MemoryHistory::starting_at(&args.fragment),
    );
    let filter = (args.category.is_some() || args.subcategory.is_some() || args.query.is_some())
        .then(|| {
            FilterState::new(
                args.category.unwrap_or_default(),
                args.subcategory.clone(),
                args.query.as_deref().unwrap_or_default(),
            )
        });
    if args.subcategory.is_some() && args.category.is_none() {
        warn!("--subcategory is ignored without --category");
    }

    // Requests made before start are held until the catalog is ready.
    runtime()?.block_on(async {
        browser.set_layout(layout).await;
        browser.set_language(&source.language).await;
        if let Some(filter) = filter {
            browser.set_filter(filter).await;
        }
        browser.start().await;
    });

    let Some(frame) = browser.renderer().last() else {
        return Ok(false);
    };
    let mut out = io::stdout().lock();
    write_frame(&mut out, frame, &source.labels, format).context("write output")?;
    out.flush().context("write output")?;
    Ok(matches!(frame, Frame::Error(_)))
}

/// Replay a script and stream every frame. Returns whether the session ended in error.
pub fn run_replay(args: &ReplayArgs, settings: &Settings) -> Result<bool> {
    let source = Source::resolve(&args.source, settings)?;
    let (layout, format) = output_choice(&args.output, settings);

    let text = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read script {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("read script from stdin")?,
    };
    let commands = parse_script(&text)?;
    info!(commands = commands.len(), "Replaying script");

    let renderer = TerminalRenderer::new(io::stdout().lock(), source.labels.clone(), format);
    let mut browser = Browser::new(
        source.data_source(),
        renderer,
        MemoryHistory::starting_at(&args.fragment),
    );
    runtime()?.block_on(async {
        browser.set_layout(layout).await;
        browser.set_language(&source.language).await;
        browser.start().await;
        replay(&mut browser, &commands).await;
    });

    let errored = browser.controller().session().error().is_some();
    browser.into_renderer().finish().context("write output")?;
    Ok(errored)
}

pub fn run_categories(args: &SourceArgs, settings: &Settings) -> Result<()> {
    let source = Source::resolve(args, settings)?;
    let items = load_catalog(&source.data, &source.language)
        .with_context(|| format!("load destinations from {}", source.data.display()))?;
    let store = CatalogStore::new(items).context("build catalog")?;
    println!("{}", categories_table(&store, &source.labels));
    Ok(())
}

fn categories_table(store: &CatalogStore, labels: &Labels) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Label"),
        header_cell("Items"),
        header_cell("Subcategories"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for (category, count) in store.category_counts() {
        let subcategories = store
            .subcategories(category)
            .into_iter()
            .map(|sub| labels.subcategory(sub))
            .collect::<Vec<_>>();
        table.add_row(vec![
            Cell::new(category.as_str()),
            Cell::new(labels.category(category)),
            Cell::new(count),
            Cell::new(if subcategories.is_empty() {
                "-".to_string()
            } else {
                subcategories.join(", ")
            }),
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use catalog_model::{Category, Item};

    use super::*;

    #[test]
    fn categories_table_lists_non_empty_categories() {
        let store = CatalogStore::new(vec![
            Item::new("a", Category::Nature, "A")
                .unwrap()
                .with_subcategory("lakes"),
            Item::new("b", Category::Nature, "B")
                .unwrap()
                .with_subcategory("waterfalls"),
            Item::new("c", Category::Urban, "C").unwrap(),
        ])
        .unwrap();

        let rendered = categories_table(&store, &Labels::default()).to_string();
        assert!(rendered.contains("Lakes, Waterfalls"));
        assert!(rendered.contains("urban"));
        assert!(!rendered.contains("heritage"));
    }
}
