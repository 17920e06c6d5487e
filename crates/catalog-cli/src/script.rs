//! Replay scripts: one browser action per line.
//!
//! ```text
//! # comment
//! category nature
//! sub lakes          (or `sub all` to clear)
//! search laguna      (no argument clears the search)
//! open salto-del-laja
//! close
//! back
//! forward
//! visit #dest/museo
//! layout map
//! lang es
//! reload
//! ```

use std::str::FromStr;

use anyhow::{Result, anyhow};
use catalog_core::{Browser, DataSource, Layout, MemoryHistory, Renderer};
use catalog_model::CategoryFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Category(CategoryFilter),
    Subcategory(Option<String>),
    Search(String),
    Open(String),
    Close,
    Back,
    Forward,
    Visit(String),
    Layout(Layout),
    Language(String),
    Reload,
}

impl FromStr for ScriptCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, argument) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let required = |what: &str| {
            if argument.is_empty() {
                Err(format!("`{verb}` needs {what}"))
            } else {
                Ok(argument.to_string())
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "category" => required("a category")?
                .parse()
                .map(Self::Category)
                .map_err(|err| format!("{err}")),
            "sub" => {
                let sub = required("a subcategory")?;
                let cleared = sub.eq_ignore_ascii_case("all") || sub.eq_ignore_ascii_case("none");
                Ok(Self::Subcategory((!cleared).then_some(sub)))
            }
            "search" => Ok(Self::Search(argument.to_string())),
            "open" => required("an id").map(Self::Open),
            "close" => Ok(Self::Close),
            "back" => Ok(Self::Back),
            "forward" => Ok(Self::Forward),
            "visit" => Ok(Self::Visit(argument.to_string())),
            "layout" => required("a layout")?.parse().map(Self::Layout),
            "lang" => required("a language code").map(Self::Language),
            "reload" => Ok(Self::Reload),
            other => Err(format!("unknown command `{other}`")),
        }
    }
}

/// Parse a whole script. Blank lines and lines starting with `#` are skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptCommand>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            line.parse()
                .map_err(|reason| anyhow!("line {}: {reason}", index + 1))
        })
        .collect()
}

/// Feed commands into a browser one at a time.
pub async fn replay<S, R>(browser: &mut Browser<S, R, MemoryHistory>, commands: &[ScriptCommand])
where
    S: DataSource,
    R: Renderer,
{
    for command in commands {
        tracing::debug!(?command, "Replaying command");
        match command {
            ScriptCommand::Category(category) => browser.select_category(*category).await,
            ScriptCommand::Subcategory(sub) => browser.select_subcategory(sub.clone()).await,
            ScriptCommand::Search(query) => browser.search(query).await,
            ScriptCommand::Open(id) => browser.open_detail(id).await,
            ScriptCommand::Close => browser.close_detail().await,
            ScriptCommand::Back => {
                if !browser.back().await {
                    tracing::info!("Back would leave the page; ignored");
                }
            }
            ScriptCommand::Forward => {
                browser.forward().await;
            }
            ScriptCommand::Visit(fragment) => browser.visit(fragment).await,
            ScriptCommand::Layout(layout) => browser.set_layout(*layout).await,
            ScriptCommand::Language(language) => browser.set_language(language).await,
            ScriptCommand::Reload => browser.reload().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog_model::Category;

    use super::*;

    #[test]
    fn parses_every_command() {
        let script = "\
# tour
category Nature
sub lakes
sub all
search  Laguna del Laja
search
open salto
close
back
forward
visit #dest/museo
layout MAP
lang es
reload
";
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                ScriptCommand::Category(CategoryFilter::Only(Category::Nature)),
                ScriptCommand::Subcategory(Some("lakes".into())),
                ScriptCommand::Subcategory(None),
                ScriptCommand::Search("Laguna del Laja".into()),
                ScriptCommand::Search(String::new()),
                ScriptCommand::Open("salto".into()),
                ScriptCommand::Close,
                ScriptCommand::Back,
                ScriptCommand::Forward,
                ScriptCommand::Visit("#dest/museo".into()),
                ScriptCommand::Layout(Layout::Map),
                ScriptCommand::Language("es".into()),
                ScriptCommand::Reload,
            ]
        );
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse_script("close\n\nfly away\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: unknown command `fly`");

        let err = parse_script("open").unwrap_err();
        assert_eq!(err.to_string(), "line 1: `open` needs an id");

        let err = parse_script("lang").unwrap_err();
        assert_eq!(err.to_string(), "line 1: `lang` needs a language code");

        let err = parse_script("category space").unwrap_err();
        assert!(err.to_string().starts_with("line 1: "));
    }
}
