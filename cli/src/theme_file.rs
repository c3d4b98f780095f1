use std::{fs, path::Path};

use anyhow::{Context, Result};
use mineterm_core::Theme;
use serde::Deserialize;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Plugin {
    #[default]
    Default,
    Fancy,
}

/// On-disk display plugin selection.
///
/// ```toml
/// plugin = "fancy"
/// mine-symbol = "☢"
/// flag-symbol = "⚑"
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ThemeFile {
    #[serde(default)]
    plugin: Plugin,
    mine_symbol: Option<char>,
    flag_symbol: Option<char>,
}

impl From<ThemeFile> for Theme {
    fn from(file: ThemeFile) -> Self {
        match file.plugin {
            Plugin::Default => Theme::Plain,
            Plugin::Fancy => Theme::fancy(file.mine_symbol, file.flag_symbol),
        }
    }
}

pub fn parse(text: &str) -> Result<Theme> {
    let file: ThemeFile = toml::from_str(text).context("malformed theme file")?;
    Ok(file.into())
}

pub fn load(path: &Path) -> Result<Theme> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read theme file {}", path.display()))?;
    let theme = parse(&text).with_context(|| format!("in theme file {}", path.display()))?;
    log::debug!("loaded theme {:?} from {}", theme, path.display());
    Ok(theme)
}
