//! Sprites read from a directory of text files.
//!
//! `<root>/<name>.txt` holds the art, one line per row, spaces transparent.
//! An optional first line sets the colours:
//!
//! ```text
//! #! fg=yellow bg=none
//! ^O>
//! ```
//!
//! Colours use ratatui's names (`red`, `lightblue`, `#rrggbb`, ...).

use super::{AssetError, AssetSource, Sprite};
use ratatui::style::Color;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

const HEADER_PREFIX: &str = "#!";

pub struct SpriteDir {
    root: PathBuf,
    fallback: Option<Box<dyn AssetSource>>,
}

impl SpriteDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: None,
        }
    }

    /// Consult `fallback` for names with no file in the directory.
    pub fn with_fallback(mut self, fallback: Box<dyn AssetSource>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.txt", name))
    }
}

impl AssetSource for SpriteDir {
    fn load(&self, name: &str) -> Result<Sprite, AssetError> {
        let path = self.path_for(name);
        match fs::read_to_string(&path) {
            Ok(text) => parse_sprite(name, &text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => match &self.fallback {
                Some(fallback) => {
                    debug!(sprite = name, "not in sprite dir, using fallback");
                    fallback.load(name)
                }
                None => Err(AssetError::NotFound(name.to_string())),
            },
            Err(source) => Err(AssetError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }
}

fn malformed(name: &str, reason: impl Into<String>) -> AssetError {
    AssetError::Malformed {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Parse the text format described at the top of this module.
pub fn parse_sprite(name: &str, text: &str) -> Result<Sprite, AssetError> {
    let mut lines: Vec<&str> = text.lines().collect();
    let mut fg = None;
    let mut bg = None;

    if let Some(header) = lines.first().and_then(|l| l.strip_prefix(HEADER_PREFIX)) {
        for field in header.split_whitespace() {
            let (key, value) = field
                .split_once('=')
                .ok_or_else(|| malformed(name, format!("bad header field '{}'", field)))?;
            let colour = parse_colour(value)
                .map_err(|_| malformed(name, format!("unknown colour '{}'", value)))?;
            match key {
                "fg" => fg = colour,
                "bg" => bg = colour,
                other => return Err(malformed(name, format!("unknown header key '{}'", other))),
            }
        }
        lines.remove(0);
    }

    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(malformed(name, "no art"));
    }
    Ok(Sprite::from_art(&lines, fg, bg))
}

fn parse_colour(value: &str) -> Result<Option<Color>, ()> {
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    Color::from_str(value).map(Some).map_err(|_| ())
}
