//! Line description files and replaying them into a line.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use subway_line::{Distance, Line, LineIdentifier, Section, Station};

/// A line as written in a JSON file
#[derive(Debug, Deserialize)]
pub struct LineFile {
    pub name: String,
    pub color: String,
    /// Optional display names keyed by station id
    #[serde(default)]
    pub stations: HashMap<String, String>,
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SectionEntry {
    pub up: String,
    pub down: String,
    #[serde(default)]
    pub distance: u32,
}

impl LineFile {
    fn station(&self, id: &str) -> Station {
        let name = self.stations.get(id).map_or(id, String::as_str);
        Station::new(id, name)
    }
}

/// Outcome of replaying a file
pub struct Replay {
    pub line: Line,
    pub skipped: usize,
}

pub fn read_line_file(path: &Path) -> Result<LineFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Add every section of `file` to a fresh line, in file order.
///
/// Refused sections are skipped with a warning unless `strict` is set.
pub fn replay(file: &LineFile, strict: bool) -> Result<Replay> {
    let mut line = Line::new(LineIdentifier::new(&file.name), file.name.as_str(), file.color.as_str());
    let mut skipped = 0;

    for (index, entry) in file.sections.iter().enumerate() {
        let result = Section::new(
            file.station(&entry.up),
            file.station(&entry.down),
            Distance::new(entry.distance),
        )
        .and_then(|section| line.add_section(section));

        match result {
            Ok(()) => tracing::debug!("Section #{index} {} -> {} added", entry.up, entry.down),
            Err(err) if !strict && err.invalid_reason().is_some() => {
                tracing::warn!("Skipping section #{index}: {err}");
                skipped += 1;
            }
            Err(err) => {
                return Err(anyhow::Error::new(err).context(format!(
                    "Section #{index} ({} -> {}) was refused",
                    entry.up, entry.down
                )));
            }
        }
    }

    Ok(Replay { line, skipped })
}
