//! Rendering the ordered stations of a line.

use anyhow::Result;
use serde::Serialize;

use subway_line::{Line, Station};

#[derive(Serialize)]
struct LineReport<'a> {
    id: &'a str,
    line: &'a str,
    color: &'a str,
    stations: &'a [Station],
}

/// Station names joined in travel order, e.g. `Hwagok -> Kkachisan`
pub fn render_text(stations: &[Station]) -> String {
    stations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn render_json(line: &Line, stations: &[Station]) -> Result<String> {
    let report = LineReport {
        id: line.id.as_str(),
        line: &line.name,
        color: &line.color,
        stations,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
