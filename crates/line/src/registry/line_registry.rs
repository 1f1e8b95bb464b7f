//! Line registry keeping every line in memory.
//!
//! Lines are looked up by identifier; identifiers are handed out in creation
//! order and never reused.

use std::collections::HashMap;

use tracing::debug;

use crate::identifiers::LineIdentifier;
use crate::models::{types::*, Section, Station};
use crate::registry::line::Line;

#[derive(Clone, Debug, Default)]
pub struct LineRegistry {
    lines: HashMap<LineIdentifier, Line>,
    order: Vec<LineIdentifier>,
    last_id: u64,
}

impl LineRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new line, optionally with its first section.
    ///
    /// Line names are unique across the registry.
    pub fn create_line(
        &mut self,
        name: &str,
        color: &str,
        first_section: Option<Section>,
    ) -> LineResult<&Line> {
        self.ensure_unique_name(name, None)?;

        let mut line = Line::new(self.next_id(), name, color);
        if let Some(section) = first_section {
            line.add_section(section)?;
        }

        debug!(id = %line.id, name, "created line");
        let id = line.id.clone();
        self.order.push(id.clone());
        Ok(&*self.lines.entry(id).or_insert(line))
    }

    /// All lines in creation order
    pub fn lines(&self) -> Vec<&Line> {
        self.order.iter().filter_map(|id| self.lines.get(id)).collect()
    }

    pub fn line(&self, id: &LineIdentifier) -> LineResult<&Line> {
        self.lines
            .get(id)
            .ok_or_else(|| LineError::LineNotFound(id.clone()))
    }

    /// Rename and recolor a line. Keeping the current name is allowed.
    pub fn update_line(&mut self, id: &LineIdentifier, name: &str, color: &str) -> LineResult<&Line> {
        self.line(id)?;
        self.ensure_unique_name(name, Some(id))?;

        let line = self.line_mut(id)?;
        line.name = name.into();
        line.color = color.into();

        debug!(id = %line.id, name, "updated line");
        Ok(&*line)
    }

    pub fn delete_line(&mut self, id: &LineIdentifier) -> LineResult<Line> {
        let line = self
            .lines
            .remove(id)
            .ok_or_else(|| LineError::LineNotFound(id.clone()))?;
        self.order.retain(|other| other != id);

        debug!(id = %line.id, "deleted line");
        Ok(line)
    }

    pub fn add_section(&mut self, id: &LineIdentifier, section: Section) -> LineResult<()> {
        self.line_mut(id)?.add_section(section)?;
        Ok(())
    }

    /// Stations of a line in travel order
    pub fn stations(&self, id: &LineIdentifier) -> LineResult<Vec<Station>> {
        Ok(self.line(id)?.stations()?)
    }

    fn line_mut(&mut self, id: &LineIdentifier) -> LineResult<&mut Line> {
        self.lines
            .get_mut(id)
            .ok_or_else(|| LineError::LineNotFound(id.clone()))
    }

    fn next_id(&mut self) -> LineIdentifier {
        self.last_id += 1;
        LineIdentifier::new(self.last_id.to_string())
    }

    fn ensure_unique_name(&self, name: &str, except: Option<&LineIdentifier>) -> LineResult<()> {
        let taken = self
            .lines
            .values()
            .any(|line| &*line.name == name && Some(&line.id) != except);

        if taken {
            return Err(LineError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}
