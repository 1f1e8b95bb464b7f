//! Reconstructing travel order from an unordered set of sections.

use std::collections::HashMap;

use crate::models::{types::*, Section, Station};
use crate::path::sections::SectionPath;

impl SectionPath {
    /// Stations in travel order, from the first station of the line to the last.
    ///
    /// Returns `SectionError::PathInconsistency` if the sections do not form
    /// one simple path. `add` never produces such a set, so this signals
    /// corrupted data rather than bad input.
    pub fn sorted_stations(&self) -> Result<Vec<Station>> {
        let sections = self.sections();
        if sections.is_empty() {
            return Ok(Vec::new());
        }

        let by_up: HashMap<&Station, &Section> =
            sections.iter().map(|s| (s.up_station(), s)).collect();
        let by_down: HashMap<&Station, &Section> =
            sections.iter().map(|s| (s.down_station(), s)).collect();

        if by_up.len() != sections.len() || by_down.len() != sections.len() {
            return Err(SectionError::PathInconsistency(
                "a station is shared by more than one section in the same direction".into(),
            ));
        }

        let head = self.find_head(&by_down)?;

        let mut stations = Vec::with_capacity(sections.len() + 1);
        stations.push(head.up_station().clone());
        stations.push(head.down_station().clone());

        let mut current = head;
        while let Some(&next) = by_up.get(current.down_station()) {
            if stations.len() > sections.len() {
                return Err(SectionError::PathInconsistency(format!(
                    "walk from {} loops back on itself",
                    head.up_station().id
                )));
            }
            stations.push(next.down_station().clone());
            current = next;
        }

        if stations.len() != sections.len() + 1 {
            return Err(SectionError::PathInconsistency(format!(
                "only {} of {} sections are reachable from {}",
                stations.len() - 1,
                sections.len(),
                head.up_station().id
            )));
        }

        Ok(stations)
    }

    /// First station of the line, if any.
    pub fn first_station(&self) -> Result<Option<Station>> {
        Ok(self.sorted_stations()?.into_iter().next())
    }

    /// Last station of the line, if any.
    pub fn last_station(&self) -> Result<Option<Station>> {
        Ok(self.sorted_stations()?.pop())
    }

    /// Walk backwards from an arbitrary section until no section leads into it.
    fn find_head<'a>(&'a self, by_down: &HashMap<&'a Station, &'a Section>) -> Result<&'a Section> {
        let mut head = self.sections().first().ok_or_else(|| {
            SectionError::PathInconsistency("no section to start the walk from".into())
        })?;

        let mut steps = 0;
        while let Some(&previous) = by_down.get(head.up_station()) {
            steps += 1;
            if steps > self.len() {
                return Err(SectionError::PathInconsistency(format!(
                    "no first station: walking back from {} never ends",
                    head.up_station().id
                )));
            }
            head = previous;
        }

        Ok(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Distance;

    fn station(id: &str) -> Station {
        Station::new(id, id)
    }

    fn section(up: &str, down: &str) -> Section {
        Section::new(station(up), station(down), Distance::new(10)).unwrap()
    }

    fn path(sections: &[(&str, &str)]) -> SectionPath {
        SectionPath::try_from_sections(sections.iter().map(|&(u, d)| section(u, d))).unwrap()
    }

    fn ids(stations: &[Station]) -> Vec<&str> {
        stations.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_empty_path_has_no_stations() {
        let path = SectionPath::new();
        assert!(path.sorted_stations().unwrap().is_empty());
        assert_eq!(path.first_station().unwrap(), None);
    }

    #[test]
    fn test_single_section() {
        let path = path(&[("a", "b")]);
        assert_eq!(ids(&path.sorted_stations().unwrap()), ["a", "b"]);
    }

    #[test]
    fn test_downstream_split_order() {
        let mut path = path(&[("a", "b"), ("b", "c")]);
        path.add(Section::new(station("a"), station("d"), Distance::new(4)).unwrap()).unwrap();

        assert_eq!(ids(&path.sorted_stations().unwrap()), ["a", "d", "b", "c"]);
    }

    #[test]
    fn test_upstream_split_order() {
        let mut path = path(&[("a", "b"), ("b", "c")]);
        path.add(Section::new(station("d"), station("c"), Distance::new(4)).unwrap()).unwrap();

        assert_eq!(ids(&path.sorted_stations().unwrap()), ["a", "b", "d", "c"]);
    }

    #[test]
    fn test_extension_at_both_ends() {
        let mut path = path(&[("a", "b")]);

        path.add(section("b", "c")).unwrap();
        assert_eq!(ids(&path.sorted_stations().unwrap()), ["a", "b", "c"]);

        path.add(section("z", "a")).unwrap();
        assert_eq!(ids(&path.sorted_stations().unwrap()), ["z", "a", "b", "c"]);
        assert_eq!(path.first_station().unwrap(), Some(station("z")));
        assert_eq!(path.last_station().unwrap(), Some(station("c")));
    }

    #[test]
    fn test_order_independent_of_insertion_order() {
        let orders: [[(&str, &str); 3]; 3] = [
            [("a", "b"), ("b", "c"), ("c", "d")],
            [("c", "d"), ("b", "c"), ("a", "b")],
            [("b", "c"), ("c", "d"), ("a", "b")],
        ];

        let paths: Vec<SectionPath> = orders.iter().map(|order| path(order)).collect();
        for path in &paths {
            assert_eq!(ids(&path.sorted_stations().unwrap()), ["a", "b", "c", "d"]);
            assert_eq!(path, &paths[0]);
        }
    }

    #[test]
    fn test_sorting_is_repeatable() {
        let mut path = path(&[("b", "c"), ("a", "b")]);
        path.add(section("c", "e")).unwrap();
        path.add(Section::new(station("d"), station("e"), Distance::new(2)).unwrap()).unwrap();

        let first = path.sorted_stations().unwrap();
        let second = path.sorted_stations().unwrap();
        assert_eq!(first, second);
        assert_eq!(ids(&first), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_cycle_is_inconsistent() {
        let path = SectionPath::from_sections_unchecked(vec![
            section("a", "b"),
            section("b", "c"),
            section("c", "a"),
        ]);

        assert!(matches!(
            path.sorted_stations(),
            Err(SectionError::PathInconsistency(_))
        ));
    }

    #[test]
    fn test_disconnected_sections_are_inconsistent() {
        let path = SectionPath::from_sections_unchecked(vec![section("a", "b"), section("x", "y")]);

        assert!(matches!(
            path.sorted_stations(),
            Err(SectionError::PathInconsistency(_))
        ));
    }

    #[test]
    fn test_branch_is_inconsistent() {
        let path = SectionPath::from_sections_unchecked(vec![section("a", "b"), section("a", "c")]);

        assert!(matches!(
            path.sorted_stations(),
            Err(SectionError::PathInconsistency(_))
        ));
    }
}
