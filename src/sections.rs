//! Order-preserving grouping of cases by section.

use serde::Serialize;

use crate::fixture::Case;

/// An ordered mapping from section name to the cases sharing it.
///
/// Stored as an explicit list of `(name, cases)` pairs so that first-seen
/// section order is a structural property rather than an iteration-order
/// accident. Within a section, cases keep their original file order; a
/// section name reappearing later in the file appends to its existing
/// bucket.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SectionGroups {
    groups: Vec<(String, Vec<Case>)>,
}

impl SectionGroups {
    /// Partitions an ordered case sequence into section groups.
    /// Pure function of its input.
    pub fn from_cases(cases: Vec<Case>) -> Self {
        let mut groups: Vec<(String, Vec<Case>)> = Vec::new();
        for case in cases {
            match groups.iter_mut().find(|(name, _)| *name == case.section) {
                Some((_, bucket)) => bucket.push(case),
                None => groups.push((case.section.clone(), vec![case])),
            }
        }
        Self { groups }
    }

    /// Iterates groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Case])> {
        self.groups
            .iter()
            .map(|(name, cases)| (name.as_str(), cases.as_slice()))
    }

    pub fn get(&self, name: &str) -> Option<&[Case]> {
        self.groups
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, cases)| cases.as_slice())
    }

    pub fn section_count(&self) -> usize {
        self.groups.len()
    }

    pub fn case_count(&self) -> usize {
        self.groups.iter().map(|(_, cases)| cases.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(section: &str, line: usize) -> Case {
        Case {
            section: section.to_string(),
            input: vec!["x".to_string()],
            expected: "x".to_string(),
            line,
        }
    }

    #[test]
    fn reappearing_section_appends_to_existing_bucket() {
        let groups = SectionGroups::from_cases(vec![
            case("A", 1),
            case("B", 3),
            case("A", 5),
        ]);
        let order: Vec<_> = groups.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["A", "B"]);
        let a_lines: Vec<_> = groups.get("A").unwrap().iter().map(|c| c.line).collect();
        assert_eq!(a_lines, vec![1, 5]);
    }
}
