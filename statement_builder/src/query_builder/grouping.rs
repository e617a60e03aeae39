use type_mapping::{Combinator, SqlKeyword};

/// A HAVING predicate with the combinator joining it to the previous entry
#[derive(Debug, Clone, PartialEq)]
pub struct HavingEntry {
    pub predicate: String,
    pub combinator: Combinator,
}

impl HavingEntry {
    pub fn new(predicate: impl Into<String>, combinator: Combinator) -> Self {
        Self {
            predicate: predicate.into(),
            combinator,
        }
    }

    /// `[combinator] predicate `; the first entry drops its combinator
    pub fn render(&self, is_first: bool) -> String {
        let lead = if is_first {
            String::new()
        } else {
            self.combinator.keyword().into_owned()
        };

        format!("{} {} ", lead, self.predicate)
    }
}

/// Render a HAVING clause, or nothing when there are no entries
pub fn render_having(entries: &[HavingEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut clause = String::from("HAVING ");
    for (index, entry) in entries.iter().enumerate() {
        clause.push_str(&entry.render(index == 0));
    }
    clause
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_having_entry_render() {
        let entry = HavingEntry::new("COUNT(C.ID) > 1", Combinator::Or);
        assert_eq!(entry.render(true), " COUNT(C.ID) > 1 ");
        assert_eq!(entry.render(false), "OR COUNT(C.ID) > 1 ");
    }

    #[test]
    fn test_render_having_suppresses_first_combinator() {
        let entries = vec![
            HavingEntry::new("COUNT(C.ID) > 1", Combinator::Or),
            HavingEntry::new("SUM(C.Lives) < 20", Combinator::And),
        ];

        assert_eq!(
            render_having(&entries),
            "HAVING  COUNT(C.ID) > 1 AND SUM(C.Lives) < 20 "
        );
    }

    #[test]
    fn test_render_having_empty() {
        assert_eq!(render_having(&[]), "");
    }
}
