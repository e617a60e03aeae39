//! Nestable boolean filters
//!
//! A [`FilterTree`] is shared by WHERE, pagination filters and JOIN ... ON
//! conditions. Each node carries the combinator joining it to its left
//! sibling; the first rendered node at any nesting level drops it.

use crate::query_builder::format;
use type_mapping::{Combinator, Comparison, SqlKeyword};

/// Filter node: a literal predicate, an override string, or a parenthesised
/// group of child filters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterTree {
    pub(crate) predicate: Option<String>,
    pub(crate) override_text: Option<String>,
    pub(crate) combinator: Combinator,
    pub(crate) children: Vec<FilterTree>,
}

impl FilterTree {
    /// Literal predicate, e.g. `C.Name = 'Fluffy'`
    pub fn predicate(predicate: impl Into<String>, combinator: Combinator) -> Self {
        let predicate = predicate.into();
        Self {
            predicate: (!predicate.is_empty()).then_some(predicate),
            override_text: None,
            combinator,
            children: Vec::new(),
        }
    }

    /// Predicate joined with AND
    pub fn and(predicate: impl Into<String>) -> Self {
        Self::predicate(predicate, Combinator::And)
    }

    /// Predicate joined with OR
    pub fn or(predicate: impl Into<String>) -> Self {
        Self::predicate(predicate, Combinator::Or)
    }

    /// Parenthesised group of child filters
    pub fn group(children: Vec<FilterTree>, combinator: Combinator) -> Self {
        Self {
            predicate: None,
            override_text: None,
            combinator,
            children,
        }
    }

    /// Filter rendered verbatim, ignoring combinator and children
    pub fn raw(text: impl Into<String>) -> Self {
        Self::default().with_override(text)
    }

    /// `alias.field OP condition`
    pub fn compare(
        alias: &str,
        field: &str,
        condition: &str,
        comparison: Comparison,
        combinator: Combinator,
        quoted: bool,
    ) -> Self {
        Self::predicate(
            format::filter_format(&format::field_format(alias, field, ""), condition, comparison, quoted),
            combinator,
        )
    }

    /// `alias.field >= lo AND alias.field <= hi`, or the parenthesised
    /// `<`/`>` form when `not_between` is set
    pub fn between(
        alias: &str,
        field: &str,
        lower: &str,
        upper: &str,
        not_between: bool,
        combinator: Combinator,
    ) -> Self {
        Self::predicate(
            format::filter_between_format(&format::field_format(alias, field, ""), lower, upper, not_between, false),
            combinator,
        )
    }

    /// Replace the rendered output of this node entirely
    pub fn with_override(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.override_text = (!text.is_empty()).then_some(text);
        self
    }

    /// Append a child to this node's group
    pub fn with_child(mut self, child: FilterTree) -> Self {
        self.children.push(child);
        self
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn children(&self) -> &[FilterTree] {
        &self.children
    }

    /// True when neither the node nor any of its descendants has text to render
    pub fn is_empty(&self) -> bool {
        self.predicate.is_none()
            && self.override_text.is_none()
            && self.children.iter().all(FilterTree::is_empty)
    }

    /// Render this node. `is_first` suppresses the leading combinator of the
    /// predicate and of the child group.
    pub fn render(&self, is_first: bool) -> String {
        if let Some(override_text) = &self.override_text {
            return format!(" {} ", override_text);
        }

        let lead = if is_first {
            String::new()
        } else {
            self.combinator.keyword().into_owned()
        };

        let mut rendered = String::new();

        if let Some(predicate) = &self.predicate {
            rendered.push_str(&format!("{} {} ", lead, predicate));
        }

        if !self.children.is_empty() {
            let inner = render_filters(&self.children, true);
            if !inner.trim().is_empty() {
                rendered.push_str(&format!("{} ({}) ", lead, inner));
            }
        }

        rendered
    }
}

/// Render a sequence of sibling filters. The first node that produces text
/// is rendered without its combinator when `is_first` is set.
pub fn render_filters(filters: &[FilterTree], is_first: bool) -> String {
    let mut first = is_first;
    let mut rendered = String::new();

    for filter in filters {
        let part = filter.render(first);
        if !part.trim().is_empty() {
            first = false;
        }
        rendered.push_str(&part);
    }

    rendered
}
