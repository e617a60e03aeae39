//! ORDER BY entries

/// One `ORDER BY` item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub descending: bool,
}

impl OrderBy {
    pub fn new(field: impl Into<String>, descending: bool) -> Self {
        Self {
            field: field.into(),
            descending,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, false)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, true)
    }

    /// `field` or `field DESC`. Ascending order is the default and not written.
    pub fn to_sql(&self) -> String {
        if self.descending {
            format!("{} DESC", self.field)
        } else {
            self.field.clone()
        }
    }
}
