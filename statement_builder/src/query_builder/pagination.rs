//! OFFSET / FETCH paging

/// Paging applied after ORDER BY in the main statement only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetFetch {
    pub offset: i64,
    pub fetch: Option<i64>,
}

impl OffsetFetch {
    pub fn new(offset: i64, fetch: Option<i64>) -> Self {
        Self { offset, fetch }
    }

    /// `OFFSET n ROWS [FETCH NEXT m ROWS ONLY ]`
    pub fn to_sql(&self) -> String {
        let mut clauses = format!("OFFSET {} ROWS ", self.offset);

        if let Some(fetch) = self.fetch {
            clauses.push_str(&format!("FETCH NEXT {} ROWS ONLY ", fetch));
        }

        clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_only() {
        assert_eq!(OffsetFetch::new(20, None).to_sql(), "OFFSET 20 ROWS ");
    }

    #[test]
    fn test_offset_and_fetch() {
        assert_eq!(
            OffsetFetch::new(0, Some(10)).to_sql(),
            "OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY "
        );
    }
}
