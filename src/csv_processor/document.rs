use crate::utils::{CsvTokenizerError, Result};

/// An in-memory tabular document: a header row plus row-major cells.
/// Invariant: every row has exactly `headers.len()` cells; header names
/// are unique (enforced at parse time).
#[derive(Debug, Clone)]
pub struct TabularDocument {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TabularDocument {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Full ordered value sequence of the named column, or None if absent.
    pub fn column_values(&self, name: &str) -> Option<Vec<String>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[index].clone()).collect())
    }

    /// Removes the column `old` and appends a column `new` holding `tokens`,
    /// one per row in row order. A `None` token becomes an empty cell.
    pub fn replace_column(
        &mut self,
        old: &str,
        new: &str,
        tokens: Vec<Option<String>>,
    ) -> Result<()> {
        let index = self
            .column_index(old)
            .ok_or_else(|| CsvTokenizerError::ColumnNotFound(old.to_string()))?;

        if tokens.len() != self.rows.len() {
            return Err(CsvTokenizerError::TokenCountMismatch {
                expected: self.rows.len(),
                got: tokens.len(),
            });
        }

        self.headers.remove(index);
        self.headers.push(new.to_string());

        for (row, token) in self.rows.iter_mut().zip(tokens) {
            row.remove(index);
            row.push(token.unwrap_or_default());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TabularDocument {
        TabularDocument::new(
            vec!["A".into(), "Credit_Card_Number".into(), "B".into()],
            vec![
                vec!["a1".into(), "4111".into(), "b1".into()],
                vec!["a2".into(), "4222".into(), "b2".into()],
                vec!["a3".into(), "4333".into(), "b3".into()],
            ],
        )
    }

    #[test]
    fn has_column_is_exact_match() {
        let doc = sample();
        assert!(doc.has_column("Credit_Card_Number"));
        assert!(!doc.has_column("credit_card_number"));
        assert!(!doc.has_column("CREDIT_CARD_NUMBER"));
    }

    #[test]
    fn column_values_preserves_row_order() {
        let doc = sample();
        let values = doc.column_values("Credit_Card_Number").unwrap();
        assert_eq!(values, vec!["4111", "4222", "4333"]);
        assert!(doc.column_values("Nope").is_none());
    }

    #[test]
    fn replace_column_moves_new_column_last_and_keeps_others() {
        let mut doc = sample();
        doc.replace_column(
            "Credit_Card_Number",
            "CREDIT_CARD_NUMBER",
            vec![Some("t1".into()), None, Some("t3".into())],
        )
        .unwrap();

        assert_eq!(doc.headers, vec!["A", "B", "CREDIT_CARD_NUMBER"]);
        assert_eq!(doc.rows[0], vec!["a1", "b1", "t1"]);
        assert_eq!(doc.rows[1], vec!["a2", "b2", ""]);
        assert_eq!(doc.rows[2], vec!["a3", "b3", "t3"]);
        assert_eq!(doc.row_count(), 3);
    }

    #[test]
    fn replace_column_rejects_token_count_mismatch() {
        let mut doc = sample();
        let err = doc
            .replace_column("Credit_Card_Number", "CREDIT_CARD_NUMBER", vec![None])
            .unwrap_err();
        assert!(matches!(
            err,
            CsvTokenizerError::TokenCountMismatch {
                expected: 3,
                got: 1
            }
        ));
    }

    #[test]
    fn replace_column_rejects_missing_column() {
        let mut doc = sample();
        let err = doc
            .replace_column("Nope", "NOPE", vec![None, None, None])
            .unwrap_err();
        assert!(matches!(err, CsvTokenizerError::ColumnNotFound(_)));
    }

    #[test]
    fn replace_column_on_empty_document() {
        let mut doc = TabularDocument::new(
            vec!["Name".into(), "Credit_Card_Number".into()],
            Vec::new(),
        );
        doc.replace_column("Credit_Card_Number", "CREDIT_CARD_NUMBER", Vec::new())
            .unwrap();
        assert_eq!(doc.headers, vec!["Name", "CREDIT_CARD_NUMBER"]);
        assert_eq!(doc.row_count(), 0);
    }
}
