use serde_json::Value;

use crate::constants::{CATEGORY_FIELD, ERR_EMPTY_SUBMISSION, ERR_NOT_AN_OBJECT, UNKNOWN_CATEGORY};
use crate::error::{AppError, Result};
use crate::models::Cell;

/// A decoded form submission
///
/// Fields keep the order in which they appeared in the JSON body, since the
/// header row of a new table is derived from that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    fields: Vec<(String, Cell)>,
}

impl Submission {
    /// Decode a raw request body into a submission
    ///
    /// The body must be a JSON object with at least one field.
    pub fn parse(raw_body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw_body)?;
        let Value::Object(map) = value else {
            return Err(AppError::InvalidInput(ERR_NOT_AN_OBJECT.to_string()));
        };

        if map.is_empty() {
            return Err(AppError::InvalidInput(ERR_EMPTY_SUBMISSION.to_string()));
        }

        let fields = map
            .into_iter()
            .map(|(key, value)| (key, Cell::from(value)))
            .collect();

        Ok(Self { fields })
    }

    /// Field names in decode order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Name of the table this submission belongs to
    ///
    /// Falls back to `"Unknown"` when `chapter` is missing or falsy
    /// (null, blank, `false`, `0`).
    pub fn category(&self) -> String {
        match self.get(CATEGORY_FIELD) {
            Some(cell) if !cell.is_falsy() => cell.to_string(),
            _ => UNKNOWN_CATEGORY.to_string(),
        }
    }

    /// Project the submission onto a header row
    ///
    /// Columns the submission does not mention come out as `Cell::Empty`.
    pub fn project(&self, headers: &[String]) -> Vec<Cell> {
        headers
            .iter()
            .map(|header| self.get(header).cloned().unwrap_or_default())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_key_order() {
        let submission = Submission::parse(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
        let keys: Vec<&str> = submission.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = Submission::parse("{not json").unwrap_err();
        assert!(matches!(err, AppError::MalformedJson(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = Submission::parse("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rejects_empty_object() {
        assert!(Submission::parse("{}").is_err());
    }

    #[test]
    fn test_category_defaults_to_unknown() {
        let missing = Submission::parse(r#"{"a":1}"#).unwrap();
        assert_eq!(missing.category(), "Unknown");

        let blank = Submission::parse(r#"{"chapter":""}"#).unwrap();
        assert_eq!(blank.category(), "Unknown");

        let null = Submission::parse(r#"{"chapter":null}"#).unwrap();
        assert_eq!(null.category(), "Unknown");
    }

    #[test]
    fn test_category_from_chapter() {
        let submission = Submission::parse(r#"{"chapter":"Chapter 2"}"#).unwrap();
        assert_eq!(submission.category(), "Chapter 2");

        let numeric = Submission::parse(r#"{"chapter":3}"#).unwrap();
        assert_eq!(numeric.category(), "3");
    }

    #[test]
    fn test_falsy_chapter_defaults_to_unknown() {
        for body in [r#"{"chapter":false}"#, r#"{"chapter":0}"#, r#"{"chapter":0.0}"#] {
            let submission = Submission::parse(body).unwrap();
            assert_eq!(submission.category(), "Unknown", "{}", body);
        }
    }

    #[test]
    fn test_project_fills_missing_columns() {
        let submission = Submission::parse(r#"{"a":2,"c":"y"}"#).unwrap();
        let headers = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(
            submission.project(&headers),
            vec![Cell::Integer(2), Cell::Empty, Cell::text("y")]
        );
    }

    #[test]
    fn test_project_keeps_falsy_values() {
        let submission = Submission::parse(r#"{"passed":false,"score":0}"#).unwrap();
        let headers = vec!["passed".to_string(), "score".to_string()];
        assert_eq!(
            submission.project(&headers),
            vec![Cell::Bool(false), Cell::Integer(0)]
        );
    }
}
