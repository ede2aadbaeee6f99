//! Question responses extracted from the reference XML.

use crate::identifiers::QuestionId;
use indexmap::IndexMap;

/// Response texts keyed by question, in document order.
///
/// A repeated question ID replaces the earlier text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    responses: IndexMap<QuestionId, String>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a response, returning the text it replaced
    pub fn insert(&mut self, question_id: QuestionId, text: impl Into<String>) -> Option<String> {
        self.responses.insert(question_id, text.into())
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&str> {
        self.responses.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &str)> {
        self.responses.iter().map(|(id, text)| (id, text.as_str()))
    }
}

impl<Q, T> FromIterator<(Q, T)> for ResponseSet
where
    Q: Into<QuestionId>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (Q, T)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (id, text) in iter {
            set.insert(id.into(), text);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_replaces_text() {
        let mut set = ResponseSet::new();
        assert!(set.insert(QuestionId::new("Q1"), "first").is_none());
        assert_eq!(
            set.insert(QuestionId::new("Q1"), "second"),
            Some("first".to_string())
        );
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&QuestionId::new("Q1")), Some("second"));
    }

    #[test]
    fn test_collect_keeps_document_order() {
        let set: ResponseSet = vec![("Q2", "b"), ("Q1", "a")].into_iter().collect();
        let ids: Vec<&str> = set.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["Q2", "Q1"]);
    }
}
