// src/annotation/store.rs

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::category::Category;
use super::definitions::ConversationId;
use super::errors::AnnotatorError;

/// Selected categories of one conversation, each with its comment.
///
/// A category is selected iff it has an entry; the comment may be empty.
/// Iteration follows taxonomy order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    entries: BTreeMap<Category, String>,
}

impl Annotation {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn comment(&self, category: Category) -> Option<&str> {
        self.entries.get(&category).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.entries.iter().map(|(c, s)| (*c, s.as_str()))
    }
}

/// In-memory annotations keyed by conversation identifier.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    annotations: HashMap<ConversationId, Annotation>,
}

impl AnnotationStore {
    /// Replaces the annotation of `id` with exactly `selections`, each paired
    /// with its trimmed comment. Comments of unselected categories are dropped.
    ///
    /// An empty selection is refused and leaves the store as it was.
    pub fn save(
        &mut self,
        id: ConversationId,
        selections: &BTreeSet<Category>,
        comments: &HashMap<Category, String>,
    ) -> Result<(), AnnotatorError> {
        if selections.is_empty() {
            return Err(AnnotatorError::Validation(
                "Please select at least one bucket".to_string(),
            ));
        }

        let entries = selections
            .iter()
            .map(|category| {
                let comment = comments
                    .get(category)
                    .map(|c| c.trim().to_string())
                    .unwrap_or_default();
                (*category, comment)
            })
            .collect();

        self.annotations.insert(id, Annotation { entries });
        Ok(())
    }

    /// Stored annotation of `id`, or an empty one.
    pub fn load(&self, id: &ConversationId) -> Annotation {
        self.annotations.get(id).cloned().unwrap_or_default()
    }

    pub fn get(&self, id: &ConversationId) -> Option<&Annotation> {
        self.annotations.get(id)
    }

    pub fn is_annotated(&self, id: &ConversationId) -> bool {
        self.annotations.get(id).is_some_and(|a| !a.is_empty())
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

#[cfg(test)]
impl Annotation {
    pub fn selections(&self) -> BTreeSet<Category> {
        self.entries.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(categories: &[Category]) -> BTreeSet<Category> {
        categories.iter().copied().collect()
    }

    #[test]
    fn empty_selection_is_rejected_without_mutation() {
        let mut store = AnnotationStore::default();
        let id = ConversationId::new("1");
        store
            .save(id.clone(), &selection(&[Category::Hva]), &HashMap::new())
            .unwrap();

        let mut comments = HashMap::new();
        comments.insert(Category::BotResponse, "ignored".to_string());
        let err = store.save(id.clone(), &BTreeSet::new(), &comments).unwrap_err();

        assert!(matches!(err, AnnotatorError::Validation(_)));
        assert_eq!(store.load(&id).selections(), selection(&[Category::Hva]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn save_then_load_round_trips_trimmed_comments() {
        let mut store = AnnotationStore::default();
        let id = ConversationId::new("42");
        let mut comments = HashMap::new();
        comments.insert(Category::BotResponse, "  wrong answer \n".to_string());
        comments.insert(Category::OtherQueries, "dropped".to_string());

        store
            .save(
                id.clone(),
                &selection(&[Category::BotResponse, Category::CustomerBehavior]),
                &comments,
            )
            .unwrap();

        let loaded = store.load(&id);
        assert_eq!(
            loaded.selections(),
            selection(&[Category::BotResponse, Category::CustomerBehavior])
        );
        assert_eq!(loaded.comment(Category::BotResponse), Some("wrong answer"));
        assert_eq!(loaded.comment(Category::CustomerBehavior), Some(""));
        assert_eq!(loaded.comment(Category::OtherQueries), None);
    }

    #[test]
    fn second_save_replaces_instead_of_merging() {
        let mut store = AnnotationStore::default();
        let id = ConversationId::new("a");
        let mut comments = HashMap::new();
        comments.insert(Category::Hva, "first".to_string());
        store
            .save(id.clone(), &selection(&[Category::Hva, Category::BotResponse]), &comments)
            .unwrap();

        let mut comments = HashMap::new();
        comments.insert(Category::OverallObservations, "second".to_string());
        store
            .save(id.clone(), &selection(&[Category::OverallObservations]), &comments)
            .unwrap();

        let loaded = store.load(&id);
        assert_eq!(loaded.selections(), selection(&[Category::OverallObservations]));
        assert_eq!(loaded.comment(Category::Hva), None);
        assert_eq!(loaded.comment(Category::OverallObservations), Some("second"));
    }

    #[test]
    fn load_of_unknown_id_is_empty_and_does_not_insert() {
        let store = AnnotationStore::default();
        let id = ConversationId::new("nope");
        assert!(store.load(&id).is_empty());
        assert!(!store.is_annotated(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn iteration_follows_taxonomy_order() {
        let mut store = AnnotationStore::default();
        let id = ConversationId::new("x");
        store
            .save(
                id.clone(),
                &selection(&[Category::OverallObservations, Category::BotResponse]),
                &HashMap::new(),
            )
            .unwrap();
        let order: Vec<Category> = store.load(&id).iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![Category::BotResponse, Category::OverallObservations]);
    }
}
