// src/annotation/export.rs

use std::collections::HashSet;

use super::category::Category;
use super::definitions::{
    CellValue, Conversation, ConversationId, BOT_TEXT_COLUMN, FEEDBACK_COLUMN, ID_COLUMN,
    USER_TEXT_COLUMN,
};
use super::store::AnnotationStore;

/// One output row of the annotated workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow {
    pub id: ConversationId,
    /// Source `Id` cell of the record this row came from.
    pub id_cell: CellValue,
    pub user_text: String,
    pub bot_text: String,
    pub feedback: String,
    /// One value per category, in `Category::ALL` order.
    pub categories: [String; 11],
}

/// Export column headers: the four record columns, then every category label.
pub fn export_headers() -> Vec<&'static str> {
    let mut headers = vec![ID_COLUMN, USER_TEXT_COLUMN, BOT_TEXT_COLUMN, FEEDBACK_COLUMN];
    headers.extend(Category::ALL.iter().map(|c| c.label()));
    headers
}

/// Flattens annotated conversations back into one row per record.
///
/// Unannotated conversations contribute no rows. Feedback is carried only on
/// a conversation's last row; category comments only on its first row.
pub fn export(conversations: &[Conversation], store: &AnnotationStore) -> Vec<FlatRow> {
    let mut rows = Vec::new();

    for conversation in conversations {
        let Some(annotation) = store.get(conversation.id()).filter(|a| !a.is_empty()) else {
            continue;
        };
        let last = conversation.len() - 1;

        for (index, record) in conversation.records().iter().enumerate() {
            let feedback = if index == last {
                record.feedback.clone().unwrap_or_default()
            } else {
                String::new()
            };

            let categories: [String; 11] = if index == 0 {
                Category::ALL.map(|c| annotation.comment(c).unwrap_or_default().to_string())
            } else {
                Default::default()
            };

            rows.push(FlatRow {
                id: record.id.clone(),
                id_cell: record.id_cell.clone(),
                user_text: record.user_text.clone(),
                bot_text: record.bot_text.clone(),
                feedback,
                categories,
            });
        }
    }

    rows
}

/// Number of distinct conversations present in exported rows.
pub fn exported_conversation_count(rows: &[FlatRow]) -> usize {
    rows.iter().map(|r| &r.id).collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::definitions::Record;
    use crate::annotation::grouping::group;
    use std::collections::{BTreeSet, HashMap};

    fn sample_conversations() -> Vec<Conversation> {
        group(vec![
            Record::new("1", "hi", "hello", None),
            Record::new("1", "more", "sure", Some("ignored-not-last")),
            Record::new("1", "bye", "ok", Some("Positive")),
            Record::new("2", "help", "sure", Some("Negative")),
            Record::new("3", "a", "b", None),
        ])
    }

    fn annotate(store: &mut AnnotationStore, id: &str, picks: &[(Category, &str)]) {
        let selections: BTreeSet<Category> = picks.iter().map(|(c, _)| *c).collect();
        let comments: HashMap<Category, String> =
            picks.iter().map(|(c, s)| (*c, s.to_string())).collect();
        store
            .save(ConversationId::new(id), &selections, &comments)
            .unwrap();
    }

    #[test]
    fn unannotated_conversations_are_skipped() {
        let conversations = sample_conversations();
        let mut store = AnnotationStore::default();
        annotate(&mut store, "2", &[(Category::Hva, "x")]);

        let rows = export(&conversations, &store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.as_str(), "2");
        assert_eq!(rows[0].id_cell, CellValue::Text("2".to_string()));
        assert_eq!(exported_conversation_count(&rows), 1);
    }

    #[test]
    fn empty_store_exports_nothing() {
        let rows = export(&sample_conversations(), &AnnotationStore::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn feedback_on_last_row_and_categories_on_first_row() {
        let conversations = sample_conversations();
        let mut store = AnnotationStore::default();
        annotate(
            &mut store,
            "1",
            &[(Category::BotResponse, " bad tone "), (Category::OtherQueries, "")],
        );

        let rows = export(&conversations, &store);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].feedback, "");
        assert_eq!(rows[1].feedback, "");
        assert_eq!(rows[2].feedback, "Positive");

        assert_eq!(rows[0].categories[Category::BotResponse.index()], "bad tone");
        assert_eq!(rows[0].categories[Category::OtherQueries.index()], "");
        assert_eq!(rows[0].categories[Category::Hva.index()], "");
        for row in &rows[1..] {
            assert!(row.categories.iter().all(String::is_empty));
        }

        let turns: Vec<&str> = rows.iter().map(|r| r.user_text.as_str()).collect();
        assert_eq!(turns, vec!["hi", "more", "bye"]);
    }

    #[test]
    fn single_record_conversation_gets_both_on_one_row() {
        let conversations = sample_conversations();
        let mut store = AnnotationStore::default();
        annotate(&mut store, "2", &[(Category::CustomerBehavior, "angry")]);

        let rows = export(&conversations, &store);
        assert_eq!(rows[0].feedback, "Negative");
        assert_eq!(rows[0].categories[Category::CustomerBehavior.index()], "angry");
    }

    #[test]
    fn rows_follow_conversation_list_order() {
        let conversations = sample_conversations();
        let mut store = AnnotationStore::default();
        annotate(&mut store, "3", &[(Category::Hva, "")]);
        annotate(&mut store, "1", &[(Category::Hva, "")]);

        let rows = export(&conversations, &store);
        let ids: Vec<&str> = rows
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "1", "1", "3"]);
    }

    #[test]
    fn each_row_keeps_its_own_id_cell_kind() {
        let conversations = group(vec![
            Record::new(1.0, "first", "", None),
            Record::new("1", "second", "", None),
        ]);
        assert_eq!(conversations.len(), 1);
        let mut store = AnnotationStore::default();
        annotate(&mut store, "1", &[(Category::Hva, "")]);

        let rows = export(&conversations, &store);
        assert_eq!(rows[0].id_cell, CellValue::Number(1.0));
        assert_eq!(rows[1].id_cell, CellValue::Text("1".to_string()));
    }

    #[test]
    fn headers_list_record_columns_then_taxonomy() {
        let headers = export_headers();
        assert_eq!(headers.len(), 15);
        assert_eq!(
            &headers[..4],
            &["Id", "llmGeneratedUserMessage", "botMessage", "Customer Feedback"]
        );
        assert_eq!(headers[4], "Bot Response");
        assert_eq!(headers[14], "Overall Observations");
    }
}
