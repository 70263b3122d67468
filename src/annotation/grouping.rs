// src/annotation/grouping.rs

use std::collections::HashMap;

use super::definitions::{Conversation, ConversationId, Record};

/// Groups records into conversations by identifier in one pass.
///
/// Conversations come out in order of first appearance of their identifier
/// and keep their records in input order. Nothing is sorted or merged.
pub fn group(records: Vec<Record>) -> Vec<Conversation> {
    let mut positions: HashMap<ConversationId, usize> = HashMap::new();
    let mut conversations: Vec<Conversation> = Vec::new();

    for record in records {
        match positions.get(&record.id) {
            Some(&pos) => conversations[pos].push(record),
            None => {
                positions.insert(record.id.clone(), conversations.len());
                conversations.push(Conversation::start(record));
            }
        }
    }

    conversations
}
