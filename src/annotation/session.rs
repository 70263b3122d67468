// src/annotation/session.rs

use bevy::prelude::Resource;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use super::category::Category;
use super::definitions::{Conversation, ConversationId, FeedbackLabel};
use super::errors::AnnotatorError;
use super::store::{Annotation, AnnotationStore};

/// Background operation currently holding the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOperation {
    Loading,
    Exporting,
}

impl PendingOperation {
    pub fn describe(self) -> &'static str {
        match self {
            PendingOperation::Loading => "a file is still loading",
            PendingOperation::Exporting => "an export is still being written",
        }
    }
}

/// Header data for the active conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationView {
    pub id: ConversationId,
    pub feedback: FeedbackLabel,
    /// 1-based position in the conversation list.
    pub position: usize,
    pub total: usize,
}

impl ConversationView {
    pub fn progress(&self) -> f32 {
        self.position as f32 / self.total as f32
    }

    pub fn title(&self) -> String {
        format!("Conversation {} of {}", self.position, self.total)
    }

    pub fn progress_text(&self) -> String {
        format!("{}/{} Conversations", self.position, self.total)
    }
}

/// One line of the conversation list panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationListEntry {
    pub index: usize,
    pub id: ConversationId,
    pub active: bool,
    pub annotated: bool,
}

/// Everything the running session owns: conversations, the cursor and the
/// annotation store.
#[derive(Resource, Debug, Default)]
pub struct AnnotationSession {
    conversations: Vec<Conversation>,
    current_index: usize,
    store: AnnotationStore,
    source: Option<PathBuf>,
    pending: Option<PendingOperation>,
}

impl AnnotationSession {
    /// Installs a freshly loaded conversation list. The store is reset and
    /// the cursor returns to the first conversation.
    pub fn replace_conversations(
        &mut self,
        conversations: Vec<Conversation>,
        source: Option<PathBuf>,
    ) {
        self.conversations = conversations;
        self.current_index = 0;
        self.store = AnnotationStore::default();
        self.source = source;
    }

    pub fn is_loaded(&self) -> bool {
        !self.conversations.is_empty()
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&Conversation> {
        self.conversations.get(self.current_index)
    }

    pub fn advance(&mut self) -> bool {
        if self.current_index + 1 < self.conversations.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    pub fn retreat(&mut self) -> bool {
        if self.current_index > 0 && !self.conversations.is_empty() {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `index`; out-of-range indices are refused.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.conversations.len() {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    /// Saves an annotation for the active conversation.
    pub fn save_current(
        &mut self,
        selections: &BTreeSet<Category>,
        comments: &HashMap<Category, String>,
    ) -> Result<ConversationId, AnnotatorError> {
        let id = self
            .current()
            .map(|c| c.id().clone())
            .ok_or_else(|| AnnotatorError::Validation("No conversation is loaded".to_string()))?;
        self.store.save(id.clone(), selections, comments)?;
        Ok(id)
    }

    /// Stored annotation for the active conversation (empty if none).
    pub fn load_current(&self) -> Annotation {
        self.current()
            .map(|c| self.store.load(c.id()))
            .unwrap_or_default()
    }

    pub fn view(&self) -> Option<ConversationView> {
        self.current().map(|conversation| ConversationView {
            id: conversation.id().clone(),
            feedback: conversation.feedback_label(),
            position: self.current_index + 1,
            total: self.conversations.len(),
        })
    }

    pub fn list_entries(&self) -> Vec<ConversationListEntry> {
        self.conversations
            .iter()
            .enumerate()
            .map(|(index, conversation)| ConversationListEntry {
                index,
                id: conversation.id().clone(),
                active: index == self.current_index,
                annotated: self.store.is_annotated(conversation.id()),
            })
            .collect()
    }

    // --- Session lock ---

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Takes the session lock for a background operation. Fails with the
    /// operation already holding it.
    pub fn begin(&mut self, operation: PendingOperation) -> Result<(), PendingOperation> {
        match self.pending {
            Some(current) => Err(current),
            None => {
                self.pending = Some(operation);
                Ok(())
            }
        }
    }

    pub fn finish(&mut self, operation: PendingOperation) {
        if self.pending == Some(operation) {
            self.pending = None;
        }
    }
}
