// src/annotation/mod.rs

// --- Core (no Bevy systems) ---
pub mod category;
pub mod definitions;
pub mod errors;
pub mod export;
pub mod grouping;
pub mod ingest;
pub mod session;
pub mod store;

// --- Spreadsheet codec ---
pub mod io;

// --- Bevy wiring ---
pub mod events;
pub mod plugin;
pub(crate) mod handler;
pub(crate) mod processes;

pub use category::Category;
pub use definitions::{Conversation, ConversationId, FeedbackLabel, Record};
pub use errors::AnnotatorError;
pub use ingest::MissingIdPolicy;
pub use plugin::AnnotationPlugin;
pub use session::AnnotationSession;
pub use store::{Annotation, AnnotationStore};
