// src/ui/elements/mod.rs

// Window layout and the system drawing it
pub mod annotator;
// Left conversation list
pub mod conversation_list;
// Transcript of the active conversation
pub mod conversation_view;
// Bucket checkboxes and comment boxes
pub mod bucket_panel;
// Title, progress and action buttons
pub mod top_panel;
