// src/cli/inspect.rs
use std::path::Path;

use crate::annotation::errors::AnnotatorError;
use crate::annotation::io::load_conversations;
use crate::annotation::{Conversation, MissingIdPolicy};

pub fn run(path: &Path, policy: MissingIdPolicy) -> Result<(), AnnotatorError> {
    println!("Opening: {}\n", path.display());

    let conversations = load_conversations(path, policy)?;
    let records: usize = conversations.iter().map(Conversation::len).sum();

    println!("{:<6} {:<24} {:<8} {}", "#", "Id", "Records", "Customer Feedback");
    println!("{}", "-".repeat(60));
    for line in summary_lines(&conversations) {
        println!("{}", line);
    }
    println!(
        "\n{} conversation(s) from {} record(s).",
        conversations.len(),
        records
    );
    Ok(())
}

fn summary_lines(conversations: &[Conversation]) -> Vec<String> {
    conversations
        .iter()
        .enumerate()
        .map(|(index, conversation)| {
            format!(
                "{:<6} {:<24} {:<8} {}",
                index + 1,
                conversation.id().as_str(),
                conversation.len(),
                conversation.feedback_label().display()
            )
        })
        .collect()
}
