//! Interactive review loop
//!
//! Walks the parsed records in order, one blocking prompt per record, and
//! collects the accepted (possibly rewritten) set.

use console::style;
use dialoguer::{Editor, Select};
use tracing::{debug, info};

use clh_git::CommitRecord;

/// Operator disposition for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewChoice {
    /// Drop the record
    Skip,
    /// Rewrite the message, then keep it
    Change,
    /// Keep the record unchanged
    Use,
}

/// Prompt surface for the review loop.
///
/// One synchronous request/response exchange per record; the production
/// implementation blocks on the terminal.
pub trait ReviewUi {
    /// Ask what to do with the current record
    fn choose(&mut self) -> anyhow::Result<ReviewChoice>;

    /// Open the rewrite surface pre-filled with `default`; `None` means the
    /// operator closed the editor without saving
    fn edit(&mut self, default: &str) -> anyhow::Result<Option<String>>;
}

/// Terminal prompts backed by dialoguer
pub struct TerminalUi;

impl ReviewUi for TerminalUi {
    fn choose(&mut self) -> anyhow::Result<ReviewChoice> {
        let choices = ["Skip It", "Change It", "Use It"];
        let selection = Select::new()
            .with_prompt("What would you like to do with this entry?")
            .items(&choices)
            .default(0)
            .interact()?;

        Ok(match selection {
            0 => ReviewChoice::Skip,
            1 => ReviewChoice::Change,
            _ => ReviewChoice::Use,
        })
    }

    fn edit(&mut self, default: &str) -> anyhow::Result<Option<String>> {
        let edited = Editor::new().edit(default)?;
        Ok(edited)
    }
}

/// Review each record in order and return the accepted set.
pub fn review(records: &[CommitRecord], ui: &mut dyn ReviewUi) -> anyhow::Result<Vec<CommitRecord>> {
    let mut accepted = Vec::new();

    for record in records {
        println!("{} {}", style("Commit:").blue(), record.commit);
        println!("{} {}", style("By:").blue(), record.author);
        println!("{} {}", style("Message:").blue(), record.message);

        match ui.choose()? {
            ReviewChoice::Skip => {
                debug!(commit = %record.commit, "record skipped");
            }
            ReviewChoice::Use => {
                accepted.push(record.clone());
            }
            ReviewChoice::Change => {
                let message = match ui.edit(&comment_out(&record.message))? {
                    Some(edited) => strip_comments(&edited),
                    // editor closed without saving, keep the message as-is
                    None => record.message.clone(),
                };
                accepted.push(record.with_message(message));
            }
        }

        println!();
        divider();
    }

    info!(
        accepted = accepted.len(),
        reviewed = records.len(),
        "review finished"
    );
    Ok(accepted)
}

/// Print the styled separator shown between records.
pub fn divider() {
    println!("{}", style("-----------------").blue());
    println!();
}

/// Build the pre-filled editor content: a leading blank line, then every
/// message line behind a `# ` marker.
fn comment_out(message: &str) -> String {
    let commented: Vec<String> = message.split('\n').map(|line| format!("# {}", line)).collect();
    format!("\n{}", commented.join("\n"))
}

/// Drop every line still carrying the `# ` marker and rejoin the rest.
fn strip_comments(edited: &str) -> String {
    edited
        .split('\n')
        .filter(|line| !line.starts_with("# "))
        .collect::<Vec<_>>()
        .join("\n")
}
