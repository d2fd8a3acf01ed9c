//! Changelog rendering

use chrono::{Local, NaiveDate};
use tracing::{debug, instrument};

use clh_git::CommitRecord;

/// Render the accepted records into a changelog block.
///
/// The header line is `## [<version>] - <Y>-<M>-<D>` using the current
/// local date with no zero padding, followed by one `- <message> by
/// <author> in <commit>` line per record in accepted order, and two
/// trailing newlines. Trailing newlines are stripped from each message
/// before it is placed on its line.
#[instrument(skip(entries), fields(entry_count = entries.len()))]
pub fn render(version: &str, entries: &[CommitRecord]) -> String {
    render_at(version, entries, Local::now().date_naive())
}

fn render_at(version: &str, entries: &[CommitRecord], date: NaiveDate) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "## [{}] - {}\n",
        version,
        date.format("%Y-%-m-%-d")
    ));

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "- {} by {} in {}",
                entry.message.trim_end_matches('\n'),
                entry.author,
                entry.commit
            )
        })
        .collect();

    output.push_str(&lines.join("\n"));
    output.push_str("\n\n");

    debug!(output_len = output.len(), "changelog block rendered");
    output
}
