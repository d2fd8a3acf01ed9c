//! Log splitting
//!
//! Turns the raw text of `git log` into an ordered sequence of
//! [`CommitRecord`]s with a single forward pass over the lines.

use tracing::debug;

use crate::types::CommitRecord;

/// Split raw git log text into commit records.
///
/// Lines are classified by prefix: `commit ` starts a new record once the
/// current one has its commit, author, and date filled; `Author: ` and
/// `Date: ` set their fields; everything else (blank lines included) is
/// accumulated into the message, left-trimmed, one newline per line.
///
/// The trailing accumulator state is always flushed, so any input yields at
/// least one record. Empty input yields a single all-empty record. A block
/// whose author or date line is missing does not finalize on the next
/// `commit ` line and merges into the following record.
pub fn split_log(data: &str) -> Vec<CommitRecord> {
    let mut records = Vec::new();

    let mut commit = String::new();
    let mut author = String::new();
    let mut date = String::new();
    let mut message = String::new();

    for line in data.lines() {
        if let Some(rest) = line.strip_prefix("commit ") {
            if !commit.is_empty() && !author.is_empty() && !date.is_empty() {
                records.push(CommitRecord {
                    commit: std::mem::take(&mut commit),
                    author: std::mem::take(&mut author),
                    date: std::mem::take(&mut date),
                    message: std::mem::take(&mut message),
                });
            }
            commit = rest.trim_start().to_string();
        } else if let Some(rest) = line.strip_prefix("Author: ") {
            author = rest.trim_start().to_string();
        } else if let Some(rest) = line.strip_prefix("Date: ") {
            date = rest.trim_start().to_string();
        } else {
            message.push_str(line.trim_start());
            message.push('\n');
        }
    }

    // Whatever is left always becomes the final record, even for empty input.
    records.push(CommitRecord {
        commit,
        author,
        date,
        message,
    });

    debug!(record_count = records.len(), "split git log");
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_commit() {
        let records = split_log("commit abc123\nAuthor: Jane\nDate: Mon Jan 1\n    Fix bug\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].commit, "abc123");
        assert_eq!(records[0].author, "Jane");
        assert_eq!(records[0].date, "Mon Jan 1");
        assert_eq!(records[0].message, "Fix bug\n");
    }

    #[test]
    fn test_two_commits_in_order() {
        let data = "commit aaa111\n\
                    Author: Jane <jane@example.com>\n\
                    Date: Mon Jan 1 10:00:00 2024 +0000\n\
                    \n\
                    \x20   Add feature\n\
                    \n\
                    commit bbb222\n\
                    Author: John <john@example.com>\n\
                    Date: Sun Dec 31 09:00:00 2023 +0000\n\
                    \n\
                    \x20   Fix crash\n";

        let records = split_log(data);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].commit, "aaa111");
        assert_eq!(records[0].author, "Jane <jane@example.com>");
        assert_eq!(records[0].date, "Mon Jan 1 10:00:00 2024 +0000");
        assert_eq!(records[0].message, "\nAdd feature\n\n");

        assert_eq!(records[1].commit, "bbb222");
        assert_eq!(records[1].author, "John <john@example.com>");
        assert_eq!(records[1].message, "\nFix crash\n");
    }

    #[test]
    fn test_empty_input_yields_one_empty_record() {
        let records = split_log("");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], CommitRecord::default());
    }

    #[test]
    fn test_missing_author_merges_into_next_record() {
        let data = "commit aaa111\n\
                    Date: Mon Jan 1\n\
                    \x20   No author here\n\
                    commit bbb222\n\
                    Author: John\n\
                    Date: Sun Dec 31\n\
                    \x20   Complete block\n";

        let records = split_log(data);
        // the first block never satisfies the finalize condition, so its
        // commit id is overwritten instead of split off
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].commit, "bbb222");
        assert_eq!(records[0].author, "John");
        assert_eq!(records[0].date, "Sun Dec 31");
        assert_eq!(records[0].message, "No author here\nComplete block\n");
    }

    #[test]
    fn test_message_lines_are_left_trimmed() {
        let data = "commit abc\nAuthor: A\nDate: D\n        deeply indented\n\ttabbed\n";
        let records = split_log(data);
        assert_eq!(records[0].message, "deeply indented\ntabbed\n");
    }
}
