//! Reshapes the flat tree listing into the topic → test hierarchy.
//!
//! The repository lays tests out as `<topic>/<test>.html`; everything else
//! in the tree (directories, readme files, assets) is ignored.

use crate::models::{EntryKind, TestReference, Topic, Topics, TreeItem};

/// Turn a raw path segment into a display label.
///
/// Underscores become spaces and the first letter of every word is
/// upper-cased; the rest of each word keeps its original case.
/// `css_selectors` → `Css Selectors`.
pub fn format_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word_start = true;
    for ch in raw.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Group qualifying tree items into topics, preserving listing order.
///
/// Only `blob` entries whose path ends in `.html` and has at least two
/// segments qualify; anything else is dropped without comment. The first
/// segment keys the topic, the second names the test, and the full path is
/// kept so the content route can fetch the file later. Duplicate paths are
/// kept as-is; the upstream listing is trusted.
pub fn classify_tree(items: &[TreeItem]) -> Topics {
    let mut topics = Topics::new();

    for item in items {
        if item.kind != EntryKind::Blob || !item.path.ends_with(".html") {
            continue;
        }

        let parts: Vec<&str> = item.path.split('/').collect();
        if parts.len() < 2 {
            continue;
        }

        let topic_key = parts[0];
        let file_name = parts[1];

        let topic = topics.get_or_insert_with(topic_key, || Topic {
            name: format_name(topic_key),
            tests: Vec::new(),
        });

        let test_name = file_name.strip_suffix(".html").unwrap_or(file_name);
        topic.tests.push(TestReference {
            name: format_name(test_name),
            path: item.path.clone(),
        });
    }

    topics
}
