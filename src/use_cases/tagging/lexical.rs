use std::collections::HashSet;

use super::vocabulary::{KEYWORD_MAPPINGS, VOCABULARY};

/// Substring-based tag detection, no scoring. Expects `text` to be lowercased
/// by the caller. A tag matches if its literal form or its hyphens-to-spaces
/// form occurs in the text, or if any of its mapped keyword phrases does.
pub fn lexical_tags(text: &str) -> HashSet<&'static str> {
    let mut matched = HashSet::new();

    for tag in VOCABULARY {
        if text.contains(&tag.replace('-', " ")) || text.contains(tag) {
            matched.insert(*tag);
        }
    }

    for (tag, keywords) in KEYWORD_MAPPINGS.iter() {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            matched.insert(tag);
        }
    }

    matched
}
