use std::collections::{BTreeSet, HashSet};

mod classifier;
mod lexical;
mod vocabulary;

pub use classifier::RemoteClassifier;
pub use vocabulary::VOCABULARY;

/// Computes the tag set for a grant: lexical matches unioned with remote
/// suggestions, deduplicated and filtered to the vocabulary. Never fails;
/// a disabled or failing classifier just contributes nothing.
#[derive(Clone, Default)]
pub struct TaggingService {
    classifier: Option<RemoteClassifier>,
}

impl TaggingService {
    pub fn new(classifier: Option<RemoteClassifier>) -> Self {
        Self { classifier }
    }

    pub async fn assign_tags(&self, name: &str, description: &str) -> Vec<String> {
        let full_text = format!("{} {}", name, description).to_lowercase();
        let lexical = lexical::lexical_tags(&full_text);

        let remote = match &self.classifier {
            Some(classifier) => classifier.classify(name, description).await,
            None => Vec::new(),
        };

        merge_tags(lexical, remote)
    }
}

fn merge_tags(lexical: HashSet<&'static str>, remote: Vec<String>) -> Vec<String> {
    let mut tags: BTreeSet<String> = lexical.into_iter().map(str::to_string).collect();
    tags.extend(remote);
    tags.into_iter()
        .filter(|tag| vocabulary::is_in_vocabulary(tag))
        .collect()
}
