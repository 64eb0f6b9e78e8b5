use crate::interactive::domain::dataset::Dataset;
use crate::interactive::domain::fold::FastLowercase;

struct IndexedEmoji {
    emoji: String,
    folded_keywords: Vec<String>,
}

/// Substring search over a loaded dataset.
///
/// Keywords are folded once when the index is built. Results always come back
/// in dataset order; there is no ranking.
pub struct SearchIndex {
    items: Vec<IndexedEmoji>,
}

impl SearchIndex {
    pub fn new(dataset: &Dataset) -> Self {
        let items = dataset
            .entries()
            .iter()
            .map(|entry| IndexedEmoji {
                emoji: entry.emoji.clone(),
                folded_keywords: entry
                    .keywords
                    .iter()
                    .map(|keyword| keyword.fast_to_lowercase())
                    .collect(),
            })
            .collect();

        Self { items }
    }

    /// Emoji whose keywords contain `query`, ignoring case. An empty query
    /// returns every emoji.
    pub fn filter(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return self.items.iter().map(|item| item.emoji.clone()).collect();
        }

        let needle = query.fast_to_lowercase();

        self.items
            .iter()
            .filter(|item| {
                item.folded_keywords
                    .iter()
                    .any(|keyword| keyword.contains(needle.as_str()))
            })
            .map(|item| item.emoji.clone())
            .collect()
    }
}
