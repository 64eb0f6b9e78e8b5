use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::fmt;

/// One emoji glyph and the keywords it can be found by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiEntry {
    pub emoji: String,
    pub keywords: Vec<String>,
}

/// The keyword-indexed emoji table, in the order the entries appear in the
/// source JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<EmojiEntry>,
}

impl Dataset {
    /// Build a dataset from `(emoji, keywords)` pairs. A repeated emoji keeps
    /// its first position and takes the later keyword list.
    pub fn from_pairs<I, E, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (E, Vec<K>)>,
        E: Into<String>,
        K: Into<String>,
    {
        let mut builder = DatasetBuilder::default();
        for (emoji, keywords) in pairs {
            builder.insert(
                emoji.into(),
                keywords.into_iter().map(Into::into).collect(),
            );
        }
        builder.finish()
    }

    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn keywords(&self, emoji: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.emoji == emoji)
            .map(|entry| entry.keywords.as_slice())
    }
}

#[derive(Default)]
struct DatasetBuilder {
    entries: Vec<EmojiEntry>,
    positions: HashMap<String, usize>,
}

impl DatasetBuilder {
    fn insert(&mut self, emoji: String, keywords: Vec<String>) {
        match self.positions.get(&emoji) {
            Some(&pos) => self.entries[pos].keywords = keywords,
            None => {
                self.positions.insert(emoji.clone(), self.entries.len());
                self.entries.push(EmojiEntry { emoji, keywords });
            }
        }
    }

    fn finish(self) -> Dataset {
        Dataset {
            entries: self.entries,
        }
    }
}

struct DatasetVisitor;

impl<'de> Visitor<'de> for DatasetVisitor {
    type Value = Dataset;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from emoji to a list of keywords")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut builder = DatasetBuilder::default();
        if let Some(hint) = access.size_hint() {
            builder.entries.reserve(hint);
        }

        while let Some((emoji, keywords)) = access.next_entry::<String, Vec<String>>()? {
            builder.insert(emoji, keywords);
        }

        Ok(builder.finish())
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DatasetVisitor)
    }
}
