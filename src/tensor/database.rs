use std::collections::HashMap;

/// Deduplicated registry of leaf prompt texts.
///
/// Indices are stable and follow first-encounter order; equal texts share one index so
/// the encoder sees every distinct prompt once.
#[derive(Debug, Default, Clone)]
pub struct PromptDatabase {
    index_by_text: HashMap<String, usize>,
    texts: Vec<String>,
}

impl PromptDatabase {
    /// Empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index for `text`, registering it on first sight.
    pub fn register(&mut self, text: &str) -> usize {
        if let Some(&index) = self.index_by_text.get(text) {
            return index;
        }
        let index = self.texts.len();
        self.texts.push(text.to_owned());
        self.index_by_text.insert(text.to_owned(), index);
        index
    }

    /// Index of an already registered text.
    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.index_by_text.get(text).copied()
    }

    /// Text registered at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.texts.get(index).map(String::as_str)
    }

    /// Registered texts in index order.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Number of distinct texts.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tensor/database.rs"]
mod tests;
