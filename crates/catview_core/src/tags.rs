/// Synthetic catalog entry meaning "no tag filter applied".
pub const SENTINEL_TAG: &str = "Any";

/// Tags offered by the remote service, always led by [`SENTINEL_TAG`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCatalog {
    tags: Vec<String>,
}

impl Default for TagCatalog {
    fn default() -> Self {
        Self {
            tags: vec![SENTINEL_TAG.to_string()],
        }
    }
}

impl TagCatalog {
    /// Builds a catalog from fetched tags. Blank entries are dropped and the
    /// sentinel is placed first exactly once.
    pub fn new(tags: impl IntoIterator<Item = String>) -> Self {
        let mut catalog = Self::default();
        catalog.tags.extend(
            tags.into_iter()
                .filter(|tag| !tag.trim().is_empty() && tag != SENTINEL_TAG),
        );
        catalog
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn filter(&self, typed_prefix: &str) -> Vec<String> {
        filter_tags(&self.tags, typed_prefix)
    }
}

/// Case-insensitive prefix filter. An empty prefix returns the whole catalog.
pub fn filter_tags(catalog: &[String], typed_prefix: &str) -> Vec<String> {
    if typed_prefix.is_empty() {
        return catalog.to_vec();
    }
    let needle = typed_prefix.to_lowercase();
    catalog
        .iter()
        .filter(|tag| tag.to_lowercase().starts_with(&needle))
        .cloned()
        .collect()
}
