use serde::Serialize;

/// Static catalog entry: an accession and the name it is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LookupEntry {
    pub id: &'static str,
    pub name: &'static str,
}

impl LookupEntry {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }

    /// Case-insensitive substring match against the id or the name.
    ///
    /// `needle` must already be lowercased.
    fn matches_lowered(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle) || self.name.to_lowercase().contains(needle)
    }
}

/// Entries matching `term`, in catalog order. An empty term matches all.
pub fn search<'a>(entries: &'a [LookupEntry], term: &str) -> Vec<&'a LookupEntry> {
    let needle = term.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.matches_lowered(&needle))
        .collect()
}
