use crate::compat::Vec;

/// Key/value pairs decomposed from a query string.
///
/// Takes the `query` field of a parsed address (a leading '?' is tolerated,
/// so the `search` form works too) and splits it into ordered key/value
/// pairs. Keys and values are kept verbatim: no percent-decoding and no '+'
/// translation. Duplicate keys are preserved in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> QueryString<'a> {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    /// Pairs split at the first '='; a pair without '=' keeps an empty
    /// value. Empty pairs ("a&&b") are skipped.
    pub fn parse(query: &'a str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (key, value),
                None => (pair, ""),
            })
            .collect();

        Self { pairs }
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, v)| v)
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&'a str> {
        self.pairs
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|&(_, v)| v)
            .collect()
    }

    /// Check if a key exists.
    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    /// Get the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over all key/value pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.pairs.iter().map(|&(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.pairs.iter().map(|&(_, v)| v)
    }
}
