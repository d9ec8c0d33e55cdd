use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Multi-valued index of keys into an arena of entries.
///
/// Positions are kept in insertion order and never removed.
#[derive(Debug, Clone)]
pub struct Index<K> {
    entries: BTreeMap<K, Vec<usize>>,
}

impl<K> Index<K> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: K, position: usize)
    where
        K: Ord,
    {
        self.entries.entry(key).or_default().push(position);
    }

    pub fn get<Q>(&self, key: &Q) -> &[usize]
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K> Default for Index<K> {
    fn default() -> Self {
        Self::new()
    }
}
