//! Hash table with linear probing, the building block for the tables of parts a and e.
//!
//! Keys are anything that can be borrowed as a string slice (e.g. `String` or `&'static str`).
//! Lookups take a plain `&str`, so a table with `String` keys can be queried without allocating.
//!
//! The table grows through a fixed sequence of sizes. After each insertion, once more than half of the slots are in use, all entries are moved to an array of the next size.
//! When the sequence is exhausted the table simply stops growing.

use super::error_given::{APIError, Result};
use super::types::ArrayR;
use std::borrow::Borrow;
use std::fmt;

/// Default size sequence for tables in this project.
/// No test case should exceed 1 million entries.
pub const TABLE_SIZES: [usize; 19] = [
    5, 13, 29, 53, 97, 193, 389, 769, 1543, 3079, 6151, 12289, 24593, 49157, 98317, 196613,
    393241, 786433, 1572869,
];

/// Base used by the polynomial hash
pub const HASH_BASE: u64 = 31;

/// Signature of a hash function: hash the given key for a table with `table_size` slots.
/// The result must be smaller than `table_size`.
pub type HashFn = fn(&str, usize) -> usize;

/// Universal polynomial string hash.
/// The multiplier `a` is itself updated modulo `table_size - 1` after every character.
///
/// :complexity: O(len(key))
pub fn default_hash(key: &str, table_size: usize) -> usize {
    let size = table_size as u64;
    let mut value: u64 = 0;
    let mut a: u64 = 31415;
    for c in key.chars() {
        value = (c as u64 + a * value) % size;
        a = a * HASH_BASE % (size - 1);
    }
    value as usize
}

/// Check a size sequence before a table is built from it.
/// Sizes must be at least 2, since the hash reduces modulo `size - 1`.
pub fn check_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.is_empty() {
        return Err(APIError::TableInput("size sequence is empty"));
    }
    if sizes.iter().any(|&s| s < 2) {
        return Err(APIError::TableInput("every table size must be at least 2"));
    }
    Ok(())
}

/// Linear probe hash table.
///
/// Type Arguments:
///     - K: Key Type, borrowable as `str`.
///     - V: Value Type.
///
/// Unless stated otherwise, all methods have O(1) complexity.
#[derive(Debug, Clone)]
pub struct LinearProbeTable<K, V> {
    array: ArrayR<(K, V)>,
    count: usize,
    sizes: Vec<usize>,
    size_index: usize,
    hasher: HashFn,
}

impl<K: Borrow<str> + Eq, V> LinearProbeTable<K, V> {
    /// Create a table following the default [`TABLE_SIZES`]
    pub fn new() -> LinearProbeTable<K, V> {
        LinearProbeTable {
            array: ArrayR::new(TABLE_SIZES[0]),
            count: 0,
            sizes: TABLE_SIZES.to_vec(),
            size_index: 0,
            hasher: default_hash,
        }
    }

    /// Create a table following a custom size sequence
    pub fn with_sizes(sizes: &[usize]) -> Result<LinearProbeTable<K, V>> {
        check_sizes(sizes)?;
        Ok(LinearProbeTable {
            array: ArrayR::new(sizes[0]),
            count: 0,
            sizes: sizes.to_vec(),
            size_index: 0,
            hasher: default_hash,
        })
    }

    /// Replace the hash function of this table.
    /// Only call this on an empty table; entries that are already stored are not moved.
    pub fn set_hasher(&mut self, hasher: HashFn) {
        self.hasher = hasher;
    }

    /// Hash a key for insert/retrieve/update into the table.
    /// The result is always a valid slot, even for a hash function that overshoots the table size.
    pub fn hash(&self, key: &str) -> usize {
        let size = self.table_size();
        (self.hasher)(key, size) % size
    }

    /// Current number of slots (different from the length)
    pub fn table_size(&self) -> usize {
        self.array.len()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.count
    }

    /// True iff nothing is stored
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Find the correct position for this key in the table using linear probing.
    ///
    /// Returns the slot holding `key` if there is one. When `is_insert` is set, the first empty slot on the probe sequence is returned instead of an error.
    ///
    /// :raises KeyNotFound: When the key is not in the table, but is_insert is false.
    /// :raises TableFull: When the table is full and cannot be inserted into.
    ///
    /// :complexity best: O(hash(key)) first position is empty
    /// :complexity worst: O(hash(key) + N*comp(K)) when we've searched the entire table
    pub fn linear_probe(&self, key: &str, is_insert: bool) -> Result<usize> {
        let size = self.table_size();
        let mut pos = self.hash(key);
        for _ in 0..size {
            match self.array.get(pos) {
                None if is_insert => return Ok(pos),
                None => return Err(APIError::KeyNotFound(key.to_string())),
                Some((k, _)) if k.borrow() == key => return Ok(pos),
                Some(_) => pos = (pos + 1) % size,
            }
        }
        if is_insert {
            Err(APIError::TableFull("no empty slot left to probe"))
        } else {
            Err(APIError::KeyNotFound(key.to_string()))
        }
    }

    /// Get the value stored under `key`
    ///
    /// :raises KeyNotFound: when the key doesn't exist.
    pub fn get(&self, key: &str) -> Result<&V> {
        let pos = self.linear_probe(key, false)?;
        match self.array.get(pos) {
            Some((_, v)) => Ok(v),
            None => Err(APIError::KeyNotFound(key.to_string())),
        }
    }

    /// Mutable access to the value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        let pos = self.linear_probe(key, false)?;
        match self.array.get_mut(pos) {
            Some((_, v)) => Ok(v),
            None => Err(APIError::KeyNotFound(key.to_string())),
        }
    }

    /// Checks to see if the given key is in the table
    pub fn contains(&self, key: &str) -> bool {
        self.linear_probe(key, false).is_ok()
    }

    /// Set a (key, value) pair in the table, replacing the value if the key is already present.
    /// Returns the replaced value, if any.
    ///
    /// :complexity: See linear probe, plus a rehash when the table gets more than half full.
    pub fn insert(&mut self, key: K, data: V) -> Result<Option<V>> {
        let pos = self.linear_probe(key.borrow(), true)?;
        let old = self.array.set(pos, Some((key, data))).map(|(_, v)| v);
        if old.is_none() {
            self.count += 1;
        }
        if self.count > self.table_size() / 2 {
            self.rehash()?;
        }
        Ok(old)
    }

    /// Delete a (key, value) pair from the table, returning the value.
    /// The remainder of the probe cluster is reinserted, so that later keys stay reachable.
    ///
    /// :raises KeyNotFound: when the key doesn't exist.
    ///
    /// :complexity best: O(hash(key)) deleting item is not probed and in correct spot.
    /// :complexity worst: O(N*hash(key)+N^2*comp(K)) deleting item is midway through large chain.
    pub fn remove(&mut self, key: &str) -> Result<V> {
        let pos = self.linear_probe(key, false)?;
        let (_, value) = self
            .array
            .take(pos)
            .ok_or_else(|| APIError::KeyNotFound(key.to_string()))?;
        self.count -= 1;

        let size = self.table_size();
        let mut position = (pos + 1) % size;
        while let Some((k, v)) = self.array.take(position) {
            let newpos = self.linear_probe(k.borrow(), true)?;
            self.array.set(newpos, Some((k, v)));
            position = (position + 1) % size;
        }
        Ok(value)
    }

    /// Move every entry to an array of the next size in the sequence.
    /// Does nothing once the sequence is exhausted.
    ///
    /// :complexity best: O(N*hash(K)) No probing.
    /// :complexity worst: O(N*hash(K) + N^2*comp(K)) Lots of probing.
    fn rehash(&mut self) -> Result<()> {
        if self.size_index + 1 >= self.sizes.len() {
            return Ok(());
        }
        self.size_index += 1;
        let old_array = std::mem::replace(&mut self.array, ArrayR::new(self.sizes[self.size_index]));
        for (k, v) in old_array.into_filled() {
            let pos = self.linear_probe(k.borrow(), true)?;
            self.array.set(pos, Some((k, v)));
        }
        Ok(())
    }

    /// Iterate over all (key, value) pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.array.iter().flatten().map(|(k, v)| (k, v))
    }

    /// All keys in slot order
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// All values in slot order
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// Consume the table, yielding its pairs in slot order
    pub fn into_pairs(self) -> impl Iterator<Item = (K, V)> {
        self.array.into_filled()
    }
}

impl<K: Borrow<str> + Eq, V> Default for LinearProbeTable<K, V> {
    fn default() -> Self {
        LinearProbeTable::new()
    }
}

impl<K: Borrow<str> + Eq + fmt::Display, V: fmt::Display> fmt::Display for LinearProbeTable<K, V> {
    /// One `(key,value)` line per stored pair
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in self.iter() {
            writeln!(f, "({},{})", k, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_letter(key: &str, size: usize) -> usize {
        key.chars().next().map_or(0, |c| c as usize % size)
    }

    #[test]
    fn default_hash_in_range() {
        for size in TABLE_SIZES.iter().take(6) {
            for key in &["", "a", "Tim", "Jen", "a much longer key with spaces"] {
                assert!(default_hash(key, *size) < *size);
            }
        }
        assert_eq!(default_hash("", 5), 0);
        // 'a' = 97
        assert_eq!(default_hash("a", 5), 97 % 5);
    }

    #[test]
    fn insert_get_replace() {
        let mut t: LinearProbeTable<String, u32> = LinearProbeTable::new();
        assert!(t.get("x").is_err());
        assert_eq!(t.insert("x".to_string(), 1).unwrap(), None);
        assert_eq!(t.insert("x".to_string(), 2).unwrap(), Some(1));
        assert_eq!(*t.get("x").unwrap(), 2);
        *t.get_mut("x").unwrap() += 5;
        assert_eq!(*t.get("x").unwrap(), 7);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn grows_past_half() {
        let mut t: LinearProbeTable<&str, u32> = LinearProbeTable::new();
        t.insert("a", 1).unwrap();
        t.insert("b", 2).unwrap();
        assert_eq!(t.table_size(), 5);
        t.insert("c", 3).unwrap();
        assert_eq!(t.table_size(), 13);
        for k in &["a", "b", "c"] {
            assert!(t.contains(k));
        }
    }

    #[test]
    fn stops_growing_at_end_of_sequence() {
        let mut t: LinearProbeTable<&str, u32> = LinearProbeTable::with_sizes(&[3]).unwrap();
        t.insert("a", 1).unwrap();
        t.insert("b", 2).unwrap();
        t.insert("c", 3).unwrap();
        assert_eq!(t.table_size(), 3);
        assert!(matches!(t.insert("d", 4), Err(APIError::TableFull(_))));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn bad_sizes() {
        assert!(LinearProbeTable::<&str, u32>::with_sizes(&[]).is_err());
        assert!(LinearProbeTable::<&str, u32>::with_sizes(&[5, 1]).is_err());
    }

    #[test]
    fn remove_keeps_cluster_reachable() {
        let mut t: LinearProbeTable<&str, u32> = LinearProbeTable::with_sizes(&[11]).unwrap();
        t.set_hasher(first_letter);
        // 'a' = 97 = 9 mod 11, so all three collide
        t.insert("ab", 1).unwrap();
        t.insert("ac", 2).unwrap();
        t.insert("ad", 3).unwrap();
        assert_eq!(t.linear_probe("ad", false).unwrap(), 0);

        assert_eq!(t.remove("ab").unwrap(), 1);
        assert!(t.remove("ab").is_err());
        assert_eq!(t.linear_probe("ac", false).unwrap(), 9);
        assert_eq!(t.linear_probe("ad", false).unwrap(), 10);
        assert_eq!(*t.get("ad").unwrap(), 3);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn display_lists_pairs() {
        let mut t: LinearProbeTable<&str, u32> = LinearProbeTable::with_sizes(&[11]).unwrap();
        t.set_hasher(first_letter);
        t.insert("a", 1).unwrap();
        t.insert("b", 2).unwrap();
        assert_eq!(t.to_string(), "(a,1)\n(b,2)\n");
        assert_eq!(t.keys(), vec![&"a", &"b"]);
        assert_eq!(t.values(), vec![&1, &2]);
    }

    #[test]
    fn oversized_hash_wraps() {
        // ignores the table size on purpose
        fn raw_code(key: &str, _size: usize) -> usize {
            key.chars().next().map_or(0, |c| c as usize)
        }
        let mut t: LinearProbeTable<&str, u32> = LinearProbeTable::with_sizes(&[5]).unwrap();
        t.set_hasher(raw_code);
        assert_eq!(t.hash("a"), 97 % 5);
        t.insert("a", 1).unwrap();
        t.insert("z", 2).unwrap();
        assert_eq!(*t.get("z").unwrap(), 2);
        assert_eq!(t.remove("a").unwrap(), 1);
        assert!(!t.contains("a"));
    }
}
