//! Double key hash table
//!
//! A hash table indexed by a pair of keys, by implementing the [`DoubleKeySupport`] trait.
//! The top-level table is probed linearly with `hash1`, and every occupied top-level slot holds the first key together with its own [`LinearProbeTable`] for the second keys, probed with `hash2`.
//!
//! [`DoubleKeySupport`]: ../../climb_api/climb/trait.DoubleKeySupport.html
//! [`LinearProbeTable`]: ../../climb_api/hash_table/struct.LinearProbeTable.html
//!
//! # Status
//!
//! COMPLETED: YES
//!
//! COMMENTS:
//!
//! When the top-level table grows, the sub-tables are moved over as they are instead of being rebuilt pair by pair, so they keep their current size.
//!

use std::borrow::Borrow;
use std::fmt;
use std::mem;

use climb_api::climb::DoubleKeySupport;
use climb_api::error_given::APIError;
use climb_api::hash_table::{check_sizes, default_hash, HashFn, LinearProbeTable, TABLE_SIZES};
use climb_api::types::ArrayR;
use tracing::debug;

use super::error_climb::ClimbError;

/// Name of the double key table of this part, used by the tests so they do not depend on the concrete type name.
pub type DKTName<K1, K2, V> = DoubleKeyTable<K1, K2, V>;

/// Double Hash Table.
///
/// Type Arguments:
///     - K1: 1st Key Type, borrowable as `str`.
///     - K2: 2nd Key Type, borrowable as `str`.
///     - V:  Value Type.
#[derive(Debug)]
pub struct DoubleKeyTable<K1, K2, V> {
    /// top-level slots: first key and the sub-table of its second keys
    array: ArrayR<(K1, LinearProbeTable<K2, V>)>,
    /// number of key pairs
    count: usize,
    /// number of occupied top-level slots
    top_count: usize,
    top_sizes: Vec<usize>,
    bottom_sizes: Vec<usize>,
    size_index: usize,
    hash1_fn: HashFn,
    hash2_fn: HashFn,
}

impl<K1, K2, V> DoubleKeyTable<K1, K2, V>
where
    K1: Borrow<str> + Eq,
    K2: Borrow<str> + Eq,
{
    /// Create a table where both levels follow the default size sequence
    pub fn new() -> DoubleKeyTable<K1, K2, V> {
        DoubleKeyTable {
            array: ArrayR::new(TABLE_SIZES[0]),
            count: 0,
            top_count: 0,
            top_sizes: TABLE_SIZES.to_vec(),
            bottom_sizes: TABLE_SIZES.to_vec(),
            size_index: 0,
            hash1_fn: default_hash,
            hash2_fn: default_hash,
        }
    }

    /// Replace the hash function for first keys. Only call this on an empty table.
    pub fn set_hash1(&mut self, hash1: HashFn) {
        self.hash1_fn = hash1;
    }

    /// Replace the hash function for second keys. Sub-tables created from now on use it, so only call this on an empty table.
    pub fn set_hash2(&mut self, hash2: HashFn) {
        self.hash2_fn = hash2;
    }

    /// Iterate over all top-level keys in slot order
    pub fn iter_keys(&self) -> impl Iterator<Item = &K1> + '_ {
        self.array.iter().flatten().map(|(k1, _)| k1)
    }

    /// Iterate over the keys of `key1`'s sub-table in slot order
    pub fn iter_keys_in(&self, key1: &str) -> Result<impl Iterator<Item = &K2> + '_, ClimbError> {
        Ok(self.sub_table(key1)?.iter().map(|(k2, _)| k2))
    }

    /// Iterate over all values, top-level slot order first and sub-table slot order second
    pub fn iter_values(&self) -> impl Iterator<Item = &V> + '_ {
        self.array
            .iter()
            .flatten()
            .flat_map(|(_, sub)| sub.iter().map(|(_, v)| v))
    }

    /// Iterate over the values in `key1`'s sub-table in slot order
    pub fn iter_values_in(&self, key1: &str) -> Result<impl Iterator<Item = &V> + '_, ClimbError> {
        Ok(self.sub_table(key1)?.iter().map(|(_, v)| v))
    }

    /// Linear probing on the top-level table only
    fn probe_top(&self, key1: &str, is_insert: bool) -> Result<usize, ClimbError> {
        let size = self.table_size();
        let mut pos = self.hash1(key1);
        for _ in 0..size {
            match self.array.get(pos) {
                None if is_insert => return Ok(pos),
                None => return Err(ClimbError::KeyNotFound(key1.to_string())),
                Some((k1, _)) if k1.borrow() == key1 => return Ok(pos),
                Some(_) => pos = (pos + 1) % size,
            }
        }
        if is_insert {
            Err(APIError::TableFull("no empty top-level slot left to probe").into())
        } else {
            Err(ClimbError::KeyNotFound(key1.to_string()))
        }
    }

    fn sub_table(&self, key1: &str) -> Result<&LinearProbeTable<K2, V>, ClimbError> {
        let pos1 = self.probe_top(key1, false)?;
        self.array
            .get(pos1)
            .map(|(_, sub)| sub)
            .ok_or_else(|| ClimbError::KeyNotFound(key1.to_string()))
    }

    fn new_sub_table(&self) -> Result<LinearProbeTable<K2, V>, ClimbError> {
        let mut sub = LinearProbeTable::with_sizes(&self.bottom_sizes)?;
        sub.set_hasher(self.hash2_fn);
        Ok(sub)
    }

    /// Grow the top-level table to the next size and re-place every sub-table.
    /// Does nothing once the size sequence is exhausted.
    ///
    /// :complexity best: O(N*hash(K)) No probing.
    /// :complexity worst: O(N*hash(K) + N^2*comp(K)) Lots of probing.
    fn rehash(&mut self) -> Result<(), ClimbError> {
        if self.size_index + 1 >= self.top_sizes.len() {
            return Ok(());
        }
        self.size_index += 1;
        let new_size = self.top_sizes[self.size_index];
        debug!(
            from = self.table_size(),
            to = new_size,
            "growing double key table"
        );
        let old_array = mem::replace(&mut self.array, ArrayR::new(new_size));
        for (k1, sub) in old_array.into_filled() {
            let pos = self.probe_top(k1.borrow(), true)?;
            self.array.set(pos, Some((k1, sub)));
        }
        Ok(())
    }
}

impl<K1, K2, V> Default for DoubleKeyTable<K1, K2, V>
where
    K1: Borrow<str> + Eq,
    K2: Borrow<str> + Eq,
{
    fn default() -> Self {
        DoubleKeyTable::new()
    }
}

impl<K1, K2, V> DoubleKeySupport<K1, K2, V> for DoubleKeyTable<K1, K2, V>
where
    K1: Borrow<str> + Eq,
    K2: Borrow<str> + Eq,
{
    type Error = ClimbError;

    fn with_sizes(
        sizes: Option<&[usize]>,
        internal_sizes: Option<&[usize]>,
    ) -> Result<Self, Self::Error> {
        let top_sizes = sizes.unwrap_or(&TABLE_SIZES).to_vec();
        let bottom_sizes = internal_sizes.unwrap_or(&TABLE_SIZES).to_vec();
        check_sizes(&top_sizes)?;
        check_sizes(&bottom_sizes)?;
        Ok(DoubleKeyTable {
            array: ArrayR::new(top_sizes[0]),
            top_sizes,
            bottom_sizes,
            ..DoubleKeyTable::new()
        })
    }

    fn hash1(&self, key1: &str) -> usize {
        let size = self.table_size();
        (self.hash1_fn)(key1, size) % size
    }

    fn hash2(&self, key2: &str, sub_table: &LinearProbeTable<K2, V>) -> usize {
        sub_table.hash(key2)
    }

    fn linear_probe(
        &self,
        key1: &str,
        key2: &str,
        is_insert: bool,
    ) -> Result<(usize, usize), Self::Error> {
        let pos1 = self.probe_top(key1, is_insert)?;
        match self.array.get(pos1) {
            Some((_, sub)) => Ok((pos1, sub.linear_probe(key2, is_insert)?)),
            // only reachable when inserting: key2 would land on its hash in a fresh sub-table
            None => {
                let size = self.bottom_sizes[0];
                Ok((pos1, (self.hash2_fn)(key2, size) % size))
            }
        }
    }

    fn keys(&self) -> Vec<&K1> {
        self.iter_keys().collect()
    }

    fn keys_in(&self, key1: &str) -> Result<Vec<&K2>, Self::Error> {
        Ok(self.iter_keys_in(key1)?.collect())
    }

    fn values(&self) -> Vec<&V> {
        self.iter_values().collect()
    }

    fn values_in(&self, key1: &str) -> Result<Vec<&V>, Self::Error> {
        Ok(self.iter_values_in(key1)?.collect())
    }

    fn contains(&self, key1: &str, key2: &str) -> bool {
        self.get(key1, key2).is_ok()
    }

    fn get(&self, key1: &str, key2: &str) -> Result<&V, Self::Error> {
        Ok(self.sub_table(key1)?.get(key2)?)
    }

    fn insert(&mut self, key1: K1, key2: K2, data: V) -> Result<(), Self::Error> {
        let pos1 = self.probe_top(key1.borrow(), true)?;
        if self.array.is_vacant(pos1) {
            let sub = self.new_sub_table()?;
            self.array.set(pos1, Some((key1, sub)));
            self.top_count += 1;
        }

        let (_, sub) = self
            .array
            .get_mut(pos1)
            .ok_or(APIError::TableInput("top-level slot is empty after probing"))?;
        if sub.insert(key2, data)?.is_none() {
            self.count += 1;
        }

        if self.top_count > self.table_size() / 2 {
            self.rehash()?;
        }
        Ok(())
    }

    fn remove(&mut self, key1: &str, key2: &str) -> Result<V, Self::Error> {
        let pos1 = self.probe_top(key1, false)?;
        let sub = match self.array.get_mut(pos1) {
            Some((_, sub)) => sub,
            None => return Err(ClimbError::KeyNotFound(key1.to_string())),
        };

        if sub.len() > 1 {
            let value = sub.remove(key2)?;
            self.count -= 1;
            return Ok(value);
        }

        // Last pair under key1: check it is the right one before dropping the whole slot
        sub.linear_probe(key2, false)?;
        let (_, mut sub) = self
            .array
            .take(pos1)
            .ok_or_else(|| ClimbError::KeyNotFound(key1.to_string()))?;
        let value = sub.remove(key2)?;
        self.count -= 1;
        self.top_count -= 1;

        // Start moving over the cluster
        let size = self.table_size();
        let mut position = (pos1 + 1) % size;
        while let Some((k1, moved)) = self.array.take(position) {
            let newpos = self.probe_top(k1.borrow(), true)?;
            self.array.set(newpos, Some((k1, moved)));
            position = (position + 1) % size;
        }
        Ok(value)
    }

    fn table_size(&self) -> usize {
        self.array.len()
    }

    fn len(&self) -> usize {
        self.count
    }
}

impl<K1, K2, V> fmt::Display for DoubleKeyTable<K1, K2, V>
where
    K1: Borrow<str> + Eq + fmt::Display,
    K2: Borrow<str> + Eq + fmt::Display,
    V: fmt::Display,
{
    /// One line per first key, listing the pairs of its sub-table
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k1, sub) in self.array.iter().flatten() {
            let pairs: Vec<String> = sub.iter().map(|(k2, v)| format!("({},{})", k2, v)).collect();
            writeln!(f, "({},[{}])", k1, pairs.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod table_tests {
    use super::*;

    #[test]
    fn fresh_table() {
        let dt: DoubleKeyTable<String, String, u32> = DoubleKeyTable::new();
        assert_eq!(dt.table_size(), 5);
        assert_eq!(dt.len(), 0);
        assert!(dt.keys().is_empty());
        assert!(dt.values().is_empty());
        assert!(dt.keys_in("nobody").is_err());
        assert!(dt.get("a", "b").unwrap_err().is_key_not_found());
    }

    #[test]
    fn bad_sizes() {
        assert!(DoubleKeyTable::<&str, &str, u32>::with_sizes(Some(&[]), None).is_err());
        assert!(DoubleKeyTable::<&str, &str, u32>::with_sizes(None, Some(&[1])).is_err());
        let dt = DoubleKeyTable::<&str, &str, u32>::with_sizes(Some(&[7]), Some(&[3])).unwrap();
        assert_eq!(dt.table_size(), 7);
    }

    #[test]
    fn owned_keys_and_replace() {
        let mut dt: DoubleKeyTable<String, String, u32> = DoubleKeyTable::new();
        dt.insert("Tim".to_string(), "Jen".to_string(), 1).unwrap();
        dt.insert("Tim".to_string(), "Jen".to_string(), 2).unwrap();
        assert_eq!(dt.len(), 1);
        assert_eq!(*dt.get("Tim", "Jen").unwrap(), 2);
        assert!(!dt.contains("Tim", "Bob"));
        assert!(!dt.contains("Jen", "Tim"));
    }

    #[test]
    fn display() {
        let mut dt: DoubleKeyTable<&str, &str, u32> = DoubleKeyTable::new();
        dt.insert("Tim", "Jen", 1).unwrap();
        assert_eq!(dt.to_string(), "(Tim,[(Jen,1)])\n");
    }

    #[test]
    fn oversized_hashes_wrap() {
        fn huge(key: &str, _size: usize) -> usize {
            usize::MAX - key.len()
        }
        let mut dt: DoubleKeyTable<&str, &str, u32> =
            DoubleKeyTable::with_sizes(Some(&[7]), Some(&[5])).unwrap();
        dt.set_hash1(huge);
        dt.set_hash2(huge);
        assert!(dt.hash1("Tim") < 7);
        assert!(dt.linear_probe("Tim", "Jen", true).unwrap().1 < 5);
        dt.insert("Tim", "Jen", 1).unwrap();
        dt.insert("Tim", "Bob", 2).unwrap();
        dt.insert("Amy", "Ben", 3).unwrap();
        assert_eq!(*dt.get("Tim", "Bob").unwrap(), 2);
        assert_eq!(dt.remove("Amy", "Ben").unwrap(), 3);
        assert_eq!(dt.len(), 2);
    }
}

// The tests for this part live in the API crate, next to those of the other parts.
// To run them, run the command `cargo test --features="a"` in the `solution` directory, or `cargo test --features="all"` to run the tests of every part.
#[cfg(all(test, any(feature = "a", feature = "all")))]
#[path = "../../api/climb-tests/a_test.rs"]
mod tests;
