//! Infinite hash table
//!
//! A hash table that resolves collisions by going one level deeper instead of probing, by implementing the [`InfiniteTableSupport`] trait.
//!
//! [`InfiniteTableSupport`]: ../../climb_api/climb/trait.InfiniteTableSupport.html
//!
//! Level `l` of the table looks at the `l`th character of a key.
//! Each level is a referential array of 27 slots, holding either a (key, value) pair or a deeper level.
//!
//! # Status
//!
//! COMPLETED: YES
//!
//! COMMENTS:
//!
//! Two different keys that hash the same on every level they share and then end on the same level (e.g. "A" and "[", as 65 and 91 are equal modulo 26) can never be separated.
//! Inserting the second one fails with `KeyCollision` and leaves the table untouched.
//!

use std::borrow::Borrow;
use std::fmt;

use climb_api::climb::InfiniteTableSupport;
use climb_api::types::ArrayR;
use tracing::debug;

use super::error_climb::ClimbError;

/// Name of the infinite hash table of this part, used by the tests.
pub type IHTName<K, V> = InfiniteHashTable<K, V>;

/// Number of slots on every level: 26 letter slots and 1 slot for keys ending on that level
pub const TABLE_SIZE: usize = 27;

/// A slot of one level of the table
#[derive(Debug)]
enum Slot<K, V> {
    /// A stored key and its value
    Pair(K, V),
    /// A deeper level, holding all keys starting with `prefix`
    Level {
        prefix: String,
        table: ArrayR<Slot<K, V>>,
    },
}

/// Infinite Hash Table.
///
/// Type Arguments:
///     - K: Key Type, borrowable as `str`.
///     - V: Value Type.
#[derive(Debug)]
pub struct InfiniteHashTable<K, V> {
    table: ArrayR<Slot<K, V>>,
    count: usize,
}

/// What a slot holds relative to the key being inserted
enum Found {
    Vacant,
    SameKey,
    OtherKey,
    Deeper,
}

fn not_found(key: &str) -> ClimbError {
    ClimbError::KeyNotFound(key.to_string())
}

/// Whether two distinct keys end up in different slots on some level starting at `level`
fn separable(a: &str, b: &str, level: usize) -> bool {
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    let mut l = level;
    loop {
        if hash_at(a, l) != hash_at(b, l) {
            return true;
        }
        if l >= len_a && l >= len_b {
            return false;
        }
        l += 1;
    }
}

fn hash_at(key: &str, level: usize) -> usize {
    match key.chars().nth(level) {
        Some(c) => c as usize % (TABLE_SIZE - 1),
        None => TABLE_SIZE - 1,
    }
}

/// Slot visiting order that lists keys alphabetically: keys ending here, then `a` to `z`
fn sorted_slots() -> impl Iterator<Item = usize> {
    let letters = (0..TABLE_SIZE - 1).map(|i| ('a' as usize + i) % (TABLE_SIZE - 1));
    std::iter::once(TABLE_SIZE - 1).chain(letters)
}

impl<K: Borrow<str> + Eq, V> InfiniteHashTable<K, V> {
    /// Create an empty table
    pub fn new() -> InfiniteHashTable<K, V> {
        InfiniteHashTable {
            table: ArrayR::new(TABLE_SIZE),
            count: 0,
        }
    }

    /// Insert into `table`, which sits at `level`. Returns true iff a new key was added.
    fn insert_at(
        table: &mut ArrayR<Slot<K, V>>,
        key: K,
        value: V,
        level: usize,
    ) -> Result<bool, ClimbError> {
        let pos = hash_at(key.borrow(), level);
        let found = match table.get(pos) {
            None => Found::Vacant,
            Some(Slot::Pair(k, _)) if k.borrow() == key.borrow() => Found::SameKey,
            Some(Slot::Pair(k, _)) => {
                if !separable(k.borrow(), key.borrow(), level) {
                    return Err(ClimbError::KeyCollision(
                        k.borrow().to_string(),
                        key.borrow().to_string(),
                    ));
                }
                Found::OtherKey
            }
            Some(Slot::Level { .. }) => Found::Deeper,
        };

        match found {
            Found::Vacant => {
                table.set(pos, Some(Slot::Pair(key, value)));
                Ok(true)
            }
            Found::SameKey => {
                table.set(pos, Some(Slot::Pair(key, value)));
                Ok(false)
            }
            Found::OtherKey => {
                // push the resident pair one level down, then continue there
                let prefix: String = key.borrow().chars().take(level + 1).collect();
                let mut sub = ArrayR::new(TABLE_SIZE);
                if let Some(Slot::Pair(k, v)) = table.take(pos) {
                    let sub_pos = hash_at(k.borrow(), level + 1);
                    sub.set(sub_pos, Some(Slot::Pair(k, v)));
                }
                let added = Self::insert_at(&mut sub, key, value, level + 1)?;
                table.set(pos, Some(Slot::Level { prefix, table: sub }));
                Ok(added)
            }
            Found::Deeper => match table.get_mut(pos) {
                Some(Slot::Level { table: sub, .. }) => {
                    Self::insert_at(sub, key, value, level + 1)
                }
                _ => Ok(false),
            },
        }
    }

    /// Remove from `table`, which sits at `level`, collapsing deeper levels that are left with a single pair
    fn remove_at(
        table: &mut ArrayR<Slot<K, V>>,
        key: &str,
        level: usize,
    ) -> Result<V, ClimbError> {
        let pos = hash_at(key, level);
        match table.get(pos) {
            None => return Err(not_found(key)),
            Some(Slot::Pair(k, _)) => {
                if k.borrow() != key {
                    return Err(not_found(key));
                }
                return match table.take(pos) {
                    Some(Slot::Pair(_, v)) => Ok(v),
                    _ => Err(not_found(key)),
                };
            }
            Some(Slot::Level { .. }) => {}
        }

        let (value, lone) = match table.get_mut(pos) {
            Some(Slot::Level { table: sub, .. }) => {
                let value = Self::remove_at(sub, key, level + 1)?;
                (value, Self::lone_pair(sub))
            }
            _ => return Err(not_found(key)),
        };
        if let Some(i) = lone {
            if let Some(Slot::Level { table: mut sub, prefix }) = table.take(pos) {
                debug!(prefix = %prefix, level = level + 1, "collapsing level");
                table.set(pos, sub.take(i));
            }
        }
        Ok(value)
    }

    /// Position of the only entry of `table`, if that entry is a pair
    fn lone_pair(table: &ArrayR<Slot<K, V>>) -> Option<usize> {
        let mut filled = (0..table.len()).filter(|&i| !table.is_vacant(i));
        match (filled.next(), filled.next()) {
            (Some(i), None) => match table.get(i) {
                Some(Slot::Pair(..)) => Some(i),
                _ => None,
            },
            _ => None,
        }
    }

    fn collect_sorted<'a>(table: &'a ArrayR<Slot<K, V>>, out: &mut Vec<&'a K>) {
        for pos in sorted_slots() {
            match table.get(pos) {
                Some(Slot::Pair(k, _)) => out.push(k),
                Some(Slot::Level { table: sub, .. }) => Self::collect_sorted(sub, out),
                None => {}
            }
        }
    }

    fn fmt_level(
        table: &ArrayR<Slot<K, V>>,
        depth: usize,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let indent = depth * 2;
        for pos in 0..table.len() {
            match table.get(pos) {
                Some(Slot::Pair(k, _)) => {
                    writeln!(f, "{:indent$}{}: {}", "", pos, k.borrow(), indent = indent)?
                }
                Some(Slot::Level { prefix, table: sub }) => {
                    writeln!(f, "{:indent$}{}: {}*", "", pos, prefix, indent = indent)?;
                    Self::fmt_level(sub, depth + 1, f)?;
                }
                None => {}
            }
        }
        Ok(())
    }
}

impl<K: Borrow<str> + Eq, V> Default for InfiniteHashTable<K, V> {
    fn default() -> Self {
        InfiniteHashTable::new()
    }
}

impl<K: Borrow<str> + Eq, V> InfiniteTableSupport<K, V> for InfiniteHashTable<K, V> {
    type Error = ClimbError;

    fn hash(key: &str, level: usize) -> usize {
        hash_at(key, level)
    }

    fn get(&self, key: &str) -> Result<&V, Self::Error> {
        let mut table = &self.table;
        let mut level = 0;
        loop {
            match table.get(hash_at(key, level)) {
                Some(Slot::Pair(k, v)) if k.borrow() == key => return Ok(v),
                Some(Slot::Level { table: sub, .. }) => {
                    table = sub;
                    level += 1;
                }
                _ => return Err(not_found(key)),
            }
        }
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), Self::Error> {
        if Self::insert_at(&mut self.table, key, value, 0)? {
            self.count += 1;
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<V, Self::Error> {
        let value = Self::remove_at(&mut self.table, key, 0)?;
        self.count -= 1;
        Ok(value)
    }

    fn get_location(&self, key: &str) -> Result<Vec<usize>, Self::Error> {
        let mut location = Vec::new();
        let mut table = &self.table;
        loop {
            let pos = hash_at(key, location.len());
            location.push(pos);
            match table.get(pos) {
                Some(Slot::Pair(k, _)) if k.borrow() == key => return Ok(location),
                Some(Slot::Level { table: sub, .. }) => table = sub,
                _ => return Err(not_found(key)),
            }
        }
    }

    fn sort_keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.count);
        Self::collect_sorted(&self.table, &mut keys);
        keys
    }

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    fn len(&self) -> usize {
        self.count
    }
}

impl<K: Borrow<str> + Eq, V> fmt::Display for InfiniteHashTable<K, V> {
    /// Every level on its own indentation, deeper levels marked with their prefix and a `*`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_level(&self.table, 0, f)
    }
}


// To run the tests of this part, run `cargo test --features="b"` in the `solution` directory.
#[cfg(all(test, any(feature = "b", feature = "all")))]
#[path = "../../api/climb-tests/b_test.rs"]
mod tests;
