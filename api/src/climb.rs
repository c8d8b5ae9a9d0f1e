//! Collection of all traits you will be implementing throughout the different parts of the assignment.
//! Do not just blindly implement the below traits; in most cases, it is a good idea to define auxiliary functions, e.g. to find the sub-table for a top-level key, or to move an entry one level down.
//!
//! Part N of the assignment corresponds to feature N of the alphabet when running the tests (part 1 is feature `a`, and so on).

use super::hash_table::LinearProbeTable;
use super::personality::WalkerPersonality;
use super::types::{Mountain, TrailLike};
use std::borrow::Borrow;
use std::error;

/// Part 1: a hash table indexed by a *pair* of keys.
///
/// The top-level table is a linear probe table that stores, for every first key, a [`LinearProbeTable`] indexed by the second key.
/// Both levels hash their keys with the polynomial hash by default.
///
/// Unless stated otherwise, all methods have O(1) complexity.
pub trait DoubleKeySupport<K1, K2, V>: Sized
where
    K1: Borrow<str> + Eq,
    K2: Borrow<str> + Eq,
{
    /// The type of the errors of your implementation.
    /// Read more about how to define your own errors in the documentation of [`error_given`](../error_given/index.html).
    type Error: error::Error;

    /// Create a table. `sizes` is the size sequence of the top-level table, `internal_sizes` the one of every sub-table.
    /// Both default to [`TABLE_SIZES`](../hash_table/constant.TABLE_SIZES.html).
    fn with_sizes(
        sizes: Option<&[usize]>,
        internal_sizes: Option<&[usize]>,
    ) -> Result<Self, Self::Error>;

    /// Hash the 1st key for insert/retrieve/update into the top-level table.
    ///
    /// :complexity: O(len(key))
    fn hash1(&self, key1: &str) -> usize;

    /// Hash the 2nd key for insert/retrieve/update into the given sub-table.
    ///
    /// :complexity: O(len(key))
    fn hash2(&self, key2: &str, sub_table: &LinearProbeTable<K2, V>) -> usize;

    /// Find the positions `(pos1, pos2)` for this key pair, using linear probing on both levels.
    ///
    /// With `is_insert` set, empty slots are acceptable answers: when `key1` is not stored yet, `pos1` is the slot its sub-table would take and `pos2` is the position `key2` would take in that fresh sub-table.
    /// This method never changes the table.
    ///
    /// :raises KeyNotFound: When the key pair is not in the table, but is_insert is false.
    /// :raises TableFull: When a table is full and cannot be inserted into.
    fn linear_probe(&self, key1: &str, key2: &str, is_insert: bool)
        -> Result<(usize, usize), Self::Error>;

    /// All top-level keys in the table, in slot order
    fn keys(&self) -> Vec<&K1>;

    /// All bottom-level keys stored under top-level key `key1`, in slot order.
    /// Errors if `key1` is not in the table.
    fn keys_in(&self, key1: &str) -> Result<Vec<&K2>, Self::Error>;

    /// All values in the table: top-level slot order, then sub-table slot order
    fn values(&self) -> Vec<&V>;

    /// All values stored under top-level key `key1`, in slot order.
    /// Errors if `key1` is not in the table.
    fn values_in(&self, key1: &str) -> Result<Vec<&V>, Self::Error>;

    /// Checks to see if the given key pair is in the table
    fn contains(&self, key1: &str, key2: &str) -> bool;

    /// Get the value stored under a key pair.
    /// Errors when the pair does not exist.
    fn get(&self, key1: &str, key2: &str) -> Result<&V, Self::Error>;

    /// Set a (key pair, value) entry, replacing the value of an existing pair.
    /// After the insertion, if more than half of the top-level slots are in use, the top-level table grows to its next size.
    fn insert(&mut self, key1: K1, key2: K2, data: V) -> Result<(), Self::Error>;

    /// Delete a key pair from the table and return its value.
    /// If the pair was the last one under `key1`, the top-level slot is released as well, and the cluster following it is reinserted.
    /// Errors when the pair does not exist.
    fn remove(&mut self, key1: &str, key2: &str) -> Result<V, Self::Error>;

    /// Current number of top-level slots (different from the length)
    fn table_size(&self) -> usize;

    /// Number of key pairs in the table
    fn len(&self) -> usize;
}

/// Part 2: a hash table that never probes. Colliding keys are pushed one level down into a new table, which is indexed by the next character of the key.
///
/// Every level has 27 slots: one per letter (hashing `ord(c) % 26`) and one final slot for keys that end at that level.
pub trait InfiniteTableSupport<K, V>: Sized
where
    K: Borrow<str> + Eq,
{
    /// The type of the errors of your implementation.
    type Error: error::Error;

    /// Hash `key` at the given `level`
    fn hash(key: &str, level: usize) -> usize;

    /// Get the value stored under `key`.
    /// Errors when the key does not exist.
    ///
    /// Best case O(1), worst case O(len(key)).
    fn get(&self, key: &str) -> Result<&V, Self::Error>;

    /// Set a (key, value) pair, replacing the value of an existing key.
    /// A collision with a different key replaces the colliding pair by a table one level deeper, containing that pair, after which the insertion continues on that level.
    fn insert(&mut self, key: K, value: V) -> Result<(), Self::Error>;

    /// Delete `key` from the table and return its value.
    /// Tables that are left with a single pair and no deeper tables are collapsed into their parent slot, all the way up to level 0.
    /// Errors when the key does not exist.
    fn remove(&mut self, key: &str) -> Result<V, Self::Error>;

    /// Get the sequence of slot positions required to access `key`, from level 0 down.
    /// Errors when the key does not exist.
    fn get_location(&self, key: &str) -> Result<Vec<usize>, Self::Error>;

    /// All keys in the table, in sorted order.
    /// On every level, a key ending there comes first, followed by the letter slots from `a` to `z`.
    fn sort_keys(&self) -> Vec<&K>;

    /// Checks to see if the given key is in the table
    fn contains(&self, key: &str) -> bool;

    /// Number of pairs in the table
    fn len(&self) -> usize;
}

/// Part 4: walking a trail
pub trait TrailWalkSupport: TrailLike {
    /// Follow this trail from the start, letting `personality` choose a branch at every split and telling it about every mountain that is passed.
    /// After a branch ends, the walk continues with the trail following the most recent split.
    /// The trail itself is left untouched, so it can be walked again.
    ///
    /// Worst case O(n), n being the number of mountains on the trail.
    fn follow_path<P: WalkerPersonality>(&self, personality: &mut P);
}

/// Part 5: managing a collection of mountains, grouped by difficulty
pub trait MountainManagerSupport: Sized {
    /// The type of the errors of your implementation.
    type Error: error::Error;

    /// Create an empty manager
    fn new() -> Result<Self, Self::Error>;

    /// Add a mountain. A mountain with the same name and difficulty is replaced.
    fn add_mountain(&mut self, mountain: Mountain) -> Result<(), Self::Error>;

    /// Remove a mountain. Errors if it is not being managed.
    fn remove_mountain(&mut self, mountain: &Mountain) -> Result<(), Self::Error>;

    /// Replace `old` by `new`. Errors (and leaves everything unchanged) if `old` is not being managed.
    fn edit_mountain(&mut self, old: &Mountain, new: Mountain) -> Result<(), Self::Error>;

    /// All mountains with the given difficulty, in no particular order. Empty if there are none.
    fn mountains_with_difficulty(&self, diff: u32) -> Vec<Mountain>;

    /// All mountains, grouped per difficulty level in ascending order of difficulty.
    /// Each group is sorted by the mountain ordering.
    fn group_by_difficulty(&self) -> Vec<Vec<Mountain>>;
}

/// Parts 6 and 7: looking at all possible walks along a trail
pub trait TrailPathSupport: TrailLike {
    /// Returns a list of all mountains on the trail, on every branch.
    /// Depth first: a mountain comes before whatever follows it, and at a split the top branch comes before the bottom branch, which comes before the follow path.
    fn collect_all_mountains(&self) -> Vec<Mountain>;

    /// Returns a list of all paths containing exactly `k` mountains.
    /// Paths are represented as lists of mountains, from the start of the trail to its end.
    ///
    /// Paths are unique if they take a different branch, even if this results in the same set of mountains.
    /// Paths that take the top branch at a split are listed before those that take the bottom branch.
    fn length_k_paths(&self, k: usize) -> Vec<Vec<Mountain>>;
}

/// Part 8: ranking mountains by length
pub trait OrganiserSupport: Sized {
    /// The type of the errors of your implementation.
    type Error: error::Error;

    /// Create an empty organiser
    fn new() -> Self;

    /// Finds the rank of the provided mountain given all mountains included so far.
    /// Errors if this mountain hasn't been added yet.
    ///
    /// O(log n)
    fn cur_position(&self, mountain: &Mountain) -> Result<usize, Self::Error>;

    /// Adds a list of mountains to the organiser.
    ///
    /// O(m log m + n), m being the number of new mountains and n the number of mountains already added
    fn add_mountains(&mut self, mountains: Vec<Mountain>);
}
