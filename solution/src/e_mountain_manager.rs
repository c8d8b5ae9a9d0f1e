//! Mountain manager
//!
//! Keep track of a collection of mountains, grouped by difficulty, by implementing the [`MountainManagerSupport`] trait.
//!
//! [`MountainManagerSupport`]: ../../climb_api/climb/trait.MountainManagerSupport.html
//!
//! The mountains live in the double key table of part a: the first key is the difficulty level, the second key is the name of the mountain.
//!
//! # Status
//!
//! COMPLETED: YES
//!
//! COMMENTS:
//!
//! Two mountains with the same name and difficulty level cannot be managed at the same time; adding the second one replaces the first.
//!

use climb_api::algorithms::mergesort;
use climb_api::climb::{DoubleKeySupport, MountainManagerSupport};
use climb_api::types::Mountain;
use tracing::debug;

use super::a_double_key_table::DoubleKeyTable;
use super::error_climb::ClimbError;

/// Name of the manager of this part, used by the tests.
pub type ManagerName = MountainManager;

/// Mountains indexed by difficulty level and name
#[derive(Debug, Default)]
pub struct MountainManager {
    table: DoubleKeyTable<String, String, Mountain>,
}

fn difficulty_key(difficulty: u32) -> String {
    difficulty.to_string()
}

impl MountainManager {
    /// Create a manager whose table follows custom size sequences, see [`DoubleKeySupport::with_sizes`]
    pub fn with_sizes(
        difficulty_sizes: Option<&[usize]>,
        name_sizes: Option<&[usize]>,
    ) -> Result<Self, ClimbError> {
        Ok(MountainManager {
            table: DoubleKeyTable::with_sizes(difficulty_sizes, name_sizes)?,
        })
    }

    /// Number of managed mountains
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True iff no mountain is managed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All difficulty levels that have at least one mountain, from easy to hard
    pub fn difficulties(&self) -> Vec<u32> {
        // keys are only ever produced by `difficulty_key`
        let levels: Vec<u32> = self.table.iter_keys().filter_map(|k| k.parse().ok()).collect();
        mergesort(levels)
    }
}

impl MountainManagerSupport for MountainManager {
    type Error = ClimbError;

    fn new() -> Result<Self, Self::Error> {
        Ok(MountainManager {
            table: DoubleKeyTable::new(),
        })
    }

    fn add_mountain(&mut self, mountain: Mountain) -> Result<(), Self::Error> {
        debug!(mountain = %mountain.name, difficulty = mountain.difficulty_level, "adding mountain");
        self.table.insert(
            difficulty_key(mountain.difficulty_level),
            mountain.name.clone(),
            mountain,
        )
    }

    fn remove_mountain(&mut self, mountain: &Mountain) -> Result<(), Self::Error> {
        let key1 = difficulty_key(mountain.difficulty_level);
        if self.table.get(&key1, &mountain.name)? != mountain {
            return Err(ClimbError::KeyNotFound(mountain.to_string()));
        }
        self.table.remove(&key1, &mountain.name)?;
        Ok(())
    }

    fn edit_mountain(&mut self, old: &Mountain, new: Mountain) -> Result<(), Self::Error> {
        self.remove_mountain(old)?;
        if let Err(e) = self.add_mountain(new) {
            // the old mountain goes back where it was; its sub-table may still exist
            self.add_mountain(old.clone())?;
            return Err(e);
        }
        Ok(())
    }

    fn mountains_with_difficulty(&self, diff: u32) -> Vec<Mountain> {
        match self.table.iter_values_in(&difficulty_key(diff)) {
            Ok(mountains) => mountains.cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn group_by_difficulty(&self) -> Vec<Vec<Mountain>> {
        self.difficulties()
            .into_iter()
            .map(|diff| mergesort(self.mountains_with_difficulty(diff)))
            .collect()
    }
}

// To run the tests of this part, run `cargo test --features="e"` in the `solution` directory.
#[cfg(all(test, any(feature = "e", feature = "all")))]
#[path = "../../api/climb-tests/e_test.rs"]
mod tests;
