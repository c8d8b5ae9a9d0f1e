//! Mountain organiser
//!
//! Rank mountains by length as they are discovered, by implementing the [`OrganiserSupport`] trait.
//!
//! [`OrganiserSupport`]: ../../climb_api/climb/trait.OrganiserSupport.html
//!
//! The organiser keeps every mountain it has seen in one list sorted in mountain order.
//! A new batch is sorted on its own and then merged in, so adding `M` mountains to `N` costs `O(M log M + N)`.
//!
//! # Status
//!
//! COMPLETED: YES
//!

use std::mem;

use climb_api::algorithms::{binary_search, merge, mergesort};
use climb_api::climb::OrganiserSupport;
use climb_api::types::Mountain;
use tracing::debug;

use super::error_climb::ClimbError;

/// Name of the organiser of this part, used by the tests.
pub type OrganiserName = MountainOrganiser;

/// All mountains seen so far, sorted
#[derive(Debug, Default, Clone)]
pub struct MountainOrganiser {
    m_list: Vec<Mountain>,
}

impl MountainOrganiser {
    /// The ranked mountains, shortest first
    pub fn mountains(&self) -> &[Mountain] {
        &self.m_list
    }
}

impl OrganiserSupport for MountainOrganiser {
    type Error = ClimbError;

    fn new() -> Self {
        MountainOrganiser { m_list: Vec::new() }
    }

    /// :complexity: O(log N)
    fn cur_position(&self, mountain: &Mountain) -> Result<usize, Self::Error> {
        Ok(binary_search(&self.m_list, mountain)?)
    }

    fn add_mountains(&mut self, mountains: Vec<Mountain>) {
        debug!(added = mountains.len(), ranked = self.m_list.len(), "adding mountains");
        let added = mergesort(mountains);
        self.m_list = merge(mem::take(&mut self.m_list), added);
    }
}

// To run the tests of this part, run `cargo test --features="g"` in the `solution` directory.
#[cfg(all(test, any(feature = "g", feature = "all")))]
#[path = "../../api/climb-tests/g_test.rs"]
mod tests;
