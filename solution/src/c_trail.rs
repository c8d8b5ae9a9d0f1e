//! Trails
//!
//! A trail is a sequence of mountains, which can fork into two branches that join again later on.
//! This part defines the trail types and the ways to build them up, and implements the given [`TrailLike`] trait so the walker personalities can look at them.
//!
//! [`TrailLike`]: ../../climb_api/types/trait.TrailLike.html
//!
//! All editing methods take their receiver by value and hand back the edited store, so a trail is never shared between two stores.
//! Dropping a trail unlinks it one store at a time, so trails of any length can be dropped.
//!
//! # Status
//!
//! COMPLETED: YES
//!

use std::fmt;
use std::mem;

use climb_api::types::{Mountain, TrailLike, TrailView};

/// Name of the trail type, used by the tests of parts c, d and f.
pub type TrailName = Trail;

/// A trail: everything from a point up to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail {
    /// What comes first on this trail
    pub store: TrailStore,
}

/// First element of a trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailStore {
    /// Nothing, the trail ends here
    Empty,
    /// A mountain, followed by the rest of the trail
    Series(Box<TrailSeries>),
    /// A split into two branches
    Split(Box<TrailSplit>),
}

impl Default for TrailStore {
    fn default() -> Self {
        TrailStore::Empty
    }
}

/// A mountain, followed by the rest of the trail
/// ```text
/// --mountain--following--
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailSeries {
    /// The mountain at the start
    pub mountain: Mountain,
    /// Everything after the mountain
    pub following: Trail,
}

/// A split in the trail.
/// ```text
///    ___path_top____
///   /               \
/// -<                 >-path_follow-
///   \__path_bottom__/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailSplit {
    /// Upper branch
    pub path_top: Trail,
    /// Lower branch
    pub path_bottom: Trail,
    /// Trail after both branches join again
    pub path_follow: Trail,
}

impl TrailStore {
    /// A store starting with `mountain`
    pub fn series(mountain: Mountain, following: Trail) -> TrailStore {
        TrailStore::Series(Box::new(TrailSeries::new(mountain, following)))
    }

    /// A store starting with a split
    pub fn split(path_top: Trail, path_bottom: Trail, path_follow: Trail) -> TrailStore {
        TrailStore::Split(Box::new(TrailSplit::new(path_top, path_bottom, path_follow)))
    }

    /// A split with two empty branches, followed by `path_follow`
    fn empty_branch(path_follow: Trail) -> TrailStore {
        TrailStore::split(Trail::default(), Trail::default(), path_follow)
    }
}

impl TrailSplit {
    /// Create a split
    pub fn new(path_top: Trail, path_bottom: Trail, path_follow: Trail) -> TrailSplit {
        TrailSplit {
            path_top,
            path_bottom,
            path_follow,
        }
    }

    /// Removes the branch, should just leave the remaining following trail.
    pub fn remove_branch(mut self) -> TrailStore {
        mem::take(&mut self.path_follow.store)
    }
}

impl TrailSeries {
    /// Create a series
    pub fn new(mountain: Mountain, following: Trail) -> TrailSeries {
        TrailSeries {
            mountain,
            following,
        }
    }

    /// Removes the mountain at the beginning of this series.
    pub fn remove_mountain(mut self) -> TrailStore {
        mem::take(&mut self.following.store)
    }

    /// Adds a mountain in series before the current one.
    pub fn add_mountain_before(self, mountain: Mountain) -> TrailStore {
        TrailStore::series(mountain, Trail::from(self))
    }

    /// Adds an empty branch, where the current trailstore is now the following path.
    pub fn add_empty_branch_before(self) -> TrailStore {
        TrailStore::empty_branch(Trail::from(self))
    }

    /// Adds a mountain after the current mountain, but before the following trail.
    pub fn add_mountain_after(self, mountain: Mountain) -> TrailStore {
        let TrailSeries {
            mountain: current,
            following,
        } = self;
        TrailStore::series(current, Trail::new(TrailStore::series(mountain, following)))
    }

    /// Adds an empty branch after the current mountain, but before the following trail.
    pub fn add_empty_branch_after(self) -> TrailStore {
        let TrailSeries {
            mountain,
            following,
        } = self;
        TrailStore::series(mountain, Trail::new(TrailStore::empty_branch(following)))
    }
}

impl Trail {
    /// Wrap a store into a trail
    pub fn new(store: TrailStore) -> Trail {
        Trail { store }
    }

    /// True iff there is nothing on this trail
    pub fn is_empty(&self) -> bool {
        matches!(self.store, TrailStore::Empty)
    }

    /// Adds a mountain before everything currently in the trail.
    pub fn add_mountain_before(self, mountain: Mountain) -> Trail {
        Trail::new(TrailStore::series(mountain, self))
    }

    /// Adds an empty branch before everything currently in the trail.
    pub fn add_empty_branch_before(self) -> Trail {
        Trail::new(TrailStore::empty_branch(self))
    }

    fn render(&self, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = depth * 4;
        let mut current = self;
        loop {
            match &current.store {
                TrailStore::Empty => return Ok(()),
                TrailStore::Series(series) => {
                    writeln!(f, "{:indent$}- {}", "", series.mountain, indent = indent)?;
                    current = &series.following;
                }
                TrailStore::Split(split) => {
                    writeln!(f, "{:indent$}+ top", "", indent = indent)?;
                    split.path_top.render(depth + 1, f)?;
                    writeln!(f, "{:indent$}+ bottom", "", indent = indent)?;
                    split.path_bottom.render(depth + 1, f)?;
                    current = &split.path_follow;
                }
            }
        }
    }
}

impl Drop for Trail {
    fn drop(&mut self) {
        if let TrailStore::Empty = self.store {
            return;
        }
        let mut unlinked = vec![mem::take(&mut self.store)];
        while let Some(store) = unlinked.pop() {
            match store {
                TrailStore::Empty => {}
                TrailStore::Series(mut series) => {
                    unlinked.push(mem::take(&mut series.following.store));
                }
                TrailStore::Split(mut split) => {
                    unlinked.push(mem::take(&mut split.path_top.store));
                    unlinked.push(mem::take(&mut split.path_bottom.store));
                    unlinked.push(mem::take(&mut split.path_follow.store));
                }
            }
        }
    }
}

impl From<TrailStore> for Trail {
    fn from(store: TrailStore) -> Trail {
        Trail::new(store)
    }
}

impl From<TrailSeries> for Trail {
    fn from(series: TrailSeries) -> Trail {
        Trail::new(TrailStore::Series(Box::new(series)))
    }
}

impl From<TrailSplit> for Trail {
    fn from(split: TrailSplit) -> Trail {
        Trail::new(TrailStore::Split(Box::new(split)))
    }
}

impl TrailLike for Trail {
    fn empty() -> Self {
        Trail::default()
    }

    fn series(mountain: Mountain, following: Self) -> Self {
        Trail::new(TrailStore::series(mountain, following))
    }

    fn split(top: Self, bottom: Self, follow: Self) -> Self {
        Trail::new(TrailStore::split(top, bottom, follow))
    }

    fn view(&self) -> TrailView<'_, Self> {
        match &self.store {
            TrailStore::Empty => TrailView::Empty,
            TrailStore::Series(series) => TrailView::Series {
                mountain: &series.mountain,
                following: &series.following,
            },
            TrailStore::Split(split) => TrailView::Split {
                top: &split.path_top,
                bottom: &split.path_bottom,
                follow: &split.path_follow,
            },
        }
    }
}

impl fmt::Display for Trail {
    /// One line per mountain; the branches of a split are indented below `+ top` and `+ bottom` markers
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(0, f)
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn render_split() {
        let a = Mountain::new("a", 1, 2);
        let b = Mountain::new("b", 3, 4);
        let trail = Trail::empty()
            .add_mountain_before(b)
            .add_empty_branch_before()
            .add_mountain_before(a);
        assert_eq!(
            trail.to_string(),
            "- a (difficulty 1, length 2)\n+ top\n+ bottom\n- b (difficulty 3, length 4)\n"
        );
    }

    #[test]
    fn drop_long_trails() {
        let mut trail = Trail::empty();
        for i in 0..300_000u32 {
            trail = trail.add_mountain_before(Mountain::new("m", 1, i));
        }
        drop(trail);

        let mut nested = Trail::empty();
        for _ in 0..300_000 {
            nested = Trail::split(nested, Trail::empty(), Trail::empty());
        }
        drop(nested);
    }

    #[test]
    fn render_nested() {
        let top = Trail::series(Mountain::new("t", 1, 1), Trail::empty());
        let trail = Trail::split(top, Trail::empty(), Trail::empty());
        assert_eq!(
            trail.to_string(),
            "+ top\n    - t (difficulty 1, length 1)\n+ bottom\n"
        );
    }
}

// To run the tests of this part, run `cargo test --features="c"` in the `solution` directory.
#[cfg(all(test, any(feature = "c", feature = "all")))]
#[path = "../../api/climb-tests/c_test.rs"]
mod tests;
