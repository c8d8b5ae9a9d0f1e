//! Paths through a trail
//!
//! List every mountain on a trail, and every way to walk it with a fixed number of mountains, by implementing the [`TrailPathSupport`] trait for the trails of part c.
//!
//! [`TrailPathSupport`]: ../../climb_api/climb/trait.TrailPathSupport.html
//!
//! # Status
//!
//! COMPLETED: YES
//!
//! COMMENTS:
//!
//! Paths are produced top branch first. A path is abandoned as soon as it holds `k` mountains and still has another one ahead.
//! Neither traversal recurses, so the length of a trail and the nesting of its splits are only bounded by memory.
//!

use climb_api::climb::TrailPathSupport;
use climb_api::linked_stack::LinkedStack;
use climb_api::types::Mountain;

use super::c_trail::{Trail, TrailStore};

/// Name of the trail type, used by the tests.
pub type TrailName = Trail;

/// One pending action of the path search
enum Step<'a> {
    /// Continue the current path with this trail
    Visit(&'a Trail),
    /// Take the last mountain off the path again
    PopMountain,
    /// Leave the innermost split
    PopFollow,
    /// Re-enter a split whose follow path has been walked
    PushFollow(&'a Trail),
}

/// Backtracking state of [`length_k_paths`](TrailPathSupport::length_k_paths).
/// Every `Visit` leaves `path` and `pending` as it found them once its undo steps have run.
struct PathSearch<'a> {
    k: usize,
    /// follow paths of the splits the current path is inside of, innermost last
    pending: Vec<&'a Trail>,
    path: Vec<&'a Mountain>,
    found: Vec<Vec<Mountain>>,
}

impl<'a> PathSearch<'a> {
    fn run(&mut self, start: &'a Trail) {
        let mut steps = vec![Step::Visit(start)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(current) => self.visit(current, &mut steps),
                Step::PopMountain => {
                    self.path.pop();
                }
                Step::PopFollow => {
                    self.pending.pop();
                }
                Step::PushFollow(follow) => self.pending.push(follow),
            }
        }
    }

    fn visit(&mut self, current: &'a Trail, steps: &mut Vec<Step<'a>>) {
        match &current.store {
            TrailStore::Series(series) => {
                if self.path.len() == self.k {
                    return;
                }
                self.path.push(&series.mountain);
                steps.push(Step::PopMountain);
                steps.push(Step::Visit(&series.following));
            }
            TrailStore::Split(split) => {
                self.pending.push(&split.path_follow);
                steps.push(Step::PopFollow);
                steps.push(Step::Visit(&split.path_bottom));
                steps.push(Step::Visit(&split.path_top));
            }
            TrailStore::Empty => match self.pending.pop() {
                Some(follow) => {
                    steps.push(Step::PushFollow(follow));
                    steps.push(Step::Visit(follow));
                }
                None => {
                    if self.path.len() == self.k {
                        self.found.push(self.path.iter().map(|&m| m.clone()).collect());
                    }
                }
            },
        }
    }
}

impl TrailPathSupport for Trail {
    fn collect_all_mountains(&self) -> Vec<Mountain> {
        let mut mountains = Vec::new();
        let mut to_visit: LinkedStack<&Trail> = LinkedStack::new();
        to_visit.push(self);
        while let Some(trail) = to_visit.pop() {
            match &trail.store {
                TrailStore::Empty => {}
                TrailStore::Series(series) => {
                    mountains.push(series.mountain.clone());
                    to_visit.push(&series.following);
                }
                TrailStore::Split(split) => {
                    to_visit.push(&split.path_follow);
                    to_visit.push(&split.path_bottom);
                    to_visit.push(&split.path_top);
                }
            }
        }
        mountains
    }

    fn length_k_paths(&self, k: usize) -> Vec<Vec<Mountain>> {
        let mut search = PathSearch {
            k,
            pending: Vec::new(),
            path: Vec::with_capacity(k),
            found: Vec::new(),
        };
        search.run(self);
        search.found
    }
}

// To run the tests of this part, run `cargo test --features="f"` in the `solution` directory.
#[cfg(all(test, any(feature = "f", feature = "all")))]
#[path = "../../api/climb-tests/f_test.rs"]
mod tests;
