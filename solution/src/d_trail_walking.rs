//! Walking a trail
//!
//! Let a walker personality follow a trail from start to end, by implementing the [`TrailWalkSupport`] trait for the trails of part c.
//!
//! [`TrailWalkSupport`]: ../../climb_api/climb/trait.TrailWalkSupport.html
//!
//! The walk does not recurse: the follow paths of the splits that are still open are kept on a [`LinkedStack`], so arbitrarily long trails can be walked.
//!
//! [`LinkedStack`]: ../../climb_api/linked_stack/struct.LinkedStack.html
//!
//! # Status
//!
//! COMPLETED: YES
//!

use climb_api::climb::TrailWalkSupport;
use climb_api::linked_stack::LinkedStack;
use climb_api::personality::WalkerPersonality;
use tracing::trace;

use super::c_trail::{Trail, TrailStore};

/// Name of the trail type, used by the tests.
pub type TrailName = Trail;

impl TrailWalkSupport for Trail {
    fn follow_path<P: WalkerPersonality>(&self, personality: &mut P) {
        let mut stack_follow: LinkedStack<&Trail> = LinkedStack::new();
        let mut current = self;
        loop {
            match &current.store {
                TrailStore::Series(series) => {
                    trace!(mountain = %series.mountain.name, "climbing");
                    personality.add_mountain(&series.mountain);
                    current = &series.following;
                }
                TrailStore::Split(split) => {
                    let take_top = personality.select_branch(&split.path_top, &split.path_bottom);
                    trace!(take_top, open_splits = stack_follow.len() + 1, "at split");
                    stack_follow.push(&split.path_follow);
                    current = if take_top {
                        &split.path_top
                    } else {
                        &split.path_bottom
                    };
                }
                TrailStore::Empty => match stack_follow.pop() {
                    Some(follow) => current = follow,
                    None => return,
                },
            }
        }
    }
}

// To run the tests of this part, run `cargo test --features="d"` in the `solution` directory.
#[cfg(all(test, any(feature = "d", feature = "all")))]
#[path = "../../api/climb-tests/d_test.rs"]
mod tests;
