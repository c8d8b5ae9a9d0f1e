//! Walker personalities: they decide which branch to take at each split of a trail, and keep track of the mountains they climbed.

use super::types::{Mountain, TrailLike};

/// A walker following a trail.
/// Trails call `add_mountain` for every mountain they pass and `select_branch` at every split.
pub trait WalkerPersonality {
    /// Record that `mountain` has been climbed
    fn add_mountain(&mut self, mountain: &Mountain);

    /// Choose a branch at a split. Returns true to take `top`, false to take `bottom`.
    fn select_branch<T: TrailLike>(&self, top: &T, bottom: &T) -> bool;

    /// Mountains climbed so far, in order
    fn mountains(&self) -> &[Mountain];
}

/// Always takes the top branch
#[derive(Debug, Default, Clone)]
pub struct TopWalker {
    mountains: Vec<Mountain>,
}

/// Always takes the bottom branch
#[derive(Debug, Default, Clone)]
pub struct BottomWalker {
    mountains: Vec<Mountain>,
}

/// Takes the path of least resistance.
///
/// Looks at the first element of both branches.
/// A branch that does not start with a mountain is free to walk and is preferred (the top one if both qualify).
/// Otherwise the branch whose first mountain has the lower `difficulty_level` is taken; ties go to the top.
#[derive(Debug, Default, Clone)]
pub struct LazyWalker {
    mountains: Vec<Mountain>,
}

impl WalkerPersonality for TopWalker {
    fn add_mountain(&mut self, mountain: &Mountain) {
        self.mountains.push(mountain.clone());
    }

    fn select_branch<T: TrailLike>(&self, _top: &T, _bottom: &T) -> bool {
        true
    }

    fn mountains(&self) -> &[Mountain] {
        &self.mountains
    }
}

impl WalkerPersonality for BottomWalker {
    fn add_mountain(&mut self, mountain: &Mountain) {
        self.mountains.push(mountain.clone());
    }

    fn select_branch<T: TrailLike>(&self, _top: &T, _bottom: &T) -> bool {
        false
    }

    fn mountains(&self) -> &[Mountain] {
        &self.mountains
    }
}

impl WalkerPersonality for LazyWalker {
    fn add_mountain(&mut self, mountain: &Mountain) {
        self.mountains.push(mountain.clone());
    }

    fn select_branch<T: TrailLike>(&self, top: &T, bottom: &T) -> bool {
        match (top.first_mountain(), bottom.first_mountain()) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(t), Some(b)) => t.difficulty_level <= b.difficulty_level,
        }
    }

    fn mountains(&self) -> &[Mountain] {
        &self.mountains
    }
}
