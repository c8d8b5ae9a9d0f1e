//! Trail files
//!
//! Trails are stored on disk as a list of segments, read from left to right.
//! A segment is either a mountain or a split into two branches, which are lists of segments themselves; whatever comes after a split is its follow path.
//!
//! ```json
//! [
//!   { "mountain": { "name": "Everest", "difficulty_level": 8, "length": 9 } },
//!   { "split": { "top": [], "bottom": [ { "mountain": { "name": "K2", "difficulty_level": 9, "length": 8 } } ] } }
//! ]
//! ```
//!
//! Files ending in `.bin` hold the same segments encoded with [`encode`], all other files are read as JSON.
//!
//! [`encode`]: ../../climb_api/types/fn.encode.html

use std::fs;
use std::path::Path;

use climb_api::error_given::APIError;
use climb_api::types::{decode, encode, Mountain, TrailLike};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::c_trail::{Trail, TrailStore};
use super::error_climb::{ClimbError, Result};

/// Extension of files holding encoded segments
pub const BINARY_EXTENSION: &str = "bin";

/// One element of a trail file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    /// A single mountain
    Mountain(Mountain),
    /// Two branches that join again after this segment
    Split {
        /// Segments of the upper branch
        top: Vec<Segment>,
        /// Segments of the lower branch
        bottom: Vec<Segment>,
    },
}

/// Build the trail described by `segments`
pub fn build_trail(segments: &[Segment]) -> Trail {
    segments
        .iter()
        .rev()
        .fold(Trail::empty(), |following, segment| match segment {
            Segment::Mountain(m) => Trail::series(m.clone(), following),
            Segment::Split { top, bottom } => {
                Trail::split(build_trail(top), build_trail(bottom), following)
            }
        })
}

/// The segments describing `trail`, the inverse of [`build_trail`]
pub fn segments_of(trail: &Trail) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = trail;
    loop {
        match &current.store {
            TrailStore::Empty => return segments,
            TrailStore::Series(series) => {
                segments.push(Segment::Mountain(series.mountain.clone()));
                current = &series.following;
            }
            TrailStore::Split(split) => {
                segments.push(Segment::Split {
                    top: segments_of(&split.path_top),
                    bottom: segments_of(&split.path_bottom),
                });
                current = &split.path_follow;
            }
        }
    }
}

fn is_binary(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == BINARY_EXTENSION)
}

/// Read a trail from a JSON or `.bin` file
pub fn load_trail(path: &Path) -> Result<Trail> {
    let bytes = fs::read(path).map_err(APIError::from)?;
    let segments: Vec<Segment> = if is_binary(path) {
        decode(&bytes)?
    } else {
        serde_json::from_slice(&bytes)
            .map_err(|e| ClimbError::TrailFile(format!("{}: {}", path.display(), e)))?
    };
    debug!(path = %path.display(), segments = segments.len(), "loaded trail");
    Ok(build_trail(&segments))
}

/// Write `trail` to a JSON or `.bin` file, depending on the extension of `path`
pub fn save_trail(path: &Path, trail: &Trail) -> Result<()> {
    let segments = segments_of(trail);
    let bytes = if is_binary(path) {
        encode(&segments)?
    } else {
        serde_json::to_vec_pretty(&segments)
            .map_err(|e| ClimbError::TrailFile(format!("{}: {}", path.display(), e)))?
    };
    fs::write(path, bytes).map_err(APIError::from)?;
    info!(path = %path.display(), "saved trail");
    Ok(())
}

/// The trail shown when no trail file is given
///
/// ```text
///             top-top
///   top-mid <         >
///  /          top-bot  \
/// <                     > final
///  \         _________ /
///   bot-one <         > bot-three
///             bot-two
/// ```
pub fn demo_trail() -> Trail {
    let single = |m: Mountain| Trail::series(m, Trail::empty());
    let top = Trail::series(
        Mountain::new("top-mid", 4, 7),
        Trail::split(
            single(Mountain::new("top-top", 5, 3)),
            single(Mountain::new("top-bot", 3, 5)),
            Trail::empty(),
        ),
    );
    let bottom = Trail::series(
        Mountain::new("bot-one", 2, 5),
        Trail::split(
            Trail::empty(),
            single(Mountain::new("bot-two", 0, 0)),
            single(Mountain::new("bot-three", 1, 1)),
        ),
    );
    Trail::split(top, bottom, single(Mountain::new("final", 4, 4)))
}
