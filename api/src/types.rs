//! Module containing the types used in this project.
//! You can define your own wrappers around these types if you need more than the provided functionality.

use super::error_given;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A mountain on a trail.
/// Derives `Serialize` and `Deserialize` so mountains can be read from trail files and written to buffers.
///
/// Mountains are ordered by their `length` first and their `name` second.
/// Two mountains with the same length and name are only told apart by their `difficulty_level`, which is compared last so that the ordering stays consistent with equality.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mountain {
    /// Name of the mountain
    pub name: String,
    /// How hard this mountain is to climb. Lazy walkers prefer lower values.
    pub difficulty_level: u32,
    /// Length of the climb, the primary sort key of mountains
    pub length: u32,
}

impl Mountain {
    /// Create a new mountain
    pub fn new<S: Into<String>>(name: S, difficulty_level: u32, length: u32) -> Mountain {
        Mountain {
            name: name.into(),
            difficulty_level,
            length,
        }
    }
}

impl Ord for Mountain {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length
            .cmp(&other.length)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.difficulty_level.cmp(&other.difficulty_level))
    }
}

impl PartialOrd for Mountain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Mountain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (difficulty {}, length {})",
            self.name, self.difficulty_level, self.length
        )
    }
}

/// Referential array: a fixed-length array of optional slots.
/// Every slot starts out empty (`None`). The length never changes after creation; growing a structure built on top of it means allocating a new array and moving the contents over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayR<T> {
    ///Contents of the array, represented as a boxed slice since its size is fixed
    slots: Box<[Option<T>]>,
}

impl<T> ArrayR<T> {
    /// Create an array with `len` empty slots
    pub fn new(len: usize) -> ArrayR<T> {
        ArrayR {
            slots: (0..len).map(|_| None).collect(),
        }
    }

    /// Number of slots in this array, whether they are filled or not
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True iff the array has no slots at all
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reference to the contents of slot `i`, if it is filled.
    /// Panics if `i` is out of bounds, like indexing a slice.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.slots[i].as_ref()
    }

    /// Mutable reference to the contents of slot `i`, if it is filled
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.slots[i].as_mut()
    }

    /// Overwrite slot `i`, returning whatever it held before
    pub fn set(&mut self, i: usize, item: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.slots[i], item)
    }

    /// Empty slot `i`, returning its contents
    pub fn take(&mut self, i: usize) -> Option<T> {
        self.slots[i].take()
    }

    /// True iff slot `i` is empty
    pub fn is_vacant(&self, i: usize) -> bool {
        self.slots[i].is_none()
    }

    /// Iterate over all slots in order, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Consume the array, yielding the filled slots in order
    pub fn into_filled(self) -> impl Iterator<Item = T> {
        self.slots.into_vec().into_iter().flatten()
    }
}

/// Borrowed view of the first element of a trail, as handed out by [`TrailLike::view`].
///
/// A trail is one of three things:
/// ```text
/// Empty:   --
/// Series:  --mountain--following--
/// Split:      ___top___
///          --<         >--follow--
///             \_bottom_/
/// ```
#[derive(Debug)]
pub enum TrailView<'a, T> {
    /// Nothing left on this trail
    Empty,
    /// A mountain, followed by the rest of the trail
    Series {
        /// The mountain at the start of the trail
        mountain: &'a Mountain,
        /// Everything after the mountain
        following: &'a T,
    },
    /// A fork in the trail, where both branches join again into `follow`
    Split {
        /// Upper branch
        top: &'a T,
        /// Lower branch
        bottom: &'a T,
        /// Trail continuing after both branches join
        follow: &'a T,
    },
}

/// Trait for trail-like behavior, so that the given walker personalities can inspect your trails without knowing their concrete type.
/// Mostly used in testing and by the personalities, so only requires constructors and a read-only view.
pub trait TrailLike: Sized {
    ///Create a trail without anything on it
    fn empty() -> Self;
    ///Create a trail starting with `mountain`, followed by `following`
    fn series(mountain: Mountain, following: Self) -> Self;
    ///Create a trail starting with a split into `top` and `bottom`, that join again into `follow`
    fn split(top: Self, bottom: Self, follow: Self) -> Self;
    ///Look at the first element of this trail
    fn view(&self) -> TrailView<'_, Self>;

    ///The first mountain on this trail, if the trail starts with one
    fn first_mountain(&self) -> Option<&Mountain> {
        match self.view() {
            TrailView::Series { mountain, .. } => Some(mountain),
            _ => None,
        }
    }
}

/// Serialize any object that implements the `Serialize` trait into a compact byte buffer, using [`bincode`](https://docs.rs/bincode/1.3.1/bincode/index.html)
pub fn encode<S>(stru: &S) -> error_given::Result<Vec<u8>>
where
    S: Serialize,
{
    Ok(bincode::serialize(stru)?)
}

/// Read any object that implements the `DeserializeOwned` trait back from a buffer produced by [`encode`]
pub fn decode<S>(bytes: &[u8]) -> error_given::Result<S>
where
    S: DeserializeOwned,
{
    Ok(bincode::deserialize(bytes)?)
}

///Tests for the given types
#[cfg(test)]
mod types_tests {
    use super::{decode, encode, ArrayR, Mountain};

    #[test]
    fn mountain_order() {
        let short = Mountain::new("b", 3, 2);
        let long = Mountain::new("a", 1, 5);
        let same_len = Mountain::new("c", 1, 2);
        assert!(short < long);
        assert!(short < same_len);
        assert!(same_len < long);

        let mut ms = vec![long.clone(), same_len.clone(), short.clone()];
        ms.sort();
        assert_eq!(ms, vec![short, same_len, long]);
    }

    #[test]
    fn mountain_display() {
        let m = Mountain::new("Everest", 9, 12);
        assert_eq!(m.to_string(), "Everest (difficulty 9, length 12)");
    }

    #[test]
    fn array_slots() {
        let mut arr: ArrayR<u32> = ArrayR::new(4);
        assert_eq!(arr.len(), 4);
        assert!(arr.iter().all(|s| s.is_none()));

        assert_eq!(arr.set(2, Some(7)), None);
        assert_eq!(arr.get(2), Some(&7));
        *arr.get_mut(2).unwrap() += 1;
        assert_eq!(arr.set(2, Some(1)), Some(8));
        assert_eq!(arr.take(2), Some(1));
        assert!(arr.is_vacant(2));

        arr.set(0, Some(3));
        arr.set(3, Some(4));
        assert_eq!(arr.into_filled().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn encode_decode_mountain() {
        let m = Mountain::new("Kosciuszko", 2, 4);
        let bytes = encode(&m).unwrap();
        assert_eq!(decode::<Mountain>(&bytes).unwrap(), m);
        assert!(decode::<Mountain>(&bytes[..2]).is_err());
    }
}
