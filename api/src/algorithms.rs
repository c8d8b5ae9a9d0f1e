//! Sorting and searching helpers: merge sort, merge, and binary search.
//!
//! `merge` and `mergesort` are stable: when two items compare equal, the one that came first (or the one from the left list, for `merge`) ends up first.

use super::error_given::{APIError, Result};
use std::fmt::Debug;

/// Merge two sorted lists into one sorted list.
///
/// :complexity: O(len(l1) + len(l2)) comparisons
pub fn merge<T: Ord>(l1: Vec<T>, l2: Vec<T>) -> Vec<T> {
    let mut new_list = Vec::with_capacity(l1.len() + l2.len());
    let mut left = l1.into_iter().peekable();
    let mut right = l2.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        new_list.extend(next);
    }
    new_list
}

/// Sort a list using merge sort.
///
/// :complexity: O(n log n) comparisons, for every input
pub fn mergesort<T: Ord>(mut l: Vec<T>) -> Vec<T> {
    if l.len() <= 1 {
        return l;
    }
    let right = l.split_off(l.len() / 2);
    merge(mergesort(l), mergesort(right))
}

/// Find the index at which `item` is stored in the sorted list `l`, using binary search.
///
/// :raises KeyNotFound: when `item` is not in the list
///
/// :complexity best: O(1), when the middle index contains item.
/// :complexity worst: O(log(N)), where N is the length of l.
pub fn binary_search<T: Ord + Debug>(l: &[T], item: &T) -> Result<usize> {
    let mut lo = 0;
    let mut hi = l.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if l[mid] > *item {
            // item would be before mid
            hi = mid;
        } else if l[mid] < *item {
            lo = mid + 1;
        } else {
            return Ok(mid);
        }
    }
    Err(APIError::KeyNotFound(format!("{:?}", item)))
}
