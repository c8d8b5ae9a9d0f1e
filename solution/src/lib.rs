//! Root file of the solution
//!
//! # This crate
//!
//! The solution to the mountain climbing assignment. Every part lives in its
//! own module, named after the letter of the part:
//!
//! 1. Part a: a hash table indexed by two keys, in [`a_double_key_table`].
//! 2. Part b: a hash table that resolves collisions by nesting, in
//!    [`b_infinite_hash_table`].
//! 3. Part c: trails of mountains that fork and join again, in [`c_trail`].
//! 4. Part d: letting a walker personality follow a trail, in
//!    [`d_trail_walking`].
//! 5. Part e: managing mountains by difficulty, in [`e_mountain_manager`].
//! 6. Part f: listing the mountains and fixed-length paths of a trail, in
//!    [`f_trail_paths`].
//! 7. Part g: ranking mountains as they come in, in [`g_mountain_organiser`].
//!
//! The traits each part implements are declared in the `climb_api` crate,
//! together with the given data structures the parts build on. The tests of
//! part `x` are enabled with the feature of the same letter, e.g.
//! `cargo test --features="a"`, or all at once with `--features="all"`.
//!
//! The `climb` binary (`src/main.rs`) reads trails from files, see
//! [`trail_file`], and prints walks, paths and rankings in the terminal.
//!
//! The next thing to look at is the [`a_double_key_table` module](a_double_key_table/index.html).
//!
//! # Rust Version
//!
//! VERSION: rustc 1.74 (2023-11-16)

// This line forces you to write documentation for all important things.
#![deny(missing_docs)]
// Note that the documentation starts with three slashes instead of two!
// See https://doc.rust-lang.org/book/ch14-02-publishing-to-crates-io.html#making-useful-documentation-comments

// Declare the modules of which this project consists:

pub mod error_climb;

// Hash tables
pub mod a_double_key_table;
pub mod b_infinite_hash_table;

// Trails
pub mod c_trail;
pub mod d_trail_walking;
pub mod f_trail_paths;

// Organising mountains
pub mod e_mountain_manager;
pub mod g_mountain_organiser;

// Used by the `climb` binary
pub mod logging;
pub mod trail_file;
