//! The API you must implement
//!
//! This crate contains the definitions of the various traits you will
//! implement, some basic types, and the data structures you are allowed to build on.
//! The contents of this crate are discussed in more detail in the assignment
//! **You are not allowed to edit this crate in any way.**
//!
//! Placing the modules here ensures that Cargo notices them as part of the build process.

#![deny(missing_docs)]

pub mod error_given;

//Basic modules for types
pub mod types;

//Given data structures and algorithms
pub mod algorithms;
pub mod hash_table;
pub mod linked_stack;
pub mod personality;

//Traits you should implement
pub mod climb;
