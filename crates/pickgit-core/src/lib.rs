//! Core types for pick-git.
//!
//! This crate holds the domain model shared by the other crates: the kinds
//! of Git entity that can be picked, the rules for cutting a Selection Token
//! out of a selected line, the outcome of a pick, and the command templates
//! that tokens are substituted into. Nothing in here performs I/O.

pub mod candidates;
pub mod context;
pub mod entity;
pub mod error;
pub mod function;
pub mod template;
pub mod token;
