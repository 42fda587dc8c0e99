#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # sr-entities
//!
//! Reusable, agnostic domain entities for Stream Rater.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod category;
pub mod comment;
pub mod id;
pub mod password;
pub mod rating;
pub mod streamer;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
