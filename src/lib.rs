//! Leadsum API Library
//!
//! This library provides the core functionality for the leadership summary
//! service: the keyword summarization domain, the generative summary path,
//! and the HTTP adapters around them.

pub mod api;
pub mod domain;
pub mod generation;
pub mod infrastructure;
