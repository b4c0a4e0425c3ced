//! Data models for Crossperch

mod post;

pub use post::{Author, Post};
