// src/core/mod.rs

//! The menu engine: marker parsing, metadata, enumeration, argument collection and
//! the navigation loop.

pub mod arguments;
pub mod color;
pub mod markers;
pub mod menu;
pub mod metadata;
pub mod navigator;
pub mod paths;
