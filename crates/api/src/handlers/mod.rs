//! HTTP handlers.

pub mod todos;
