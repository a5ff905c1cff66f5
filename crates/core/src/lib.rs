//! Domain types and error taxonomy for the todolist backend.
//!
//! This crate is I/O-free: it defines the shared id type, the domain
//! error enum, and field validation. Persistence lives in `todolist-db`,
//! the HTTP surface in `todolist-api`.

pub mod error;
pub mod todo;
pub mod types;
