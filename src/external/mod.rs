//! Clients for external product sources.

pub mod dummyjson;

pub use dummyjson::DummyJsonClient;
