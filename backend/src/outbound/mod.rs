//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: document store adapters
//!
//! Adapters translate between the domain document model and their backing
//! storage. They contain no business logic.

pub mod persistence;
