//! Domain building blocks shared by every crate in the workspace.
//!
//! Nothing in here performs I/O: vocabularies, input parsing, validation
//! rules, storage key generation and the error taxonomy.

pub mod audit;
pub mod datetime;
pub mod enums;
pub mod error;
pub mod pagination;
pub mod storage;
pub mod types;
pub mod validation;
