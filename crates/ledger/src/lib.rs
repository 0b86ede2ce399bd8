//! Key-value persistence for FinanceFlow
//!
//! Records are stored as JSON blobs under string keys, namespaced by user id
//! and record kind. This crate provides the key-value abstraction with
//! in-memory and file-backed implementations, a typed [`LedgerStore`] on top
//! of it, and the recurring transaction materializer.

mod error;
mod file;
mod keys;
mod memory;
mod recurring;
mod store;
mod traits;

pub use error::*;
pub use file::*;
pub use keys::*;
pub use memory::*;
pub use recurring::*;
pub use store::*;
pub use traits::*;
