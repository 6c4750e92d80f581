//! Persistence boundary.
//!
//! The engine is pure; everything durable goes through the async store
//! traits here. Backends plug in behind [`SaleStore`], [`AccountStore`],
//! and [`InvestorStore`]; [`SaleService`] layers read-modify-write
//! transactions on top so callers never observe a half-applied mutation.

pub mod error;
pub mod memory;
pub mod service;
pub mod traits;

pub use error::{ServiceError, StoreError};
pub use memory::MemoryStore;
pub use service::SaleService;
pub use traits::{AccountStore, InvestorStore, SaleStore};
