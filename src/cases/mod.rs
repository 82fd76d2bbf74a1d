//! Saved drafts ("cases").
//!
//! - `model` - the case record and its form body
//! - `store` - persistence trait and the in-memory backend
//! - `routes` - list, form and create endpoints

pub mod model;
pub mod routes;
pub mod store;

pub use model::{Case, CreateCaseRequest};
pub use store::{CaseStore, MemoryCaseStore, StoreError};
