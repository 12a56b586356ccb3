//! HTTP handlers for the La Esquina marketplace

pub mod auth;
pub mod order;
pub mod product;
pub mod store;

pub use auth::*;
pub use order::*;
pub use product::*;
pub use store::*;
