//! Domain models for the La Esquina marketplace

mod order;
mod product;
mod store;
mod user;

pub use order::*;
pub use product::*;
pub use store::*;
pub use user::*;
