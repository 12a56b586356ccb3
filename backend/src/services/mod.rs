//! Business logic services for the La Esquina marketplace

pub mod auth;
pub mod order;
pub mod product;
pub mod store;

pub use auth::AuthService;
pub use order::OrderService;
pub use product::ProductService;
pub use store::StoreService;
