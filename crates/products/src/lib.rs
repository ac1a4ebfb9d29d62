//! Product catalog domain: model, service and demo seed data.

pub mod product;
pub mod seed;
pub mod service;

pub use product::{NewProduct, Product};
pub use seed::seed_catalog;
pub use service::ProductService;
