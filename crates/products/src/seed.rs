//! Demo catalog loaded at startup.

use rust_decimal::Decimal;

use catalog_core::{DomainResult, EntityId};
use catalog_infra::Repository;

use crate::product::Product;

fn demo_products() -> Vec<Product> {
    vec![
        Product::new(EntityId::new(1), "Laptop", Decimal::new(129999, 2), "Electronics"),
        Product::new(EntityId::new(2), "Mouse", Decimal::new(2550, 2), "Electronics"),
        Product::new(EntityId::new(3), "Desk Chair", Decimal::new(34900, 2), "Furniture"),
        Product::new(EntityId::new(4), "Notebook", Decimal::new(499, 2), "Stationery"),
        Product::new(EntityId::new(5), "Monitor", Decimal::new(59900, 2), "Electronics"),
    ]
}

/// Insert the demo products. Fails with `Conflict` if any of ids 1..=5 is taken.
pub fn seed_catalog<R: Repository<Product> + ?Sized>(repo: &R) -> DomainResult<usize> {
    let products = demo_products();
    let count = products.len();
    for product in products {
        repo.add(product)?;
    }
    tracing::info!(count, "seeded product catalog");
    Ok(count)
}
