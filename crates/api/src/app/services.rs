//! Composition root: builds the store and the services that share it.

use std::sync::Arc;

use catalog_core::DomainResult;
use catalog_infra::InMemoryRepository;
use catalog_products::{Product, ProductService, seed_catalog};

/// Product store shared by everything that needs it for the process lifetime.
pub type ProductStore = Arc<InMemoryRepository<Product>>;

#[derive(Debug)]
pub struct AppServices {
    pub products: ProductService<ProductStore>,
}

impl AppServices {
    pub fn new(store: ProductStore) -> Self {
        Self {
            products: ProductService::new(store),
        }
    }
}

/// Build the in-memory services, optionally loading the demo catalog.
pub fn build_services(seed: bool) -> DomainResult<AppServices> {
    let store: ProductStore = Arc::new(InMemoryRepository::new());
    if seed {
        seed_catalog(&store)?;
    }
    Ok(AppServices::new(store))
}
