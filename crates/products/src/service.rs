//! Product service: catalog queries and validated writes on top of a repository.

use std::sync::Mutex;

use rust_decimal::Decimal;

use catalog_core::{DomainError, DomainResult, EntityId};
use catalog_infra::Repository;

use crate::product::{NewProduct, Product};

const NAME_REQUIRED: &str = "Product name is required.";

/// Domain operations over a product repository.
///
/// The service owns no data of its own; the repository stays the single source
/// of truth for existence.
#[derive(Debug)]
pub struct ProductService<R> {
    repository: R,
    // Serializes `next_id` + `add` in `register`.
    registration: Mutex<()>,
}

impl<R> ProductService<R>
where
    R: Repository<Product>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            registration: Mutex::new(()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn get_by_id(&self, id: EntityId) -> Option<Product> {
        self.repository.get_by_id(id)
    }

    pub fn list(&self) -> Vec<Product> {
        self.repository.get_all()
    }

    /// Products whose category equals `category`, ignoring case.
    pub fn get_by_category(&self, category: Option<&str>) -> DomainResult<Vec<Product>> {
        let category =
            category.ok_or_else(|| DomainError::invalid_argument("category is required"))?;

        Ok(self
            .repository
            .get_all()
            .into_iter()
            .filter(|p| p.in_category(category))
            .collect())
    }

    /// Products priced strictly above `threshold`, most expensive first.
    ///
    /// The sort is stable over repository order, so equal prices keep ascending id.
    pub fn get_expensive(&self, threshold: Decimal) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .repository
            .get_all()
            .into_iter()
            .filter(|p| p.is_expensive(threshold))
            .collect();
        products.sort_by(|a, b| b.price.cmp(&a.price));
        products
    }

    /// Validate and insert a product under its own id.
    pub fn create(&self, product: Product) -> DomainResult<Product> {
        if !product.has_name() {
            return Err(DomainError::validation(NAME_REQUIRED));
        }

        self.repository.add(product.clone())?;
        tracing::info!(id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Assign the next free id and create the product.
    pub fn register(&self, draft: NewProduct) -> DomainResult<Product> {
        let _guard = self
            .registration
            .lock()
            .map_err(|_| DomainError::internal("registration lock poisoned"))?;

        let id = self.repository.next_id();
        self.create(draft.with_id(id))
    }

    /// Full replacement of an existing product.
    pub fn update(&self, product: Product) -> DomainResult<()> {
        if !product.has_name() {
            return Err(DomainError::validation(NAME_REQUIRED));
        }

        let id = product.id;
        self.repository.update(product)?;
        tracing::info!(%id, "product updated");
        Ok(())
    }

    pub fn delete(&self, id: EntityId) -> DomainResult<()> {
        self.repository.delete(id)?;
        tracing::info!(%id, "product deleted");
        Ok(())
    }
}
