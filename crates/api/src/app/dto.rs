//! Request/response DTOs and mapping to/from domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::EntityId;
use catalog_products::{NewProduct, Product};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: Decimal,
    pub category: String,
}

impl ProductRequest {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            category: self.category,
        }
    }

    pub fn into_product(self, id: EntityId) -> Product {
        self.into_new_product().with_id(id)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExpensiveProductsQuery {
    pub threshold: Option<Decimal>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductResponse {
    pub id: EntityId,
    pub name: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub category: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            category: p.category,
        }
    }
}

pub fn products_to_response(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(ProductResponse::from).collect()
}
