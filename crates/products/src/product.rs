use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{Entity, EntityId};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// Non-negative by convention; not enforced. Written as a JSON number.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub category: String,
}

impl Product {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    /// Strictly above `threshold`.
    pub fn is_expensive(&self, threshold: Decimal) -> bool {
        self.price > threshold
    }

    /// Ordinal comparison ignoring case, folding non-ASCII letters too
    /// (not locale-aware).
    pub fn in_category(&self, category: &str) -> bool {
        fold_case(&self.category).eq(fold_case(category))
    }

    pub(crate) fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

fn fold_case(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_uppercase)
}

impl Entity for Product {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Product fields without an identifier; the service assigns one on registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub category: String,
}

impl NewProduct {
    pub fn with_id(self, id: EntityId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: Decimal, category: &str) -> Product {
        Product::new(EntityId::new(1), "Thing", price, category)
    }

    #[test]
    fn is_expensive_is_strict() {
        let p = product(Decimal::from(100), "Misc");
        assert!(!p.is_expensive(Decimal::from(100)));
        assert!(p.is_expensive(Decimal::from(99)));
    }

    #[test]
    fn category_match_ignores_case() {
        let p = product(Decimal::ONE, "Electronics");
        assert!(p.in_category("electronics"));
        assert!(p.in_category("ELECTRONICS"));
        assert!(!p.in_category("Electronic"));
    }

    #[test]
    fn category_match_folds_non_ascii_letters() {
        let p = product(Decimal::ONE, "café");
        assert!(p.in_category("CAFÉ"));
        assert!(p.in_category("Café"));
        assert!(!p.in_category("CAFE"));

        let p = product(Decimal::ONE, "Straße");
        assert!(p.in_category("STRASSE"));
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut p = product(Decimal::ONE, "Misc");
        assert!(p.has_name());
        p.name = "   \t".to_string();
        assert!(!p.has_name());
        p.name.clear();
        assert!(!p.has_name());
    }

    #[test]
    fn json_shape() {
        let p = Product::new(EntityId::new(2), "Mouse", Decimal::new(2550, 2), "Electronics");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["name"], "Mouse");
        assert_eq!(json["price"], 25.5);
        assert_eq!(json["category"], "Electronics");
    }

    #[test]
    fn price_is_read_from_number_or_string() {
        let from_number: Product =
            serde_json::from_str(r#"{"id":1,"name":"A","price":49.5,"category":"X"}"#).unwrap();
        let from_string: Product =
            serde_json::from_str(r#"{"id":1,"name":"A","price":"49.5","category":"X"}"#).unwrap();
        assert_eq!(from_number.price, Decimal::new(495, 1));
        assert_eq!(from_string.price, Decimal::new(495, 1));
    }
}
