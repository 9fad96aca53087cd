//! Product catalog and category filtering
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

const DEFAULT_CATALOG_DATA: &str =
    include_str!("../../learnit-web/static/assets/data/catalog.json");

/// Category a product belongs to.
///
/// The set is closed; unknown category strings in catalog data are a
/// deserialization error rather than a silent bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tshirt,
    Bags,
    Headphones,
    Hoodie,
    Short,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Tshirt,
        Self::Bags,
        Self::Headphones,
        Self::Hoodie,
        Self::Short,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tshirt => "Tshirt",
            Self::Bags => "Bags",
            Self::Headphones => "Headphones",
            Self::Hoodie => "Hoodie",
            Self::Short => "Short",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single product available in the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Price in reward points
    pub price: u32,
    /// Image path relative to the asset base
    pub image: String,
    pub category: Category,
}

/// Complete catalog data structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

/// Errors raised while loading or validating catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id {0}")]
    DuplicateId(u32),
    #[error("product {0} has a zero price")]
    ZeroPrice(u32),
}

impl Catalog {
    /// Create an empty catalog (pre-bootstrap placeholder state).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and validate the embedded catalog data.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON fails to parse or violates
    /// the catalog invariants.
    pub fn load_from_static() -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(DEFAULT_CATALOG_DATA)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check catalog invariants: unique product ids, positive prices.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in catalog order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price == 0 {
                return Err(CatalogError::ZeroPrice(product.id));
            }
        }
        Ok(())
    }

    /// Find a product by id.
    #[must_use]
    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products matching the filter, in catalog order.
    #[must_use]
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }
}

/// A selection in the category chip row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// The fixed chip row order shown in the store.
    #[must_use]
    pub const fn all_filters() -> [Self; 6] {
        [
            Self::All,
            Self::Only(Category::Tshirt),
            Self::Only(Category::Bags),
            Self::Only(Category::Headphones),
            Self::Only(Category::Hoodie),
            Self::Only(Category::Short),
        ]
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.name(),
        }
    }

    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: u32, category: Category) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: String::new(),
            price,
            image: "images/placeholder.png".to_string(),
            category,
        }
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let data = r#"{"products":[{"id":1,"name":"X","description":"","price":10,"image":"i.png","category":"Socks"}]}"#;
        assert!(serde_json::from_str::<Catalog>(data).is_err());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let catalog = Catalog {
            products: vec![
                product(1, 10, Category::Tshirt),
                product(1, 20, Category::Bags),
            ],
        };
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn validate_rejects_zero_prices() {
        let catalog = Catalog {
            products: vec![product(7, 0, Category::Hoodie)],
        };
        assert!(matches!(catalog.validate(), Err(CatalogError::ZeroPrice(7))));
    }

    #[test]
    fn filter_only_matches_exact_category() {
        let catalog = Catalog {
            products: vec![
                product(1, 10, Category::Tshirt),
                product(2, 20, Category::Hoodie),
                product(3, 30, Category::Tshirt),
            ],
        };
        let shirts = catalog.filtered(CategoryFilter::Only(Category::Tshirt));
        assert_eq!(
            shirts.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        let bags = catalog.filtered(CategoryFilter::Only(Category::Bags));
        assert!(bags.is_empty());
    }

    #[test]
    fn filter_all_restores_the_full_set_in_order() {
        let catalog = Catalog {
            products: vec![
                product(1, 10, Category::Tshirt),
                product(2, 20, Category::Hoodie),
            ],
        };
        let all = catalog.filtered(CategoryFilter::All);
        assert_eq!(all.len(), catalog.products.len());
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
    }

    #[test]
    fn chip_row_starts_with_all() {
        let filters = CategoryFilter::all_filters();
        assert_eq!(filters[0], CategoryFilter::All);
        assert_eq!(filters.len(), Category::ALL.len() + 1);
        assert_eq!(filters[1].label(), "Tshirt");
    }

    #[test]
    fn product_lookup_by_id() {
        let catalog = Catalog {
            products: vec![product(4, 10, Category::Short)],
        };
        assert_eq!(catalog.product(4).map(|p| p.price), Some(10));
        assert!(catalog.product(5).is_none());
    }
}
