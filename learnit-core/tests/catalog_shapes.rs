use std::collections::HashSet;

use learnit_core::{Catalog, Category, CategoryFilter};

fn load_catalog() -> Catalog {
    Catalog::load_from_static().expect("embedded catalog data must load")
}

#[test]
fn embedded_catalog_loads_and_validates() {
    let catalog = load_catalog();
    assert!(!catalog.products.is_empty());
    catalog.validate().expect("embedded catalog must be valid");
}

#[test]
fn embedded_catalog_ids_are_dense_and_unique() {
    let catalog = load_catalog();
    let ids: HashSet<u32> = catalog.products.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), catalog.products.len());
}

#[test]
fn embedded_catalog_prices_are_positive() {
    let catalog = load_catalog();
    assert!(catalog.products.iter().all(|p| p.price > 0));
}

#[test]
fn embedded_catalog_images_are_relative_paths() {
    let catalog = load_catalog();
    for product in &catalog.products {
        assert!(
            !product.image.starts_with('/') && !product.image.contains("://"),
            "image path {} must be asset-relative",
            product.image
        );
    }
}

#[test]
fn every_chip_filter_partitions_the_catalog() {
    let catalog = load_catalog();
    let all = catalog.filtered(CategoryFilter::All);
    assert_eq!(all.len(), catalog.products.len());

    let by_category: usize = Category::ALL
        .iter()
        .map(|&c| catalog.filtered(CategoryFilter::Only(c)).len())
        .sum();
    assert_eq!(by_category, catalog.products.len());
}

#[test]
fn filtering_preserves_catalog_order() {
    let catalog = load_catalog();
    let shirts = catalog.filtered(CategoryFilter::Only(Category::Tshirt));
    let mut last_seen = 0;
    for product in shirts {
        assert!(product.id > last_seen);
        last_seen = product.id;
    }
}
