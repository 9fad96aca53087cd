//! Helpers for constructing URLs to static assets that respect the deployment base path.
use learnit_core::Product;

/// When `PUBLIC_URL` is set at compile time (e.g., `/app` when hosted under a
/// subdirectory), generated URLs are prefixed accordingly. Local builds
/// without `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn url(relative: &str) -> String {
    url_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// URL of a product's catalog image.
#[must_use]
pub fn product_image(product: &Product) -> String {
    url(&format!("static/{}", product.image))
}

/// URL of the coin icon shown beside points balances.
#[must_use]
pub fn coin_icon() -> String {
    url("static/images/coin.png")
}

/// Base path for the router (e.g., `/app` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn url_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{router_base, url};
    use learnit_core::{Category, Product};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(url("static/images/coin.png"), "/static/images/coin.png");
        assert_eq!(url("/static/images/coin.png"), "/static/images/coin.png");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::url_with_base("static/images/coin.png", "/app"),
            "/app/static/images/coin.png"
        );
        assert_eq!(
            super::url_with_base("/static/images/coin.png", "/app/"),
            "/app/static/images/coin.png"
        );
    }

    #[test]
    fn product_images_live_under_static() {
        let product = Product {
            id: 1,
            name: "Explorer Tee".to_string(),
            description: String::new(),
            price: 90,
            image: "images/bag6.jpg".to_string(),
            category: Category::Tshirt,
        };
        assert_eq!(super::product_image(&product), "/static/images/bag6.jpg");
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/app/"),
            Some(String::from("/app"))
        );
    }
}
