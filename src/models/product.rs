use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Entreprenad,
    Event,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub slug: String,
    pub name: String,
    pub price_per_day: f64,
    pub description: String,
    pub category: ProductCategory,
    #[serde(default)]
    pub image: String,
    pub agreement: String,
    pub info: Option<String>,
    #[serde(default)]
    pub requires_delivery: bool,
    /// Only bookable Friday to Sunday.
    #[serde(default)]
    pub weekend_only: bool,
}

/// Slugs of products delivered to the customer's address.
pub const PRODUCTS_REQUIRING_DELIVERY: [&str; 2] = ["bastuvagn", "badtunna"];

pub fn requires_delivery(slug: &str) -> bool {
    PRODUCTS_REQUIRING_DELIVERY.contains(&slug)
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

fn disallowed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9-]").expect("valid slug regex"))
}

/// URL slug for a product name: lowercase, whitespace to dashes, å/ä/ö folded,
/// everything else outside `[a-z0-9-]` dropped.
pub fn slug_from_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let dashed = whitespace_re().replace_all(&lowered, "-");
    let folded: String = dashed
        .chars()
        .map(|c| match c {
            'å' | 'ä' => 'a',
            'ö' => 'o',
            other => other,
        })
        .collect();
    disallowed_re().replace_all(&folded, "").into_owned()
}

fn product(
    slug: &str,
    name: &str,
    price_per_day: f64,
    category: ProductCategory,
    description: &str,
    info: Option<&str>,
) -> Product {
    Product {
        slug: slug.to_string(),
        name: name.to_string(),
        price_per_day,
        description: description.to_string(),
        category,
        image: format!("/images/{}.jpg", slug),
        agreement: match category {
            ProductCategory::Entreprenad => "standard-uthyrning".to_string(),
            ProductCategory::Event => "bastu-uthyrning".to_string(),
        },
        info: info.map(String::from),
        requires_delivery: requires_delivery(slug),
        weekend_only: slug == "bastuvagn",
    }
}

/// Catalog served when no product store is attached.
pub fn default_catalog() -> Vec<Product> {
    use ProductCategory::*;
    vec![
        product(
            "minigravare",
            "Minigrävare",
            1500.0,
            Entreprenad,
            "Kompakt minigrävare för grävning, schakt och trädgårdsarbete.",
            None,
        ),
        product(
            "dumper",
            "Hjuldumper Batteri",
            900.0,
            Entreprenad,
            "Tyst och miljövänlig batteridriven hjuldumper. Lastkapacitet upp till 500 kg.",
            None,
        ),
        product(
            "markvibrator",
            "Hjuldumper med svängdörr",
            600.0,
            Entreprenad,
            "Effektiv och lämplig för mindre projekt och trädgårdsarbeten.",
            None,
        ),
        product(
            "kompaktor",
            "Annan maskin",
            750.0,
            Entreprenad,
            "Robust och enkel att hantera vid schakt och omläggning.",
            None,
        ),
        product(
            "bastuvagn",
            "Mobil Bastuvagn",
            900.0,
            Event,
            "Lyxig mobil bastu på släp. Snabb uppvärmning, perfekt för event.",
            Some("Plats för 6 pers"),
        ),
        product(
            "badtunna",
            "Badtunna",
            1200.0,
            Event,
            "Träbadtunna för utomhus. Perfekt för event och avkoppling.",
            None,
        ),
    ]
}

/// Look up a product by slug. The query is slugged first, so a display name
/// such as "Minigrävare" finds `minigravare`.
pub fn find_product<'a>(catalog: &'a [Product], query: &str) -> Option<&'a Product> {
    let slug = slug_from_name(query);
    catalog.iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_name() {
        assert_eq!(slug_from_name("Mobil Bastuvagn Lyx"), "mobil-bastuvagn-lyx");
        assert_eq!(slug_from_name("  Minigrävare 1.8 ton "), "minigravare-18-ton");
        assert_eq!(slug_from_name("Hjuldumper Batteri"), "hjuldumper-batteri");
        assert_eq!(slug_from_name("Större Ö"), "storre-o");
    }

    #[test]
    fn test_requires_delivery() {
        assert!(requires_delivery("bastuvagn"));
        assert!(requires_delivery("badtunna"));
        assert!(!requires_delivery("minigravare"));
    }

    #[test]
    fn test_default_catalog_lookup() {
        let catalog = default_catalog();
        let sauna = find_product(&catalog, "bastuvagn").unwrap();
        assert!(sauna.weekend_only);
        assert!(sauna.requires_delivery);
        assert_eq!(sauna.price_per_day, 900.0);
        assert!(find_product(&catalog, "okand").is_none());
        assert_eq!(find_product(&catalog, "Minigrävare").unwrap().slug, "minigravare");
        assert_eq!(find_product(&catalog, " BADTUNNA ").unwrap().slug, "badtunna");
    }
}
