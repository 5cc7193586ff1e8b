//! # Sitemap
//!
//! Emits `sitemap.xml` from the catalog: the homepage, one entry per product
//! category, and one entry per product.
//!
//! Product pages use hash-based routes (`/#/product/{id}`). Sitemap entries
//! with fragments are still included so search engines that render JavaScript
//! can discover them; switching to clean paths only requires changing
//! `BASE_URL` and the route templates here.

use std::{fs, path::Path};

use catalog::Product;
use chrono::NaiveDate;
use regex::Regex;

pub struct UrlEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: &'static str,
    pub priority: &'static str,
}

pub fn build_entries(products: &[Product], base_url: &str, today: NaiveDate) -> Vec<UrlEntry> {
    let lastmod = today.format("%Y-%m-%d").to_string();

    let mut entries = vec![UrlEntry {
        loc: format!("{base_url}/"),
        lastmod: lastmod.clone(),
        changefreq: "daily",
        priority: "1.0",
    }];

    for category in unique_categories(products) {
        entries.push(UrlEntry {
            loc: format!("{base_url}/#/category/{}", slugify_category(&category)),
            lastmod: lastmod.clone(),
            changefreq: "weekly",
            priority: "0.7",
        });
    }

    for product in products {
        entries.push(UrlEntry {
            loc: format!("{base_url}/#/product/{}", product.id),
            lastmod: lastmod.clone(),
            changefreq: "weekly",
            priority: "0.8",
        });
    }

    entries
}

fn unique_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();

    for product in products {
        if product.category.is_empty() || categories.contains(&product.category) {
            continue;
        }
        categories.push(product.category.clone());
    }

    categories
}

pub fn slugify_category(name: &str) -> String {
    let lowered = name.to_lowercase().replace(" & ", "-and-");

    let collapse = Regex::new(r"\s+").unwrap();
    collapse.replace_all(&lowered, "-").into_owned()
}

pub fn render(entries: &[UrlEntry]) -> String {
    let mut xml = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#.to_string(),
    ];

    for entry in entries {
        xml.push("  <url>".to_string());
        xml.push(format!("    <loc>{}</loc>", entry.loc));
        xml.push(format!("    <lastmod>{}</lastmod>", entry.lastmod));
        xml.push(format!("    <changefreq>{}</changefreq>", entry.changefreq));
        xml.push(format!("    <priority>{}</priority>", entry.priority));
        xml.push("  </url>".to_string());
    }

    xml.push("</urlset>".to_string());
    xml.join("\n")
}

pub fn write_sitemap(
    products: &[Product],
    base_url: &str,
    today: NaiveDate,
    out: &Path,
) -> anyhow::Result<usize> {
    let entries = build_entries(products, base_url, today);
    fs::write(out, render(&entries))?;

    Ok(entries.len())
}
