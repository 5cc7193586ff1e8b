//! # Recommend
//!
//! Batch client for the external AI recommender. Loads the catalog, keeps the
//! products relevant to the query keyword, posts `{query, products}` to the
//! recommender endpoint, and saves the JSON response for review. All
//! recommendation logic lives on the other side of the wire.

use std::{fs, path::Path};

use anyhow::{Context, bail};
use catalog::Product;
use serde::Serialize;
use serde_json::{Value, json};

/// Trimmed product shape sent over the wire, matching what the frontend
/// sends; drops `id` and keeps the payload small.
#[derive(Serialize)]
pub struct SimpleProduct<'a> {
    pub sku: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub features: &'a [String],
}

impl<'a> SimpleProduct<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            sku: &product.sku,
            name: &product.name,
            description: &product.description,
            category: &product.category,
            features: &product.features,
        }
    }
}

/// First alphanumeric token of the query, lowercased.
pub fn query_keyword(query: &str) -> Option<String> {
    query
        .split(|c: char| !c.is_ascii_alphanumeric())
        .find(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Products whose name/description/category/features mention the keyword.
/// Falls back to the full catalog when the filter matches nothing, so the
/// recommender always has something to rank.
pub fn filter_products<'a>(products: &'a [Product], keyword: &str) -> Vec<&'a Product> {
    let filtered: Vec<&Product> = products
        .iter()
        .filter(|p| {
            let haystack = format!(
                "{} {} {} {}",
                p.name,
                p.description,
                p.category,
                p.features.join(" ")
            )
            .to_lowercase();

            haystack.contains(keyword)
        })
        .collect();

    if filtered.is_empty() {
        products.iter().collect()
    } else {
        filtered
    }
}

pub fn build_request(products: &[Product], query: &str) -> anyhow::Result<Value> {
    let Some(keyword) = query_keyword(query) else {
        bail!("query '{query}' has no searchable token");
    };

    let selected: Vec<SimpleProduct> = filter_products(products, &keyword)
        .into_iter()
        .map(SimpleProduct::from)
        .collect();

    Ok(json!({ "query": query, "products": selected }))
}

pub async fn run(
    products: &[Product],
    query: &str,
    server_url: &str,
    out: &Path,
) -> anyhow::Result<()> {
    let body = build_request(products, query)?;
    let count = body["products"].as_array().map_or(0, Vec::len);

    println!("Posting {count} products to {server_url} with query '{query}'");

    let response = reqwest::Client::new()
        .post(server_url)
        .json(&body)
        .send()
        .await
        .with_context(|| format!("failed to reach {server_url}"))?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        bail!("server responded {status}: {text}");
    }

    let result: Value = response.json().await.context("malformed response body")?;

    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out, serde_json::to_string_pretty(&result)?)?;

    println!("Saved response to {}", out.display());
    if let Some(answer) = result.get("assistantResponse").and_then(Value::as_str) {
        println!("assistantResponse: {answer}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str, description: &str) -> Product {
        Product {
            id,
            sku: format!("SKU-{id}"),
            name: name.to_string(),
            category: "Electronics".to_string(),
            description: description.to_string(),
            features: Vec::new(),
        }
    }

    #[test]
    fn test_keyword_is_first_alphanumeric_token() {
        assert_eq!(query_keyword("Laptop for travel"), Some("laptop".to_string()));
        assert_eq!(query_keyword("--gaming laptop"), Some("gaming".to_string()));
        assert_eq!(query_keyword("!!!"), None);
    }

    #[test]
    fn test_filter_keeps_mentions() {
        let products = vec![
            product(1, "MacBook Pro 16", "powerful laptop"),
            product(2, "Sony WH-1000XM5", "noise cancelling headphones"),
        ];

        let filtered = filter_products(&products, "laptop");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_filter_falls_back_to_full_catalog() {
        let products = vec![product(1, "MacBook Pro 16", "powerful laptop")];

        let filtered = filter_products(&products, "toaster");

        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_request_shape() {
        let products = vec![product(1, "MacBook Pro 16", "powerful laptop")];

        let body = build_request(&products, "laptop").unwrap();

        assert_eq!(body["query"], "laptop");
        assert_eq!(body["products"][0]["sku"], "SKU-1");
        assert!(body["products"][0].get("id").is_none());
    }
}
