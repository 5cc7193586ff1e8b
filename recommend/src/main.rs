use std::path::PathBuf;

use catalog::load_catalog;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Free-form query to ask the recommender.
    #[arg(long, default_value = "laptop")]
    query: String,

    /// Recommender endpoint.
    #[arg(long, default_value = "http://localhost:5000/api/ai/recommend")]
    server: String,

    /// Catalog to draw products from.
    #[arg(long, default_value = "products.json")]
    products: PathBuf,

    /// Where to save the JSON response.
    #[arg(long, default_value = "ai-results/recommendation.json")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let products = load_catalog(&args.products)?;

    recommend::run(&products, &args.query, &args.server, &args.out).await
}
