use std::path::PathBuf;

use catalog::load_catalog;
use chrono::Local;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Public base URL for sitemap entries.
    #[arg(long, env = "BASE_URL", default_value = "https://yourdomain.com")]
    base_url: String,

    /// Catalog to generate entries from.
    #[arg(long, default_value = "products.json")]
    products: PathBuf,

    /// Output file.
    #[arg(long, default_value = "sitemap.xml")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let products = load_catalog(&args.products)?;
    let today = Local::now().date_naive();

    let count = sitemap::write_sitemap(&products, &args.base_url, today, &args.out)?;
    println!("Sitemap written to {} ({count} urls)", args.out.display());

    Ok(())
}
