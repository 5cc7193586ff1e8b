use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory of sample images to import.
    source_dir: PathBuf,

    /// Catalog to match folder and file names against.
    #[arg(long, default_value = "products.json")]
    products: PathBuf,

    /// Destination images root the server serves from.
    #[arg(long, default_value = "images")]
    images_root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let report = import::run(&args.source_dir, &args.products, &args.images_root)?;
    import::print_summary(&report);

    Ok(())
}
