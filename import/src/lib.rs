//! # Image Import
//!
//! One-shot import of a folder of sample images into the `images/` tree the
//! server serves from.
//!
//! Source layout is loose: photographers hand over a mix of per-product
//! subdirectories and stray files at the top level. Each
//! subdirectory is matched against the catalog by name; its files are copied
//! into `images/{product name}/`. Stray files are matched by sku or name
//! token and land in the owning product's folder, or in `_uncategorized/`
//! when nothing claims them.
//!
//! Every entry's outcome is recorded in the [`ImportReport`] so a run can be
//! audited afterwards: `guessed` entries kept their source name because the
//! catalog had no match, and usually mean either a typo in the source folder
//! or a product missing from `products.json`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use catalog::{
    Product, load_catalog,
    resolver::{Association, ProductIndex, associate_file},
};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Debug, Default)]
pub struct ImportReport {
    /// Source entry name paired with the matched product name.
    pub matched: Vec<(String, String)>,
    /// Directories copied under their own name because nothing matched.
    pub guessed: Vec<String>,
    /// Loose files that fell into the `_uncategorized` bucket.
    pub uncategorized: Vec<String>,
    pub files_copied: usize,
}

pub fn run(
    source_dir: &Path,
    products_path: &Path,
    images_root: &Path,
) -> anyhow::Result<ImportReport> {
    let products = load_catalog(products_path)?;
    let index = ProductIndex::new(&products);

    println!("Loaded Products: {}\n", products.len());

    let entries = read_entries(source_dir)
        .with_context(|| format!("failed to read source dir {}", source_dir.display()))?;

    fs::create_dir_all(images_root)
        .with_context(|| format!("failed to create {}", images_root.display()))?;

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let mut report = ImportReport::default();

    for entry in entries {
        pb.set_message(format!("Importing {}", entry.name));

        let association = match entry.kind {
            EntryKind::Directory => index.associate_directory(&entry.name),
            EntryKind::File => associate_file(&products, &entry.name),
        };

        let dest_dir = images_root.join(association.folder_name());

        let copied = match entry.kind {
            EntryKind::Directory => copy_dir_files(&entry.path, &dest_dir),
            EntryKind::File => copy_file(&entry.path, &entry.name, &dest_dir),
        }
        .with_context(|| format!("failed to copy {}", entry.path.display()))?;

        report.files_copied += copied;
        match association {
            Association::Matched(name) => report.matched.push((entry.name, name)),
            Association::Guessed(_) => report.guessed.push(entry.name),
            Association::Uncategorized => report.uncategorized.push(entry.name),
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    Ok(report)
}

struct SourceEntry {
    name: String,
    path: PathBuf,
    kind: EntryKind,
}

enum EntryKind {
    Directory,
    File,
}

fn read_entries(source_dir: &Path) -> io::Result<Vec<SourceEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;

        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            continue;
        };

        entries.push(SourceEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            kind,
        });
    }

    Ok(entries)
}

fn copy_dir_files(src_dir: &Path, dest_dir: &Path) -> io::Result<usize> {
    fs::create_dir_all(dest_dir)?;

    let mut copied = 0;
    for entry in fs::read_dir(src_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::copy(entry.path(), dest_dir.join(entry.file_name()))?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn copy_file(src: &Path, name: &str, dest_dir: &Path) -> io::Result<usize> {
    fs::create_dir_all(dest_dir)?;
    fs::copy(src, dest_dir.join(name))?;

    Ok(1)
}

pub fn print_summary(report: &ImportReport) {
    println!("\nFiles copied: {}", report.files_copied);
    println!("Matched: {}", report.matched.len());
    for (source, product) in &report.matched {
        println!("  {source} -> {product}");
    }

    println!("Guessed (no catalog match, kept source name): {}", report.guessed.len());
    for source in &report.guessed {
        println!("  {source}");
    }

    println!("Uncategorized: {}", report.uncategorized.len());
    for source in &report.uncategorized {
        println!("  {source}");
    }

    println!("\nImport complete. Review the images folder for results.");
}
