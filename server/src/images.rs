//! Filesystem side of the product-images endpoint.
//!
//! The listing is read fresh on every request and treated as a snapshot for
//! the duration of one resolution; there is no cache to invalidate when
//! folders are added or renamed.

use std::{fs, io, path::Path};

use catalog::resolver::resolve;

pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "svg"];

/// Finds the on-disk folder for a requested product name.
///
/// An exactly-named directory short-circuits the listing; otherwise the
/// subdirectories of `images_root` are matched in discovery order. Returns the
/// actual folder name so URLs are built from what exists on disk, not from
/// what was requested.
pub fn resolve_product_dir(images_root: &Path, requested: &str) -> io::Result<Option<String>> {
    if images_root.join(requested).is_dir() {
        return Ok(Some(requested.to_string()));
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(images_root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(resolve(requested, &dirs).map(str::to_string))
}

pub fn list_image_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if has_image_extension(&name) {
            files.push(name);
        }
    }

    Ok(files)
}

fn has_image_extension(name: &str) -> bool {
    let lower = name.to_lowercase();

    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// Public URLs, assuming the server serves `/images` statically from the
/// images root.
///
/// Encoding is stricter than JavaScript's `encodeURIComponent`: `!'()*` are
/// percent-encoded too, so `photo(1).jpg` becomes `photo%281%29.jpg`. The
/// static file service decodes both forms to the same path; only the literal
/// URL text differs for file names containing those characters.
pub fn image_urls(folder: &str, files: &[String]) -> Vec<String> {
    files
        .iter()
        .map(|file| {
            format!(
                "/images/{}/{}",
                urlencoding::encode(folder),
                urlencoding::encode(file)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs::{File, create_dir};

    use tempfile::tempdir;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_exact_directory_short_circuits() {
        let root = tempdir().unwrap();
        create_dir(root.path().join("macbook-pro-16")).unwrap();
        create_dir(root.path().join("MacBook Pro 16")).unwrap();

        let found = resolve_product_dir(root.path(), "MacBook Pro 16").unwrap();

        assert_eq!(found.as_deref(), Some("MacBook Pro 16"));
    }

    #[test]
    fn test_fuzzy_directory_match() {
        let root = tempdir().unwrap();
        create_dir(root.path().join("macbook-pro-16")).unwrap();

        let found = resolve_product_dir(root.path(), "MacBook").unwrap();

        assert_eq!(found.as_deref(), Some("macbook-pro-16"));
    }

    #[test]
    fn test_unmatched_request_resolves_to_none() {
        let root = tempdir().unwrap();
        create_dir(root.path().join("dell-xps")).unwrap();

        assert_eq!(resolve_product_dir(root.path(), "lenovo").unwrap(), None);
    }

    #[test]
    fn test_missing_images_root_is_an_io_error() {
        let root = tempdir().unwrap();
        let missing = root.path().join("nope");

        assert!(resolve_product_dir(&missing, "anything").is_err());
    }

    #[test]
    fn test_listing_keeps_only_image_extensions() {
        let root = tempdir().unwrap();
        touch(root.path(), "front.JPG");
        touch(root.path(), "side.webp");
        touch(root.path(), "notes.txt");
        touch(root.path(), "render.svg");
        create_dir(root.path().join("thumbs.png")).unwrap();

        let mut files = list_image_files(root.path()).unwrap();
        files.sort();

        assert_eq!(files, ["front.JPG", "render.svg", "side.webp"]);
    }

    #[test]
    fn test_urls_are_percent_encoded() {
        let urls = image_urls(
            "MacBook Pro 16",
            &["front view.jpg".to_string(), "photo(1).jpg".to_string()],
        );

        assert_eq!(
            urls,
            [
                "/images/MacBook%20Pro%2016/front%20view.jpg",
                "/images/MacBook%20Pro%2016/photo%281%29.jpg",
            ]
        );
    }
}
