pub mod template;

use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

use crate::parsing::ParseError;

pub use template::{CONTENT_PLACEHOLDER, FALLBACK_TITLE, TITLE_PLACEHOLDER, render_page};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(PathBuf),
    #[error("Invalid static directory: {0}")]
    InvalidStaticDir(PathBuf),
    #[error("Path {path} is not inside {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a file, reporting a missing file as [`SiteError::NotFound`]
fn read_file(path: &Path) -> Result<String, SiteError> {
    if !path.exists() {
        return Err(SiteError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(io_error(path))
}

/// Write content to a file, creating parent directories
fn write_file(path: &Path, content: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(path, content).map_err(io_error(path))
}

/// Render one markdown file through the template into `dest_path`
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = read_file(from_path)?;
    let template = read_file(template_path)?;
    let page = render_page(&markdown, &template)?;
    write_file(dest_path, &page)
}

/// Generate an `.html` page for every `.md` file under `content_dir`.
///
/// `content_dir/a/b.md` is written to `dest_dir/a/b.html`. Returns the
/// written paths in sorted source order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::InvalidContentDir(content_dir.to_path_buf()));
    }

    let mut written = Vec::new();
    for md_path in scan_markdown_files(content_dir)? {
        let dest_path = output_path(&md_path, content_dir, dest_dir)?;
        generate_page(&md_path, template_path, &dest_path)?;
        written.push(dest_path);
    }

    log::info!(
        "Generated {} page(s) from {}",
        written.len(),
        content_dir.display()
    );
    Ok(written)
}

/// Map a markdown source under `content_dir` to its html path under `dest_dir`
pub fn output_path(
    md_path: &Path,
    content_dir: &Path,
    dest_dir: &Path,
) -> Result<PathBuf, SiteError> {
    let outside = || SiteError::OutsideRoot {
        path: md_path.to_path_buf(),
        root: content_dir.to_path_buf(),
    };
    let relative = md_path.strip_prefix(content_dir).map_err(|_| outside())?;
    let relative = RelativePathBuf::from_path(relative).map_err(|_| outside())?;
    Ok(relative.with_extension("html").to_path(dest_dir))
}

/// Scan for markdown files under a directory, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(io_error(dir))?;

    for entry in entries {
        let entry = entry.map_err(io_error(dir))?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Mirror `source` into `destination`, replacing whatever was there.
///
/// Returns the number of files copied.
pub fn copy_static(source: &Path, destination: &Path) -> Result<usize, SiteError> {
    if !source.is_dir() {
        return Err(SiteError::InvalidStaticDir(source.to_path_buf()));
    }
    if destination.exists() {
        log::debug!("Removing {}", destination.display());
        fs::remove_dir_all(destination).map_err(io_error(destination))?;
    }
    copy_directory_recursive(source, destination)
}

fn copy_directory_recursive(source: &Path, destination: &Path) -> Result<usize, SiteError> {
    fs::create_dir_all(destination).map_err(io_error(destination))?;

    let mut copied = 0;
    for entry in fs::read_dir(source).map_err(io_error(source))? {
        let entry = entry.map_err(io_error(source))?;
        let source_path = entry.path();
        let destination_path = destination.join(entry.file_name());

        if source_path.is_dir() {
            copied += copy_directory_recursive(&source_path, &destination_path)?;
            log::debug!("Copied directory: {}", destination_path.display());
        } else {
            fs::copy(&source_path, &destination_path).map_err(io_error(&source_path))?;
            log::debug!("Copied file: {}", destination_path.display());
            copied += 1;
        }
    }

    Ok(copied)
}
