//! Configuration utility functions.

use std::path::{Component, Path, PathBuf};

/// Extract path component from a URL string
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("http://erichardy.pythonanywhere.com/blog") -> Some("blog")
/// extract_url_path("https://example.com")                      -> Some("")
/// extract_url_path("invalid")                                  -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    let path = parsed.path().trim_matches('/');
    Some(path.to_string())
}

/// Find config file by searching upward from current directory
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` until a directory containing `config_name` is found.
///
/// ```text
/// /home/user/site/content/blog/  ← start
/// /home/user/site/siteconf.toml  ← found
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first, then falls back to joining with cwd.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` in a config path.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Check that a path value is usable as a filesystem path at all.
///
/// Returns a description of the problem, if any.
pub fn path_syntax_error(path: &Path) -> Option<&'static str> {
    let raw = path.as_os_str();
    if raw.is_empty() {
        return Some("path must not be empty");
    }
    if raw.to_string_lossy().contains('\0') {
        return Some("path must not contain NUL bytes");
    }
    None
}

/// Whether a relative path climbs above the directory it is joined to.
///
/// `a/../b` stays inside, `../b` and `a/../../b` do not.
pub fn escapes_root(path: &Path) -> bool {
    let mut depth: usize = 0;
    for component in path.components() {
        match component {
            Component::ParentDir => {
                if depth == 0 {
                    return true;
                }
                depth -= 1;
            }
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => return true,
        }
    }
    false
}

// ============================================================================
// tests
// ============================================================================
