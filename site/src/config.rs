use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Workspace checkout this crate was built from.
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Relative paths are taken from the workspace root, absolute ones as-is.
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Built bundle: `index.html`, the wasm package and `assets/`.
    pub dist_dir: PathBuf,
}

impl SiteConfig {
    /// Reads `SITE_HOST`, `SITE_PORT` and `SITE_DIST_DIR`, after loading an
    /// optional `.env`.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!("ignoring unreadable .env: {e}");
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = get("SITE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match get("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT is not a port number: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let root = workspace_root();
        let dist_dir = get("SITE_DIST_DIR")
            .map(|d| resolve_path(&root, Path::new(&d)))
            .unwrap_or_else(|| root.join("dist"));

        Ok(Self {
            host,
            port,
            dist_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, DEFAULT_HOST);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.dist_dir, workspace_root().join("dist"));
    }

    #[test]
    fn reads_overrides() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", " 8080 "),
            ("SITE_DIST_DIR", "/srv/cloud"),
        ]))
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/cloud"));
    }

    #[test]
    fn relative_dist_is_rooted_at_workspace() {
        let cfg = SiteConfig::from_lookup(lookup(&[("SITE_DIST_DIR", "target/site")])).unwrap();
        assert_eq!(cfg.dist_dir, workspace_root().join("target/site"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"), "{err}");
    }
}
