//! Prebuilt binary resolution.
//!
//! Binaries are deposited under a fixed storage convention:
//!
//! ```text
//! <base>/<package>/<platform>/<arch>/<file>
//! ```
//!
//! The resolver maps the host onto the convention's canonical tokens and
//! returns the first candidate executable present in the addressed
//! directory. An absent binary is an ordinary outcome (`Ok(None)`), not an
//! error: the storage root routinely does not exist before the first
//! download has run.

use crate::error::{BinvokeError, Result};
use crate::platform::HostPlatform;
use log::debug;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A successfully resolved executable.
#[derive(Clone, Debug, Serialize)]
pub struct ResolvedBinary {
    pub package: String,
    pub path: PathBuf,
    pub platform: String,
    pub arch: String,
}

/// Resolves executables under one storage root for one platform/arch pair.
///
/// Pure query: never mutates the filesystem, performs at most one directory
/// listing per call, and is safe to use concurrently against the same
/// storage root.
pub struct BinaryResolver {
    base_path: PathBuf,
    host: HostPlatform,
}

impl BinaryResolver {
    /// Resolver for the current host.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_host(base_path, HostPlatform::detect())
    }

    /// Resolver pinned to an explicit platform/arch pair.
    pub fn with_host(base_path: impl Into<PathBuf>, host: HostPlatform) -> Self {
        BinaryResolver {
            base_path: base_path.into(),
            host,
        }
    }

    pub fn host(&self) -> &HostPlatform {
        &self.host
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Directory the storage convention addresses for `package`.
    pub fn target_dir(&self, package: &str) -> PathBuf {
        self.base_path
            .join(package)
            .join(self.host.platform.as_str())
            .join(self.host.arch.as_str())
    }

    /// Resolve the first candidate executable present for `package`.
    ///
    /// Candidates are tried in the caller's order, so the order expresses
    /// priority: a caller can prefer a specific build variant and fall back
    /// to a generic name. On windows a candidate `name` matches only
    /// `name.exe`; elsewhere it matches only `name`.
    ///
    /// Returns `Ok(None)` when the storage root, the target directory, or
    /// every candidate file is missing.
    pub fn resolve(&self, package: &str, candidates: &[String]) -> Result<Option<ResolvedBinary>> {
        let package = package.trim();
        if package.is_empty() {
            return Err(BinvokeError::ValidationError(
                "package name must not be empty".to_string(),
            ));
        }
        if candidates.is_empty() {
            return Err(BinvokeError::ValidationError(
                "at least one candidate executable name is required".to_string(),
            ));
        }
        if candidates.iter().any(|name| name.trim().is_empty()) {
            return Err(BinvokeError::ValidationError(
                "candidate executable names must not be empty".to_string(),
            ));
        }

        let target_dir = self.target_dir(package);
        debug!("Resolving '{package}' in {}", target_dir.display());

        let entries = match self.list_dir(&target_dir)? {
            Some(entries) => entries,
            None => return Ok(None),
        };

        for name in candidates {
            let file_name = self.host.platform.with_executable_extension(name);
            if entries.contains(&file_name) {
                let path = target_dir.join(&file_name);
                debug!("Matched candidate '{name}' at {}", path.display());
                return Ok(Some(ResolvedBinary {
                    package: package.to_string(),
                    path,
                    platform: self.host.platform.to_string(),
                    arch: self.host.arch.to_string(),
                }));
            }
        }

        debug!("No candidate matched for '{package}'");
        Ok(None)
    }

    /// Single-candidate convenience form of [`BinaryResolver::resolve`].
    pub fn resolve_single(&self, package: &str, name: &str) -> Result<Option<ResolvedBinary>> {
        self.resolve(package, &[name.to_string()])
    }

    /// Package directories currently present under the storage root.
    pub fn installed_packages(&self) -> Result<Vec<String>> {
        let read = match fs::read_dir(&self.base_path) {
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(BinvokeError::PermissionDenied(
                    self.base_path.display().to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let mut packages = Vec::new();
        for entry in read {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                packages.push(name);
            }
        }
        packages.sort();
        Ok(packages)
    }

    /// One non-recursive listing of `dir`; `None` if it does not exist.
    ///
    /// Only regular files participate in candidate matching. A missing
    /// directory is the expected not-yet-downloaded state; any other listing
    /// failure indicates a misconfigured environment and is an error.
    fn list_dir(&self, dir: &Path) -> Result<Option<HashSet<String>>> {
        let read = match fs::read_dir(dir) {
            Ok(read) => read,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return Ok(None);
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(BinvokeError::PermissionDenied(dir.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut entries = HashSet::new();
        for entry in read {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                entries.insert(name);
            }
        }
        Ok(Some(entries))
    }
}
