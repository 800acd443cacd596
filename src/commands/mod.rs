//! CLI command implementations.

pub mod list;
pub mod run;
pub mod which;

use crate::config;
use crate::error::{BinvokeError, Result};
use crate::platform::{self, HostPlatform};
use crate::resolver::{BinaryResolver, ResolvedBinary};
use std::path::PathBuf;

/// Build the resolver a command runs against: storage root from the
/// `--base` override or configuration, host from raw-token overrides or
/// detection.
fn new_resolver(
    base: Option<PathBuf>,
    platform: Option<String>,
    arch: Option<String>,
) -> Result<BinaryResolver> {
    let base_path = config::resolve_base_path(base)?;
    let raw_platform = platform.unwrap_or_else(platform::raw_platform);
    let raw_arch = arch.unwrap_or_else(platform::raw_arch);
    let host = HostPlatform::from_raw(&raw_platform, &raw_arch);
    Ok(BinaryResolver::with_host(base_path, host))
}

/// Candidate base names for a lookup; the package name itself when the
/// caller gave none.
fn candidate_names(package: &str, names: &[String]) -> Vec<String> {
    if names.is_empty() {
        vec![package.trim().to_string()]
    } else {
        names.to_vec()
    }
}

/// Resolve, turning the absent outcome into the user-facing error taxonomy.
///
/// A host the mapping tables have never heard of, with nothing published
/// for it verbatim, is unsupported; a known host with a missing binary has
/// simply not been downloaded yet.
fn resolve_or_fail(
    resolver: &BinaryResolver,
    package: &str,
    names: &[String],
) -> Result<ResolvedBinary> {
    let candidates = candidate_names(package, names);
    match resolver.resolve(package, &candidates)? {
        Some(resolved) => Ok(resolved),
        None => {
            let host = resolver.host();
            if !host.platform.is_mapped() || !host.arch.is_mapped() {
                Err(BinvokeError::UnsupportedPlatform {
                    platform: host.platform.to_string(),
                    arch: host.arch.to_string(),
                })
            } else {
                Err(BinvokeError::BinaryNotFound {
                    package: package.trim().to_string(),
                    platform: host.platform.to_string(),
                    arch: host.arch.to_string(),
                    searched_path: resolver.target_dir(package.trim()).display().to_string(),
                    candidates,
                })
            }
        }
    }
}
