//! Platform detection and normalization for prebuilt binary lookups.
//!
//! This module maps the host's raw operating-system and CPU-architecture
//! identifiers onto the canonical tokens used as directory-name segments in
//! the binary storage convention, and provides platform-specific process
//! execution for launching resolved binaries.

pub mod process;

mod canonical;
mod detection;

pub use canonical::{CanonicalArch, CanonicalPlatform, normalize};
pub use detection::{raw_arch, raw_platform};

/// The canonical platform/arch pair a resolution runs against.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HostPlatform {
    pub platform: CanonicalPlatform,
    pub arch: CanonicalArch,
}

impl HostPlatform {
    /// Detect and normalize the current host.
    pub fn detect() -> Self {
        Self::from_raw(&detection::raw_platform(), &detection::raw_arch())
    }

    /// Normalize an explicit raw token pair.
    ///
    /// Used to point a resolution at a platform other than the current host,
    /// e.g. to inspect what a lookup would return elsewhere.
    pub fn from_raw(raw_platform: &str, raw_arch: &str) -> Self {
        let (platform, arch) = normalize(raw_platform, raw_arch);
        HostPlatform { platform, arch }
    }
}
