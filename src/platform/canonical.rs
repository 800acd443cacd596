//! Canonical platform and architecture tokens.
//!
//! Prebuilt binaries are stored under directory names drawn from a small
//! canonical vocabulary. Hosts report their own vendor-specific identifiers,
//! so each lookup normalizes those onto the canonical set exactly once.
//! Tokens the mapping tables do not know pass through unchanged: a host the
//! tables have never heard of can still resolve binaries published for it
//! under its verbatim name.

use std::fmt;

/// Canonical operating-system token, used as a directory-name segment.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum CanonicalPlatform {
    Windows,
    Darwin,
    Linux,
    /// Unmapped raw token, carried through verbatim.
    Other(String),
}

impl CanonicalPlatform {
    /// Map a raw host platform token onto the canonical vocabulary.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "win32" => CanonicalPlatform::Windows,
            "darwin" => CanonicalPlatform::Darwin,
            "linux" => CanonicalPlatform::Linux,
            other => CanonicalPlatform::Other(other.to_string()),
        }
    }

    /// Directory-name segment for this platform.
    pub fn as_str(&self) -> &str {
        match self {
            CanonicalPlatform::Windows => "windows",
            CanonicalPlatform::Darwin => "darwin",
            CanonicalPlatform::Linux => "linux",
            CanonicalPlatform::Other(raw) => raw,
        }
    }

    /// Executable filename extension on this platform.
    pub fn executable_extension(&self) -> &'static str {
        match self {
            CanonicalPlatform::Windows => ".exe",
            _ => "",
        }
    }

    /// Add this platform's executable extension to a file name.
    pub fn with_executable_extension(&self, name: &str) -> String {
        format!("{name}{}", self.executable_extension())
    }

    /// Whether the token came out of the mapping table rather than passing
    /// through.
    pub fn is_mapped(&self) -> bool {
        !matches!(self, CanonicalPlatform::Other(_))
    }
}

impl fmt::Display for CanonicalPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical CPU-architecture token, used as a directory-name segment.
///
/// 64-bit ARM is `aarch64`; publishers must use that segment name.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum CanonicalArch {
    X86_64,
    Aarch64,
    I386,
    /// Unmapped raw token, carried through verbatim.
    Other(String),
}

impl CanonicalArch {
    /// Map a raw host architecture token onto the canonical vocabulary.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "x64" => CanonicalArch::X86_64,
            "arm64" => CanonicalArch::Aarch64,
            "ia32" => CanonicalArch::I386,
            other => CanonicalArch::Other(other.to_string()),
        }
    }

    /// Directory-name segment for this architecture.
    pub fn as_str(&self) -> &str {
        match self {
            CanonicalArch::X86_64 => "x86_64",
            CanonicalArch::Aarch64 => "aarch64",
            CanonicalArch::I386 => "i386",
            CanonicalArch::Other(raw) => raw,
        }
    }

    /// Whether the token came out of the mapping table rather than passing
    /// through.
    pub fn is_mapped(&self) -> bool {
        !matches!(self, CanonicalArch::Other(_))
    }
}

impl fmt::Display for CanonicalArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a raw platform/architecture pair onto the canonical vocabulary.
///
/// Pure lookup with no side effects. Unmapped inputs are valid outputs, not
/// failures.
pub fn normalize(raw_platform: &str, raw_arch: &str) -> (CanonicalPlatform, CanonicalArch) {
    (
        CanonicalPlatform::from_raw(raw_platform),
        CanonicalArch::from_raw(raw_arch),
    )
}
