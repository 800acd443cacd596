//! Raw host platform identifiers.
//!
//! The publishing pipeline stores binaries under directories keyed off the
//! tokens its Node.js runtime reports (`process.platform` / `process.arch`),
//! so detection speaks the same vocabulary: `win32`, `darwin`, `linux` and
//! `x64`, `arm64`, `ia32`. Hosts outside that set fall back to the
//! identifiers the Rust standard library reports, which then ride the
//! normalizer's passthrough policy.

/// Raw operating-system token for the current host.
pub fn raw_platform() -> String {
    #[cfg(target_os = "windows")]
    return "win32".to_string();

    #[cfg(target_os = "macos")]
    return "darwin".to_string();

    #[cfg(target_os = "linux")]
    return "linux".to_string();

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    return std::env::consts::OS.to_string();
}

/// Raw CPU-architecture token for the current host.
pub fn raw_arch() -> String {
    #[cfg(target_arch = "x86_64")]
    return "x64".to_string();

    #[cfg(target_arch = "aarch64")]
    return "arm64".to_string();

    #[cfg(target_arch = "x86")]
    return "ia32".to_string();

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "x86")))]
    return std::env::consts::ARCH.to_string();
}
