#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary storage root laid out per the binary storage convention
/// (`base/package/platform/arch/file`). Cleaned up on drop.
pub struct TestStore {
    temp: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        TestStore {
            temp: TempDir::new().expect("Failed to create temp storage root"),
        }
    }

    /// The storage root binaries are deposited under.
    pub fn base(&self) -> PathBuf {
        self.temp.path().join("bin")
    }

    /// A directory usable as BINVOKE_HOME; `base()` is its `bin` child.
    pub fn home(&self) -> PathBuf {
        self.temp.path().to_path_buf()
    }

    /// Deposit a fake binary under the convention directory for `package`.
    pub fn deposit(&self, package: &str, platform: &str, arch: &str, file: &str) -> PathBuf {
        let dir = self.base().join(package).join(platform).join(arch);
        fs::create_dir_all(&dir).expect("Failed to create convention directory");
        let path = dir.join(file);
        fs::write(&path, b"binary").expect("Failed to write binary");
        path
    }

    /// Deposit an executable shell script.
    #[cfg(unix)]
    pub fn deposit_script(
        &self,
        package: &str,
        platform: &str,
        arch: &str,
        file: &str,
        script: &str,
    ) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let dir = self.base().join(package).join(platform).join(arch);
        fs::create_dir_all(&dir).expect("Failed to create convention directory");
        let path = dir.join(file);
        fs::write(&path, script).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to set script permissions");
        path
    }
}

/// Canonical directory segments for the host actually running the tests.
pub fn host_segments() -> (String, String) {
    let platform = match std::env::consts::OS {
        "windows" => "windows",
        "macos" => "darwin",
        other => other,
    };
    let arch = match std::env::consts::ARCH {
        "x86" => "i386",
        other => other,
    };
    (platform.to_string(), arch.to_string())
}
