use crate::error::{BinvokeError, Result};
use crate::platform::process::exec_replace;
use crate::resolver::BinaryResolver;
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;

pub struct RunCommand {
    resolver: BinaryResolver,
}

impl RunCommand {
    pub fn new(
        base: Option<PathBuf>,
        platform: Option<String>,
        arch: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            resolver: super::new_resolver(base, platform, arch)?,
        })
    }

    /// Resolve the package's binary and hand the process over to it.
    ///
    /// The child inherits the standard streams and receives `args` verbatim.
    /// On Unix the binary replaces this process; on Windows this process
    /// exits with the child's exit code. Either way this function only
    /// returns on failure.
    pub fn execute(&self, package: &str, names: &[String], args: Vec<OsString>) -> Result<()> {
        let resolved = super::resolve_or_fail(&self.resolver, package, names)?;
        debug!(
            "Launching {} with {} argument(s)",
            resolved.path.display(),
            args.len()
        );

        let err = exec_replace(&resolved.path, args);
        Err(BinvokeError::SystemError(format!(
            "Failed to execute {}: {err}",
            resolved.path.display()
        )))
    }
}
