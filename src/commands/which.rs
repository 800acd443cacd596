use crate::error::Result;
use crate::resolver::BinaryResolver;
use std::path::PathBuf;

pub struct WhichCommand {
    resolver: BinaryResolver,
}

impl WhichCommand {
    pub fn new(
        base: Option<PathBuf>,
        platform: Option<String>,
        arch: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            resolver: super::new_resolver(base, platform, arch)?,
        })
    }

    pub fn execute(&self, package: &str, names: &[String], json: bool) -> Result<()> {
        let resolved = super::resolve_or_fail(&self.resolver, package, names)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        } else {
            println!("{}", resolved.path.display());
        }

        Ok(())
    }
}
