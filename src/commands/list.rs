use crate::error::Result;
use crate::resolver::BinaryResolver;
use std::path::PathBuf;

pub struct ListCommand {
    resolver: BinaryResolver,
}

impl ListCommand {
    pub fn new(base: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            resolver: super::new_resolver(base, None, None)?,
        })
    }

    pub fn execute(&self) -> Result<()> {
        let packages = self.resolver.installed_packages()?;

        if packages.is_empty() {
            println!("No packages downloaded");
            println!(
                "Binaries are expected under {}",
                self.resolver.base_path().display()
            );
            return Ok(());
        }

        println!("Downloaded packages:");
        for package in &packages {
            println!("  {package}");
        }

        Ok(())
    }
}
