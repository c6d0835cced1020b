//! Write the default configuration.

use anyhow::{Context, Result};
use stockcast_config::AppConfig;
use tracing::info;

use crate::cli::InitConfigArgs;

pub async fn run(args: InitConfigArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "'{}' already exists. Pass --force to overwrite it",
            args.path.display()
        );
    }

    if let Some(parent) = args.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let toml = AppConfig::default().to_toml()?;
    std::fs::write(&args.path, toml)
        .with_context(|| format!("Failed to write {}", args.path.display()))?;

    info!("Configuration written to {:?}", args.path);
    println!("Wrote default configuration to {}", args.path.display());

    Ok(())
}
