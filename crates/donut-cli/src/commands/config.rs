use anyhow::{Result, bail};

use donut_core::config::DonutConfig;
use donut_infrastructure::ConfigService;

/// Prints where the configuration lives and the values in effect.
pub fn show(service: &ConfigService) -> Result<()> {
    let config = service.load()?;
    print!("{}", render(service, &config));
    Ok(())
}

/// Writes a config.toml holding the defaults. An existing file is kept.
pub fn init(service: &ConfigService) -> Result<()> {
    if service.path().exists() {
        bail!("{} already exists", service.path().display());
    }
    service.save(&DonutConfig::default())?;
    println!("Wrote {}", service.path().display());
    Ok(())
}

fn render(service: &ConfigService, config: &DonutConfig) -> String {
    let storage_dir = config
        .storage_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "(config directory)".to_string());
    format!(
        "file: {}\nstorage_dir: {}\nlog_filter: {}\nconfirm_reset: {}\n",
        service.path().display(),
        storage_dir,
        config.log_filter,
        config.confirm_reset
    )
}
