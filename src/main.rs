use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use pokesearch::api::{HttpPokemonClient, PokemonApi};
use pokesearch::config::Config;
use pokesearch::logging::init_tracing;
use pokesearch::ui::runtime;

/// Search Pokemon by name or type from the terminal.
#[derive(Debug, Parser)]
#[command(name = "pokesearch", version, about)]
struct Cli {
    /// Config file (default: <config dir>/pokesearch/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL from the config file
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!("loading config from {}", Config::config_path().display())
        })?,
    };
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate().context("validating --base-url")?;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = init_tracing();
    let config = load_config(&cli)?;
    tracing::info!(
        base_url = %config.api.base_url,
        log_file = ?log_file,
        "Starting pokesearch"
    );

    let client = HttpPokemonClient::new(&config.api).context("building HTTP client")?;
    let api: Arc<dyn PokemonApi> = Arc::new(client);

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    runtime::run(&config.ui, api, rt.handle()).context("running terminal UI")?;
    rt.shutdown_background();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::parse_from([
            "pokesearch",
            "--config",
            "/tmp/poke.toml",
            "--base-url",
            "http://127.0.0.1:9000",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/poke.toml")));
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000"));
    }

    #[test]
    fn base_url_override_is_validated() {
        let cli = Cli::parse_from([
            "pokesearch",
            "--config",
            "/nonexistent/pokesearch.toml",
            "--base-url",
            "ftp://example.com",
        ]);
        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let cli = Cli::parse_from(["pokesearch", "--config", "/nonexistent/pokesearch.toml"]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config, Config::default());
    }

    // dirs only honours XDG_CONFIG_HOME on Linux
    #[cfg(target_os = "linux")]
    #[test]
    fn default_location_is_read_without_config_flag() {
        let dir = tempfile::TempDir::new().unwrap();
        let app_dir = dir.path().join("pokesearch");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), "[ui]\ntick_rate_ms = 90\n").unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let config = load_config(&Cli::parse_from(["pokesearch"])).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 90);
        assert_eq!(Config::config_path(), app_dir.join("config.toml"));
    }
}
