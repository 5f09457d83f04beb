use anyhow::{Context, Result};
use clap::Parser;
use rand::RngExt;
use std::path::PathBuf;

use crabname::config;
use crabname::engine::{NameEngine, TransformRequest};
use crabname::logging;
use crabname::profile::FileProfileStore;
use crabname::report::{format_report, format_unsupported};
use crabname::{parse_command, ProfileService};

/// Apply an `update_name` reply command to the local display name.
#[derive(Debug, Parser)]
#[command(name = "crabname", version)]
struct Cli {
    /// Fixed random seed for reproducible names.
    #[arg(long)]
    seed: Option<u64>,

    /// Name used in the reply line. Defaults to the configured account.
    #[arg(long)]
    screen_name: Option<String>,

    /// Config file to load instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reply line, e.g. `update_name rand 5 kanji`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    line: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    logging::init(&cfg.logging)?;

    let account = cfg.profile.account.clone();
    let screen_name = cli.screen_name.clone().unwrap_or_else(|| account.clone());

    let Some(command) = parse_command(&cli.line.join(" ")) else {
        println!("{}", format_unsupported(&screen_name));
        return Ok(());
    };

    let profiles = FileProfileStore::open(&cfg.profile.path)
        .with_context(|| format!("Failed to open profile store {}", cfg.profile.path.display()))?;
    tracing::debug!(
        account = %account,
        path = %cfg.profile.path.display(),
        current = ?profiles.current_name(&account),
        "profile store opened"
    );

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut engine = NameEngine::seeded(seed, cfg.engine.clone());
    let request = TransformRequest::from_command(&command);
    let result = engine.transform(&request, &account, &profiles).await;

    println!("{}", format_report(&screen_name, &result));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_line() {
        let cli = Cli::try_parse_from(["crabname", "update_name", "rand", "5", "kan"]).unwrap();
        assert_eq!(cli.line.join(" "), "update_name rand 5 kan");
        assert_eq!(cli.seed, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "crabname",
            "--seed",
            "9",
            "--screen-name",
            "alice",
            "--config",
            "/tmp/crabname.toml",
            "update_name",
            "shuffle",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.screen_name.as_deref(), Some("alice"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/crabname.toml")));
        assert_eq!(cli.line, vec!["update_name", "shuffle"]);
    }

    #[test]
    fn test_cli_errors() {
        assert!(Cli::try_parse_from(["crabname"]).is_err());
        assert!(Cli::try_parse_from(["crabname", "--seed"]).is_err());
        assert!(Cli::try_parse_from(["crabname", "--seed", "x", "update_name", "sort"]).is_err());
    }

    #[test]
    fn test_cli_double_dash_passes_flags_through() {
        let cli = Cli::try_parse_from(["crabname", "--", "update_name", "--seed"]).unwrap();
        assert_eq!(cli.line.join(" "), "update_name --seed");
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_cli_negative_length_is_part_of_line() {
        let cli = Cli::try_parse_from(["crabname", "update_name", "rand", "-3"]).unwrap();
        assert_eq!(cli.line, vec!["update_name", "rand", "-3"]);
    }
}
