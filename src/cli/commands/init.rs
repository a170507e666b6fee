use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, PASSWORD_ENV};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write a default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = cli.config_path();

    info("Initializing dlverify…");
    Config::init(&path, force)?;

    success(format!("Config file: {}", path.display()));
    info(format!(
        "Set `database` and `username` there, and the password in {PASSWORD_ENV} or `password`."
    ));
    Ok(())
}
