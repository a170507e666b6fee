use crate::cli::commands::live::connect;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::snapshot;
use crate::ui::report::print_groups;
use crate::utils::path::expand_tilde;

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Groups { snapshot: source } = &cli.command {
        let foundation = match source {
            Some(f) => snapshot::load(&expand_tilde(f))?.foundation,
            None => connect(cfg).await?.1,
        };
        print_groups(&foundation.selectable_groups());
    }
    Ok(())
}
