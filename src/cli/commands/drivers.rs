use crate::cli::commands::live::connect;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::snapshot;
use crate::ui::report::print_drivers;
use crate::utils::path::expand_tilde;

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Drivers {
        snapshot: source,
        group,
    } = &cli.command
    {
        let foundation = match source {
            Some(f) => snapshot::load(&expand_tilde(f))?.foundation,
            None => connect(cfg).await?.1,
        };
        let drivers: Vec<_> = foundation
            .sorted_drivers()
            .into_iter()
            .filter(|d| match group.as_deref() {
                Some(g) if !g.eq_ignore_ascii_case("all") => d.in_group(g),
                _ => true,
            })
            .collect();
        print_drivers(&drivers);
    }
    Ok(())
}
