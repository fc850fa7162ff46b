use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Creates the config directory (if missing) and a configuration file with
/// default values. An existing file is only replaced with `--force`.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = Config::resolve_path(cli.config.as_deref());

    info("Initializing geotimelog…");

    if Config::init_at(&path, force)? {
        info("Edit center_lat, center_lon and radius_meters to describe your workplace.");
    } else {
        warning(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }

    success("geotimelog initialization completed!");
    Ok(())
}
