use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::write_bytes;
use crate::sources::{location_history, points_csv};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `convert` subcommand: Records.json → points CSV.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        input,
        output,
        force,
    } = cmd
    {
        let input = expand_tilde(input.as_deref().unwrap_or(&cfg.location_history));
        let output = expand_tilde(output.as_deref().unwrap_or(&cfg.points_csv));

        info(format!("Reading JSON file {}", input.display()));
        let loaded = location_history::read_records_json(&input)?;

        if loaded.skipped > 0 {
            warning(format!(
                "Skipped {} location record(s) with missing or invalid fields",
                loaded.skipped
            ));
        }

        let mut buf = Vec::new();
        points_csv::write_points(&mut buf, &loaded.records)?;
        write_bytes(&output, &buf, *force)?;

        success(format!(
            "Conversion complete: {} point(s) saved to {}",
            loaded.records.len(),
            output.display()
        ));
    }
    Ok(())
}
