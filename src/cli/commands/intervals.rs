use crate::cli::commands::{load_points, resolve_params};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::PresenceReport;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::Period;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_worked;

/// Handle the `intervals` subcommand: print detected presence before rounding and grouping.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Intervals {
        period,
        points,
        fence,
    } = cmd
    {
        let period = Period::resolve(period)?;
        let params = resolve_params(cfg, period, fence, None)?;
        let points = load_points(points.as_deref(), cfg)?;

        let intervals = PresenceReport::detect_intervals(&points, &params);

        if intervals.is_empty() {
            info(format!("No presence detected in {period}."));
            return Ok(());
        }

        header(format!("Presence intervals {period}"));

        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("Start", 19),
            Column::new("End", 19),
            Column::new("Duration", 10),
        ]);
        for (i, iv) in intervals.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                iv.start.format("%Y-%m-%d %H:%M:%S").to_string(),
                iv.end.format("%Y-%m-%d %H:%M:%S").to_string(),
                format_worked(iv.duration_seconds()),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
