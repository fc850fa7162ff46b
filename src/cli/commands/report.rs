use crate::cli::commands::{load_events, load_points, resolve_params};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::PresenceReport;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat, ReportTable};
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{colorize_clock, colorize_duration, colorize_optional};
use crate::utils::date::{Period, month_name};
use crate::utils::path::{expand_tilde, resolve_against};
use crate::utils::table::{Column, Table};
use std::path::PathBuf;

/// Handle the `report` subcommand.
///
/// Both inputs are loaded before anything is written, so a missing or broken
/// source aborts the run without creating the output file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        period,
        points,
        calendar,
        no_calendar,
        output,
        format,
        offset,
        language,
        fence,
        print,
        force,
    } = cmd
    {
        let period = Period::resolve(period)?;
        let params = resolve_params(cfg, period, fence, *offset)?;

        let points = load_points(points.as_deref(), cfg)?;
        let events = if *no_calendar {
            Vec::new()
        } else {
            load_events(calendar.as_deref(), cfg)?
        };

        let report = PresenceReport::build(&points, &events, &params)?;

        info(format!(
            "{} point(s) in {}, {} presence interval(s), {} day(s), {} calendar note(s)",
            report.stats.points_in_month,
            period,
            report.stats.intervals,
            report.stats.days,
            report.stats.calendar_notes
        ));
        if report.stats.open_cluster_dropped {
            warning("The data ends while inside the geofence; that last presence was not counted.");
        }
        if report.rows.is_empty() {
            warning(format!("No presence detected in {period}; writing the total row only."));
        }

        let table = ReportTable::new(
            &report.rows,
            report.summary,
            language.unwrap_or(cfg.language),
            &cfg.date_format,
        );

        if *print {
            print_table(&table, period);
        }

        let path = output
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| default_output_path(cfg, period, *format));

        export::export_report(&table, *format, &path, *force)?;
    }
    Ok(())
}

/// `<output_dir>/work_hours_<YEAR>_<MONTH>.<ext>`
pub fn default_output_path(cfg: &Config, period: Period, format: ExportFormat) -> PathBuf {
    let dir = expand_tilde(&cfg.output_dir);
    resolve_against(
        &dir,
        &format!("work_hours_{}.{}", period.file_suffix(), format.as_str()),
    )
}

fn print_table(table: &ReportTable<'_>, period: Period) {
    header(format!("{} {}", month_name(period.month), period.year));

    let h = table.labels.headers;
    let mut t = Table::new(vec![
        Column::new(h[0], 12),
        Column::new(h[1], 48),
        Column::new(h[2], 13),
        Column::new(h[3], 8),
        Column::new(h[4], 8),
    ]);

    for day in table.rows {
        t.add_row(table.day_row(day).cells().map(str::to_string).to_vec());
    }
    t.add_row(table.summary_row().cells().map(str::to_string).to_vec());

    let rendered = t.render_with(|col, cell| match col {
        1 => colorize_optional(cell),
        3 | 4 if !cell.trim().is_empty() => colorize_clock(cell),
        _ => cell.to_string(),
    });

    for line in rendered.lines() {
        println!("{line}");
    }
    let total = table.summary.duration_text();
    println!();
    println!("{}", colorize_duration(&total, table.summary.total_seconds));
}
