mod common;
use geotimelog::utils::date::{Period, month_name};
use geotimelog::utils::path::{has_extension, resolve_against};
use geotimelog::utils::table::{Column, Table};
use std::path::Path;

#[test]
fn test_period_parse() {
    let p = Period::parse("2024-03").expect("valid");
    assert_eq!(p, Period { year: 2024, month: 3 });
    assert_eq!(p.to_string(), "2024-03");
    assert_eq!(p.file_suffix(), "2024_3");
    assert_eq!(Period::parse(" 2024-3 ").expect("short month").month, 3);

    for bad in ["2024-13", "2024-00", "24-03", "2024", "2024-ab", "2024-003"] {
        assert!(Period::parse(bad).is_err(), "{bad}");
    }
}

#[test]
fn test_period_resolve_defaults_to_current_month() {
    assert_eq!(Period::resolve(&None).expect("current"), Period::current());
    assert_eq!(
        Period::resolve(&Some("2023-12".into())).expect("given"),
        Period { year: 2023, month: 12 }
    );
    assert_eq!(month_name(12), "December");
}

#[test]
fn test_paths() {
    assert!(has_extension(Path::new("Records.JSON"), "json"));
    assert!(!has_extension(Path::new("outputs.csv"), "json"));
    assert_eq!(
        resolve_against(Path::new("/data"), "work_hours_2024_3.csv"),
        Path::new("/data/work_hours_2024_3.csv")
    );
    assert_eq!(
        resolve_against(Path::new("/data"), "/tmp/x.csv"),
        Path::new("/tmp/x.csv")
    );
}

#[test]
fn test_table_wraps_long_and_multiline_cells() {
    let mut table = Table::new(vec![Column::new("Date", 10), Column::new("Event", 12)]);
    table.add_row(vec!["11.03.2024".into(), "*Standup (08:00 - 09:30)\n*Retro".into()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].starts_with("Date       Event"));
    assert!(lines[1].starts_with("---------- ------------"));
    assert!(lines[2].starts_with("11.03.2024 *Standup"));
    assert!(lines.iter().any(|l| l.contains("*Retro")));
    assert!(lines.len() > 4);
}
