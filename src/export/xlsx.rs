// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{
    CLOCK_FORMAT, DURATION_FORMAT, duration_to_excel_serial, time_to_excel_serial,
};
use crate::export::model::ReportTable;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Presence";

/// Render the report as an XLSX workbook: styled header, banded day rows,
/// bold summary row, native time and duration cells.
pub fn render_xlsx(table: &ReportTable<'_>) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.labels.headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = table
        .labels
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Day rows
    // ---------------------------
    for (row_index, day) in table.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };
        let text = table.day_row(day);

        let base = Format::new()
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        worksheet.write_with_format(row, 0, text.date.as_str(), &base)?;
        worksheet.write_with_format(row, 1, text.event.as_str(), &base.clone().set_text_wrap())?;
        write_duration(worksheet, row, day.duration_seconds, &base)?;
        worksheet.write_with_format(
            row,
            3,
            time_to_excel_serial(day.from),
            &base.clone().set_num_format(CLOCK_FORMAT).set_align(FormatAlign::Right),
        )?;
        worksheet.write_with_format(
            row,
            4,
            time_to_excel_serial(day.to),
            &base.clone().set_num_format(CLOCK_FORMAT).set_align(FormatAlign::Right),
        )?;

        for (col, value) in text.cells().iter().enumerate() {
            let widest = value.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
            col_widths[col] = col_widths[col].max(widest);
        }
    }

    // ---------------------------
    // Summary row
    // ---------------------------
    let summary_row = (table.rows.len() + 1) as u32;
    let summary_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin);
    worksheet.write_with_format(summary_row, 0, table.labels.summary, &summary_format)?;
    write_duration(
        worksheet,
        summary_row,
        table.summary.total_seconds,
        &summary_format,
    )?;

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_duration(ws: &mut Worksheet, row: u32, seconds: i64, base: &Format) -> AppResult<()> {
    ws.write_with_format(
        row,
        2,
        duration_to_excel_serial(seconds),
        &base
            .clone()
            .set_num_format(DURATION_FORMAT)
            .set_align(FormatAlign::Right),
    )?;
    Ok(())
}
