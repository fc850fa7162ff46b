use crate::errors::AppResult;
use crate::export::model::ReportTable;
use csv::Writer;

/// Render the report as CSV: header, one row per day, summary last.
pub fn render_csv(table: &ReportTable<'_>) -> AppResult<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(table.labels.headers)?;

    for row in table.text_rows() {
        wtr.write_record(row.cells())?;
    }

    wtr.flush()?;
    wtr.into_inner()
        .map_err(|e| crate::errors::AppError::Export(format!("CSV buffer error: {e}")))
}
