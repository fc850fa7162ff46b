use crate::errors::AppResult;
use crate::export::model::ReportTable;

/// Render the report as a pretty-printed JSON array; the summary is the last element.
pub fn render_json(table: &ReportTable<'_>) -> AppResult<Vec<u8>> {
    let rows = table.text_rows();
    let mut json_data = serde_json::to_vec_pretty(&rows)?;
    json_data.push(b'\n');
    Ok(json_data)
}
