// Alternate rendering path: a plain HTML table of per-project KPI listings.
// Consumes the flat entry shape, not the timeline (see domain::kpi).
use crate::domain::kpi::KpiTableEntry;

/// Renders the flat KPI listing as `<table id="kpi-table">` with a
/// `Project | KPI | Count` header and one row per entry.
pub fn render_kpi_table(entries: &[KpiTableEntry]) -> String {
    let mut html = String::from(
        "<table id=\"kpi-table\">\n\
         <tr id=\"table-header\"><th>Project</th><th>KPI</th><th>Count</th></tr>\n",
    );
    for (i, entry) in entries.iter().enumerate() {
        html.push_str(&format!(
            "<tr id=\"row{}\"><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            i + 1,
            escape_html(&entry.project_key),
            escape_html(&entry.kpi_number),
            entry.issue_count,
        ));
    }
    html.push_str("</table>\n");
    html
}

pub(crate) fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
