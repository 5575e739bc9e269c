// HTML rendering of the gadget view states.
//
// The chart itself is drawn by the embedding page's charting library; this
// module only emits the container with the dataset embedded as JSON, so
// nothing here depends on any particular renderer.
use crate::application::gadget_service::{ChartOptions, GadgetView};
use crate::domain::chart::ChartDataset;
use crate::domain::kpi::KpiTableEntry;
use crate::domain::table::{escape_html, render_kpi_table};

/// Fallback text shown when the timeline is absent or empty.
pub const NO_DATA_MESSAGE: &str = "No Data available";

pub fn render_page(view: &GadgetView) -> String {
    match view {
        GadgetView::NoData => format!("<div id=\"chart_div\"><p>{}</p></div>\n", NO_DATA_MESSAGE),
        GadgetView::Chart { dataset, options } => render_chart(dataset, options),
    }
}

pub fn render_table_page(entries: &[KpiTableEntry]) -> String {
    render_kpi_table(entries)
}

fn render_chart(dataset: &ChartDataset, options: &ChartOptions) -> String {
    let payload = serde_json::to_string(dataset).unwrap_or_else(|_| "{}".to_string());
    format!(
        "<div id=\"chart_div\" data-chart-width=\"{}\" data-chart-height=\"{}\" data-chart-title=\"{}\">\n\
         <script type=\"application/json\" id=\"kpi-chart-data\">{}</script>\n\
         </div>\n",
        options.width,
        options.height,
        escape_html(&options.title),
        payload,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartDataset;
    use crate::domain::kpi::{KpiSample, ProjectKpi};

    #[test]
    fn test_no_data_fallback() {
        let html = render_page(&GadgetView::NoData);
        assert!(html.contains("<p>No Data available</p>"));
        assert!(!html.contains("kpi-chart-data"));
    }

    #[test]
    fn test_chart_markup() {
        let samples = vec![KpiSample::new(
            "2024-01-01".to_string(),
            vec![ProjectKpi::new("P1".to_string(), None, 5.0)],
        )];
        let dataset = ChartDataset::from_samples(&samples).unwrap();
        let view = GadgetView::Chart {
            dataset,
            options: ChartOptions {
                width: 450,
                height: 300,
                title: "Key Performance Chart".to_string(),
            },
        };

        let html = render_page(&view);
        assert!(html.contains("data-chart-width=\"450\""));
        assert!(html.contains("data-chart-height=\"300\""));
        assert!(html.contains("data-chart-title=\"Key Performance Chart\""));
        assert!(html.contains(r#"["2024-01-01",5.0]"#));
        assert!(html.contains(r#"{"type":"string","label":"Date"}"#));
    }
}
