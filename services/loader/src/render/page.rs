use spamview_config::OutputFormat;

use super::sink::{ChartTable, PlaceholderField};
use super::{html, text};

pub const CHART_HEADER: [&str; 3] = ["File", "Spam Probability", "Actual Class"];

/// The results page: the `chart` table plus the `accuracy` and `precision`
/// fields. Each region is updated independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    chart: ChartTable,
    accuracy: PlaceholderField,
    precision: PlaceholderField,
}

impl Default for ResultPage {
    fn default() -> Self {
        Self {
            chart: ChartTable::default(),
            accuracy: PlaceholderField::new("accuracy"),
            precision: PlaceholderField::new("precision"),
        }
    }
}

impl ResultPage {
    /// Split the page into its three disjoint render targets.
    pub fn regions_mut(
        &mut self,
    ) -> (&mut ChartTable, &mut PlaceholderField, &mut PlaceholderField) {
        (&mut self.chart, &mut self.accuracy, &mut self.precision)
    }

    pub fn chart(&self) -> &ChartTable {
        &self.chart
    }

    pub fn accuracy(&self) -> &PlaceholderField {
        &self.accuracy
    }

    pub fn precision(&self) -> &PlaceholderField {
        &self.precision
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Html => html::render(self),
            OutputFormat::Text => text::render(self),
        }
    }
}
