use crate::render::sink::{PlaceholderSink, TableSink};

use super::models::MetricKind;
use super::source::ResultsSource;

/// What one endpoint flow did to its render target.
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointOutcome<T> {
    Rendered(T),
    Failed(String),
}

impl<T> EndpointOutcome<T> {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Completion value of [`ResultLoader::load_all`], one outcome per endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// Number of rows appended to the chart.
    pub results: EndpointOutcome<usize>,
    pub accuracy: EndpointOutcome<f64>,
    pub precision: EndpointOutcome<f64>,
}

impl LoadReport {
    pub fn failure_count(&self) -> usize {
        [
            !self.results.is_rendered(),
            !self.accuracy.is_rendered(),
            !self.precision.is_rendered(),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count()
    }
}

/// Fetches the classification list and both metrics and projects them onto
/// three injected render targets.
///
/// Every flow contains its own failure: an error is logged and the target
/// keeps whatever it showed before. Nothing is retried.
pub struct ResultLoader<S, T, A, P> {
    source: S,
    table: T,
    accuracy: A,
    precision: P,
}

impl<S, T, A, P> ResultLoader<S, T, A, P>
where
    S: ResultsSource,
    T: TableSink,
    A: PlaceholderSink,
    P: PlaceholderSink,
{
    pub fn new(source: S, table: T, accuracy: A, precision: P) -> Self {
        Self {
            source,
            table,
            accuracy,
            precision,
        }
    }

    /// Run all three flows concurrently and wait for every one to finish.
    pub async fn load_all(&mut self) -> LoadReport {
        let Self {
            source,
            table,
            accuracy,
            precision,
        } = self;
        let source = &*source;

        let (results, accuracy, precision) = tokio::join!(
            load_results_into(source, table),
            load_metric_into(source, MetricKind::Accuracy, accuracy),
            load_metric_into(source, MetricKind::Precision, precision),
        );

        LoadReport {
            results,
            accuracy,
            precision,
        }
    }

    pub async fn load_results(&mut self) -> EndpointOutcome<usize> {
        load_results_into(&self.source, &mut self.table).await
    }

    pub async fn load_accuracy(&mut self) -> EndpointOutcome<f64> {
        load_metric_into(&self.source, MetricKind::Accuracy, &mut self.accuracy).await
    }

    pub async fn load_precision(&mut self) -> EndpointOutcome<f64> {
        load_metric_into(&self.source, MetricKind::Precision, &mut self.precision).await
    }

    pub fn into_parts(self) -> (S, T, A, P) {
        (self.source, self.table, self.accuracy, self.precision)
    }
}

async fn load_results_into<S, T>(source: &S, table: &mut T) -> EndpointOutcome<usize>
where
    S: ResultsSource,
    T: TableSink,
{
    let endpoint = source.describe(None);
    match source.fetch_results().await {
        Ok(records) => {
            tracing::info!(%endpoint, count = records.len(), "loaded classification results");
            tracing::debug!(?records, "classification results");
            for record in &records {
                table.append_row(record.cells());
            }
            EndpointOutcome::Rendered(records.len())
        }
        Err(e) => {
            tracing::warn!(%endpoint, error = %e, "failed to load classification results");
            EndpointOutcome::Failed(e.to_string())
        }
    }
}

async fn load_metric_into<S, P>(source: &S, kind: MetricKind, field: &mut P) -> EndpointOutcome<f64>
where
    S: ResultsSource,
    P: PlaceholderSink,
{
    let endpoint = source.describe(Some(kind));
    match source.fetch_metric(kind).await {
        Ok(metric) => {
            tracing::info!(%endpoint, metric = %kind, val = metric.val, "loaded metric");
            tracing::debug!(?metric, "metric payload");
            field.set_placeholder(metric.placeholder_text());
            EndpointOutcome::Rendered(metric.val)
        }
        Err(e) => {
            tracing::warn!(%endpoint, metric = %kind, error = %e, "failed to load metric");
            EndpointOutcome::Failed(e.to_string())
        }
    }
}
