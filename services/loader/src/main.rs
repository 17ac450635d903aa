use std::io::Write;
use std::process::ExitCode;

use spamview_common::error::{SpamViewError, SpamViewResult};
use spamview_config::{init_tracing, AppConfig};
use spamview_loader::render::ResultPage;
use spamview_loader::spam::client::{SpamClient, SpamClientConfig};
use spamview_loader::spam::loader::{EndpointOutcome, ResultLoader};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("spamview: {e}");
            return ExitCode::from(2);
        }
    };
    init_tracing(&config.log_level);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "spamview failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> SpamViewResult<()> {
    tracing::info!(
        service = "spamview",
        base_url = %config.base_url,
        format = %config.output_format,
        "starting"
    );

    let client = SpamClient::new(SpamClientConfig::from(&config))
        .map_err(|e| SpamViewError::Internal(format!("failed to build http client: {e}")))?;

    let mut page = ResultPage::default();
    let report = {
        let (chart, accuracy, precision) = page.regions_mut();
        ResultLoader::new(client, chart, accuracy, precision)
            .load_all()
            .await
    };

    let rows = match report.results {
        EndpointOutcome::Rendered(rows) => rows,
        EndpointOutcome::Failed(_) => 0,
    };
    tracing::info!(
        rows,
        failures = report.failure_count(),
        "load finished"
    );

    let rendered = page.render(config.output_format);
    match &config.output_path {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
