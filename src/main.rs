use console::style;

use crate::deploy::exporter::{DEPLOY_STATUS_KEY, EnvmanExporter, OutcomeExporter, STATUS_FAILED};

mod app;
mod deploy;
mod local_logger;
mod prelude;
mod request_client;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let res = crate::app::run().await;
    if let Err(err) = res {
        // Downstream steps key off the status variable, so record the failure
        // before exiting even when the export mechanism itself is flaky.
        if let Err(export_err) = EnvmanExporter.set(DEPLOY_STATUS_KEY, STATUS_FAILED) {
            eprintln!(
                "{}",
                style(format!(
                    "Failed to export {DEPLOY_STATUS_KEY}, error: {export_err:#}"
                ))
                .yellow()
                .bold()
            );
        }
        eprintln!("{}", style(format!("{err:#}")).red().bold());
        std::process::exit(1);
    }
}
