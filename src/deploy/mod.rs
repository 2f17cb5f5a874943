use clap::Args;
use console::style;

use crate::prelude::*;

mod config;
mod helpers;
mod interfaces;
mod uploader;

pub mod exporter;

use config::Config;
use exporter::OutcomeExporter;
use interfaces::DeployOutcome;

#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Path to the IPA to deploy
    #[arg(long, env = "ipa_path", default_value = "")]
    pub ipa_path: String,

    /// The Installr API token used to authenticate the upload
    #[arg(long, env = "api_token", default_value = "", hide_env_values = true)]
    pub api_token: String,

    /// Release notes attached to the uploaded build
    #[arg(long, env = "notes", default_value = "")]
    pub notes: String,

    /// Notify flag, passed through to the service verbatim
    #[arg(long, env = "notify", default_value = "")]
    pub notify: String,

    /// Add flag, passed through to the service verbatim
    #[arg(long, env = "add", default_value = "")]
    pub add: String,
}

// Section headers are preceded by a blank separator line
fn config_log_lines(args: &DeployArgs) -> Vec<String> {
    vec![
        String::new(),
        "Configs:".into(),
        format!("  ipa_path: {}", args.ipa_path),
        "  api_token: ***".into(),
        format!("  releaseNotes: {}", args.notes),
        format!("  notify: {}", args.notify),
        format!("  add: {}", args.add),
    ]
}

fn log_config(args: &DeployArgs) {
    for line in config_log_lines(args) {
        info!("{line}");
    }
}

pub async fn run(args: DeployArgs, exporter: &dyn OutcomeExporter) -> Result<()> {
    log_config(&args);
    let config = Config::try_from(args)?;
    debug!("config: {:#?}", config);

    let body = uploader::upload(&config).await?;

    let outcome = DeployOutcome::from_body(&body)?;
    info!("  {}", style(format!("Status: {}", outcome.status)).green().bold());
    if !outcome.build_url.is_empty() {
        info!(
            "  {}",
            style(format!("Build URL: {}", outcome.build_url)).green().bold()
        );
    }

    exporter::export_outcome(exporter, &outcome)?;
    Ok(())
}

#[cfg(test)]
impl DeployArgs {
    /// Constructs a new `DeployArgs` with default values for testing purposes
    pub fn test() -> Self {
        Self {
            ipa_path: "".into(),
            api_token: "".into(),
            notes: "".into(),
            notify: "".into(),
            add: "".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exporter::testing::MemoryExporter;

    #[test]
    fn test_config_log_lines_start_with_separator_and_mask_token() {
        let args = DeployArgs {
            ipa_path: "/tmp/app.ipa".into(),
            api_token: "secret-token".into(),
            ..DeployArgs::test()
        };
        let lines = config_log_lines(&args);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Configs:");
        assert!(lines.contains(&"  api_token: ***".to_string()));
        assert!(lines.iter().all(|line| !line.contains("secret-token")));
    }

    #[tokio::test]
    async fn test_run_with_invalid_config_exports_nothing() {
        let exporter = MemoryExporter::default();
        let result = run(DeployArgs::test(), &exporter).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "Missing required input: ipa_path"
        );
        // The failure happened before the export stage; the best-effort
        // "failed" status export is the driver's responsibility.
        assert!(exporter.exported.borrow().is_empty());
    }
}
