use std::io::Write;
use std::process::{Command, Stdio};

use crate::prelude::*;

use super::interfaces::DeployOutcome;

pub const DEPLOY_STATUS_KEY: &str = "INSTALLRAPP_DEPLOY_STATUS";
pub const DEPLOY_BUILD_URL_KEY: &str = "INSTALLRAPP_DEPLOY_BUILD_URL";
pub const DEPLOY_JSON_KEY: &str = "INSTALLRAPP_DEPLOY_JSON";

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAILED: &str = "failed";

/// Capability to publish a key/value pair for downstream pipeline steps.
pub trait OutcomeExporter {
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Exports pipeline variables through the `envman` helper binary, the
/// mechanism Bitrise steps use to hand values to later steps.
pub struct EnvmanExporter;

impl OutcomeExporter for EnvmanExporter {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut child = Command::new("envman")
            .args(["add", "--key", key])
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .context("Failed to spawn envman")?;

        let mut stdin = child
            .stdin
            .take()
            .context("Failed to open envman stdin")?;
        stdin.write_all(value.as_bytes())?;
        // Close stdin so envman sees EOF before we wait on it
        drop(stdin);

        let status = child.wait()?;
        if !status.success() {
            bail!("envman add --key {key} exited with {status}");
        }
        Ok(())
    }
}

/// Publish the three outcome variables, one export per key.
///
/// Each export is independent; the first failure aborts the run with the
/// previously exported values left in place.
pub fn export_outcome(exporter: &dyn OutcomeExporter, outcome: &DeployOutcome) -> Result<()> {
    exporter
        .set(DEPLOY_STATUS_KEY, &outcome.status)
        .context(format!("Failed to export {DEPLOY_STATUS_KEY}"))?;
    exporter
        .set(DEPLOY_BUILD_URL_KEY, &outcome.build_url)
        .context(format!("Failed to export {DEPLOY_BUILD_URL_KEY}"))?;
    exporter
        .set(DEPLOY_JSON_KEY, &outcome.raw_json)
        .context(format!("Failed to export {DEPLOY_JSON_KEY}"))?;
    Ok(())
}
