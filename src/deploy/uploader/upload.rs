use console::style;
use reqwest::multipart::{Form, Part};
use tokio::fs::File;

use crate::prelude::*;
use crate::request_client::REQUEST_CLIENT;

use super::super::config::Config;

const TOKEN_HEADER: &str = "X-InstallrAppToken";
const FILE_FIELD: &str = "qqfile";

/// Assemble the multipart body: the three text fields are always present
/// (possibly empty), the artifact is streamed as the single file part with
/// its source path as form filename.
async fn build_form(config: &Config) -> Result<Form> {
    let file = File::open(&config.ipa_path).await.context(format!(
        "Failed to open IPA at path: {}",
        config.ipa_path.display()
    ))?;
    let file_length = file.metadata().await?.len();
    let stream = tokio_util::io::ReaderStream::new(file);
    let part = Part::stream_with_length(reqwest::Body::wrap_stream(stream), file_length)
        .file_name(config.ipa_path.to_string_lossy().into_owned());

    Ok(Form::new()
        .text("releaseNotes", config.notes.clone())
        .text("notify", config.notify.clone())
        .text("add", config.add.clone())
        .part(FILE_FIELD, part))
}

/// POST the artifact to the Installr endpoint and return the raw response
/// body once the status is confirmed to be in [200, 300).
pub async fn upload(config: &Config) -> Result<String> {
    info!("");
    info!("Performing request");

    let form = build_form(config).await?;
    let response = REQUEST_CLIENT
        .post(config.upload_url.clone())
        .header(TOKEN_HEADER, config.api_token.clone())
        .multipart(form)
        .send()
        .await;

    let response = match response {
        Ok(response) => response,
        Err(err) => {
            debug!("Transport-level failure, no status code available");
            bail!("Performing request failed, error: {err}");
        }
    };

    // The server may return diagnostic content even on failure, so the body
    // read outcome is tracked independently of the status check.
    let status = response.status();
    let body = response.text().await;
    match &body {
        Ok(contents) => {
            info!("");
            info!("Response:");
            info!("  status code: {}", status.as_u16());
            info!("  body: {}", contents);
        }
        Err(read_err) => warn!("Failed to read response body, error: {read_err}"),
    }

    if !status.is_success() {
        debug!("Request reached the server but was rejected");
        bail!("Performing request failed, status code: {}", status.as_u16());
    }

    info!("  {}", style("Request succeeded").green().bold());

    body.context("Failed to read response body")
}
