use crate::prelude::*;
use nestify::nest;
use serde::{Deserialize, Serialize};

use super::exporter::STATUS_FAILED;

nest! {
    #[derive(Debug, Default, Deserialize, Serialize)]*
    #[serde(rename_all = "camelCase", default)]*
    /// Response returned by the Installr upload endpoint.
    ///
    /// Every field carries a default so a degenerate-but-valid payload still
    /// decodes; malformed JSON is the only decode failure.
    pub struct InstallrAppResponse {
        pub action: String,
        pub result: String,
        pub message: String,
        pub app_data: pub struct AppData {
            pub app_id: String,
            pub auto_sync: bool,
            pub id: u32,
            pub title: String,
            pub latest_build: pub struct LatestBuild {
                pub id: u32,
                pub build_file: pub struct BuildFile {
                    pub build_size: String,
                    pub url: String,
                },
                pub date_created: String,
                pub icon: pub struct BuildIcon {
                    pub build_size: String,
                    pub url: String,
                },
            },
        },
    }
}

/// The three values published to the pipeline once a run completes.
#[derive(Debug, PartialEq)]
pub struct DeployOutcome {
    pub status: String,
    pub build_url: String,
    pub raw_json: String,
}

impl DeployOutcome {
    /// Decode the raw response body into a deploy outcome.
    ///
    /// The exported status is never blank: a payload without a `result` field
    /// maps to "failed". The raw body is kept verbatim for the JSON export.
    pub fn from_body(body: &str) -> Result<Self> {
        let response: InstallrAppResponse =
            serde_json::from_str(body).context("Failed to parse response body")?;

        let status = if response.result.is_empty() {
            STATUS_FAILED.to_string()
        } else {
            response.result
        };

        Ok(Self {
            status,
            build_url: response.app_data.latest_build.build_file.url,
            raw_json: body.to_owned(),
        })
    }
}
