use std::path::PathBuf;

use crate::prelude::*;
use url::Url;

use super::DeployArgs;
use super::helpers::is_path_exists;

const UPLOAD_URL: &str = "https://www.installrapp.com/apps.json";

#[derive(Debug)]
pub struct Config {
    pub upload_url: Url,
    pub ipa_path: PathBuf,
    pub api_token: String,
    pub notes: String,
    pub notify: String,
    pub add: String,
}

impl TryFrom<DeployArgs> for Config {
    type Error = Error;
    fn try_from(args: DeployArgs) -> Result<Self> {
        if args.ipa_path.is_empty() {
            bail!("Missing required input: ipa_path");
        }
        let ipa_path = PathBuf::from(&args.ipa_path);
        match is_path_exists(&ipa_path) {
            Ok(true) => {}
            Ok(false) => bail!("No IPA found to deploy. Specified path was: {}", args.ipa_path),
            Err(err) => {
                return Err(err.context(format!(
                    "Failed to check if path ({}) exists",
                    args.ipa_path
                )));
            }
        }
        if args.api_token.is_empty() {
            bail!("No api_token provided as environment variable. Terminating...");
        }

        let upload_url = Url::parse(UPLOAD_URL)
            .map_err(|e| anyhow!("Invalid upload URL: {UPLOAD_URL}, {e}"))?;

        Ok(Self {
            upload_url,
            ipa_path,
            api_token: args.api_token,
            notes: args.notes,
            notify: args.notify,
            add: args.add,
        })
    }
}
