use crate::{
    deploy,
    deploy::exporter::EnvmanExporter,
    local_logger::init_local_logger,
    prelude::*,
};
use clap::{
    Parser,
    builder::{Styles, styling},
};

fn create_styles() -> Styles {
    styling::Styles::styled()
        .header(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Blue.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default())
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Upload an app binary to Installr and export the deploy outcome",
    styles = create_styles()
)]
pub struct Cli {
    #[command(flatten)]
    deploy_args: deploy::DeployArgs,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_local_logger()?;
    debug!("installr-deploy v{}", crate::VERSION);
    deploy::run(cli.deploy_args, &EnvmanExporter).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_env::with_vars;

    #[test]
    fn test_args_from_environment() {
        with_vars(
            [
                ("ipa_path", Some("/tmp/app.ipa")),
                ("api_token", Some("token")),
                ("notes", Some("release notes")),
                ("notify", Some("true")),
                ("add", Some("false")),
            ],
            || {
                let cli = Cli::try_parse_from(["installr-deploy"]).unwrap();
                assert_eq!(cli.deploy_args.ipa_path, "/tmp/app.ipa");
                assert_eq!(cli.deploy_args.api_token, "token");
                assert_eq!(cli.deploy_args.notes, "release notes");
                assert_eq!(cli.deploy_args.notify, "true");
                assert_eq!(cli.deploy_args.add, "false");
            },
        );
    }

    #[test]
    fn test_args_default_to_empty() {
        with_vars(
            [
                ("ipa_path", None::<&str>),
                ("api_token", None),
                ("notes", None),
                ("notify", None),
                ("add", None),
            ],
            || {
                let cli = Cli::try_parse_from(["installr-deploy"]).unwrap();
                assert_eq!(cli.deploy_args.ipa_path, "");
                assert_eq!(cli.deploy_args.api_token, "");
                assert_eq!(cli.deploy_args.notes, "");
            },
        );
    }
}
