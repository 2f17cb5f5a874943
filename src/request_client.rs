use lazy_static::lazy_static;
use reqwest::ClientBuilder;

const USER_AGENT: &str = "installr-deploy";

lazy_static! {
    // Default client settings: no retry, no custom timeout. The upload body
    // is a file stream and cannot be replayed, so no retry middleware here.
    pub static ref REQUEST_CLIENT: reqwest::Client = ClientBuilder::new()
        .user_agent(USER_AGENT)
        .build()
        .unwrap();
}
