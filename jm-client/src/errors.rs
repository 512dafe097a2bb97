#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("url parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("api error: {0}")]
    Api(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
