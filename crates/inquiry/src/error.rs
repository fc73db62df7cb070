#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid backend base url: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
