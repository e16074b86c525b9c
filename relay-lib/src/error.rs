use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Upload(#[from] crate::server::UploadError),
    #[error(transparent)]
    Forward(#[from] crate::forward::ForwardError),
}
