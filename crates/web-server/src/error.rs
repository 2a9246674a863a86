// In crates/web-server/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to bind server address: {0}")]
    ServerBindError(std::io::Error),

    #[error("Server terminated: {0}")]
    Serve(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
