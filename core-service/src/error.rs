use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Host initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Channel error: {0}")]
    Channel(#[from] core_channel::ChannelError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
