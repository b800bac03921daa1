use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Reply receiver for '{method}' dropped before the request was resolved")]
    ReceiverDropped { method: String },

    #[error("Request '{method}' was dropped without a reply")]
    ReplyAbandoned { method: String },

    #[error("A handler is already registered for '{0}'")]
    DuplicateHandler(String),
}

pub type Result<T> = std::result::Result<T, ChannelError>;
