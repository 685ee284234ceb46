// Types

pub type Result<VALUE = ()> = std::result::Result<VALUE, Error>;

// Error

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Engine(
        #[from]
        #[source]
        bcrypt_gen_core::Error,
    ),
    #[error("i/o error: {0}")]
    Io(
        #[from]
        #[source]
        std::io::Error,
    ),
    #[error("you must provide {0}")]
    MissingArgument(&'static str),
}
