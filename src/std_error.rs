use crate::error::{Error, ErrorKind};
use crate::sexp::{ToSymbol, Value};


/// Encapsulation of Errors in rust's std module.
#[derive(Debug)]
pub enum StdError {
    Io(std::io::Error),
}

impl ErrorKind for StdError {
    fn reify(&self) -> Value {
        let inner = match self {
            Self::Io(err) => list!("IoError".to_symbol(), err.to_string().to_symbol()),
        };
        list!("StdError".to_symbol(), inner)
    }
}

/// Allow for io::Errors to be used seamlessly with crate Errors.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(Box::new(StdError::Io(err)))
    }
}
