use std::{error::Error, fmt, io};

/// Result type used across the model and its front-ends.
pub type Result<T> = std::result::Result<T, MvcError>;

/// Failures surfaced by the launcher and the front-ends.
///
/// Malformed user input never shows up here: it is dropped where it is parsed.
#[derive(Debug)]
pub enum MvcError {
    Io(io::Error),
    MissingFrontEnd,             // No launch selector given
    UnknownFrontEnd(String),     // Selector is neither `cmd` nor `tk`
    FrontEndUnavailable(String), // Selector known but not compiled in
    Gui(String),                 // The windowing toolkit failed to start or run
    ModelPanicked,               // The model thread could not be joined
}

impl fmt::Display for MvcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MvcError::Io(e) => write!(f, "io error: {e}"),
            MvcError::MissingFrontEnd => write!(f, "no ViewController interface specified"),
            MvcError::UnknownFrontEnd(name) => {
                write!(f, "Unknown ViewController interface '{name}' specified. Exiting.")
            }
            MvcError::FrontEndUnavailable(name) => {
                write!(f, "ViewController interface '{name}' is not available in this build")
            }
            MvcError::Gui(msg) => write!(f, "gui error: {msg}"),
            MvcError::ModelPanicked => write!(f, "model thread panicked"),
        }
    }
}

impl Error for MvcError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MvcError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MvcError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl MvcError {
    /// Whether this error comes from a bad launch selector, i.e. nothing was started.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            MvcError::MissingFrontEnd
                | MvcError::UnknownFrontEnd(_)
                | MvcError::FrontEndUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_front_end_message_names_the_selector() {
        let err = MvcError::UnknownFrontEnd("gui".into());
        assert_eq!(
            err.to_string(),
            "Unknown ViewController interface 'gui' specified. Exiting."
        );
        assert!(err.is_usage());
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err = MvcError::from(io::Error::other("broken pipe"));
        assert!(err.source().is_some());
        assert!(!err.is_usage());
    }
}
