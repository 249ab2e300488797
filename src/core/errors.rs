use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormdeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GUI error: {0}")]
    Gui(Box<eframe::Error>),

    #[error("Could not resolve the application data directory")]
    MissingDataDir,

    #[error("FormdeckError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for FormdeckError {
    fn from(error: std::io::Error) -> Self {
        FormdeckError::Io(Box::new(error))
    }
}

impl From<eframe::Error> for FormdeckError {
    fn from(error: eframe::Error) -> Self {
        FormdeckError::Gui(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.json");
        let error: FormdeckError = io.into();
        assert!(matches!(error, FormdeckError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: settings.json");
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: FormdeckError = parse.into();
        assert!(error.to_string().starts_with("JSON error:"));
    }
}
