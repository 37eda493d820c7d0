use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkVaultError {
    Validation(String),
    NotFound(String),
    FileOperation(String),
    Serialization(String),
    Config(String),
}

impl LinkVaultError {
    /// Stable error code, used in logs and operator-facing output.
    pub fn code(&self) -> &'static str {
        match self {
            LinkVaultError::Validation(_) => "E001",
            LinkVaultError::NotFound(_) => "E002",
            LinkVaultError::FileOperation(_) => "E003",
            LinkVaultError::Serialization(_) => "E004",
            LinkVaultError::Config(_) => "E005",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            LinkVaultError::Validation(_) => "Validation Error",
            LinkVaultError::NotFound(_) => "Resource Not Found",
            LinkVaultError::FileOperation(_) => "File Operation Error",
            LinkVaultError::Serialization(_) => "Serialization Error",
            LinkVaultError::Config(_) => "Configuration Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LinkVaultError::Validation(msg) => msg,
            LinkVaultError::NotFound(msg) => msg,
            LinkVaultError::FileOperation(msg) => msg,
            LinkVaultError::Serialization(msg) => msg,
            LinkVaultError::Config(msg) => msg,
        }
    }
}

impl fmt::Display for LinkVaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for LinkVaultError {}

// Convenience constructors
impl LinkVaultError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkVaultError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkVaultError::NotFound(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkVaultError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkVaultError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkVaultError::Config(msg.into())
    }
}

impl From<std::io::Error> for LinkVaultError {
    fn from(err: std::io::Error) -> Self {
        LinkVaultError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkVaultError {
    fn from(err: serde_json::Error) -> Self {
        LinkVaultError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkVaultError>;
