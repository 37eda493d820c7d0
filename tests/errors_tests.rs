use linkvault::errors::{LinkVaultError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = LinkVaultError::validation("username missing");

        assert!(matches!(error, LinkVaultError::Validation(_)));
        assert!(error.to_string().contains("Validation Error"));
        assert!(error.to_string().contains("username missing"));
    }

    #[test]
    fn test_not_found_error() {
        let error = LinkVaultError::not_found("no such link");

        assert!(matches!(error, LinkVaultError::NotFound(_)));
        assert!(error.to_string().contains("Resource Not Found"));
        assert!(error.to_string().contains("no such link"));
    }

    #[test]
    fn test_file_operation_error() {
        let error = LinkVaultError::file_operation("write failed");

        assert!(matches!(error, LinkVaultError::FileOperation(_)));
        assert!(error.to_string().contains("File Operation Error"));
        assert!(error.to_string().contains("write failed"));
    }

    #[test]
    fn test_serialization_error() {
        let error = LinkVaultError::serialization("bad json");

        assert!(matches!(error, LinkVaultError::Serialization(_)));
        assert!(error.to_string().contains("Serialization Error"));
        assert!(error.to_string().contains("bad json"));
    }

    #[test]
    fn test_config_error() {
        let error = LinkVaultError::config("unknown backend");

        assert!(matches!(error, LinkVaultError::Config(_)));
        assert!(error.to_string().contains("Configuration Error"));
        assert!(error.to_string().contains("unknown backend"));
    }
}

#[cfg(test)]
mod error_metadata_tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(LinkVaultError::validation("x").code(), "E001");
        assert_eq!(LinkVaultError::not_found("x").code(), "E002");
        assert_eq!(LinkVaultError::file_operation("x").code(), "E003");
        assert_eq!(LinkVaultError::serialization("x").code(), "E004");
        assert_eq!(LinkVaultError::config("x").code(), "E005");
    }

    #[test]
    fn test_message_returns_bare_payload() {
        let error = LinkVaultError::not_found("Link abc not found");
        assert_eq!(error.message(), "Link abc not found");
        assert_eq!(error.error_type(), "Resource Not Found");
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let error: LinkVaultError = io_error.into();

        assert!(matches!(error, LinkVaultError::FileOperation(_)));
        assert!(error.to_string().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let error: LinkVaultError = json_error.into();

        assert!(matches!(error, LinkVaultError::Serialization(_)));
    }

    #[test]
    fn test_error_trait_object() {
        let error = LinkVaultError::validation("boxed");
        let boxed: Box<dyn Error> = Box::new(error);
        assert!(boxed.to_string().contains("boxed"));
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<()> {
            Err(LinkVaultError::not_found("nope"))
        }
        assert!(fails().is_err());
    }
}
