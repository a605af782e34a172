use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// The array name is spliced into a declaration-matching pattern, so it
/// must look like a JS identifier.
pub fn validate_identifier(field_name: &str, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let head_ok = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        .unwrap_or(false);
    let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if !head_ok || !tail_ok {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Must be a valid identifier (letters, digits, '_', '$')".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "   ").is_err());
        assert!(validate_path("output_path", "out.tsv").is_ok());
    }

    #[test]
    fn identifier_validation() {
        assert!(validate_identifier("array_name", "ALL_PATHWAYS_RAW").is_ok());
        assert!(validate_identifier("array_name", "$data2").is_ok());
        assert!(validate_identifier("array_name", "").is_err());
        assert!(validate_identifier("array_name", "9lives").is_err());
        assert!(validate_identifier("array_name", "no spaces").is_err());
    }
}
