use crate::shared::core::errors::ValidationError;

pub fn require_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// Loose `local@domain.tld` check; no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    require_text(email, "email")?;
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Case-insensitive substring match; an empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
