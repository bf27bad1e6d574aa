use crate::utils::error::{Result, TicketError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| TicketError::config(field_name, "value is required"))
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TicketError::config(
            field_name,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_field() {
        assert_eq!(*validate_required_field("account_id", &Some(4)).unwrap(), 4);

        let err = validate_required_field::<i64>("account_id", &None).unwrap_err();
        assert!(matches!(err, TicketError::ConfigError { ref field, .. } if field == "account_id"));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("type", "ADULT").is_ok());
        assert!(validate_non_empty_string("type", "").is_err());
        assert!(validate_non_empty_string("type", "   ").is_err());
    }
}
