//! Field validation helpers shared by the DTOs, the API error mapping and the
//! client.
//!
//! DTOs derive [`validator::Validate`]; the helpers here cover the rules the
//! derive does not express directly (blank strings) and flatten
//! [`ValidationErrors`] into the `{ field: [messages] }` shape used on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use validator::{ValidationError, ValidationErrors};

/// Reject strings that are empty or contain only whitespace.
///
/// Intended for `#[validate(custom(function = "..."))]` on required text
/// fields. The `message` attribute on the field overrides the default.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Deserialize an optional string, trimmed, mapping blank values to `None`.
///
/// Forms submit an empty string for untouched optional inputs; those must not
/// fail syntax checks such as email validation. Trimming happens here so that
/// validation sees the value that gets stored.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Flatten validation errors into camelCase field names with their messages.
///
/// Fields are sorted so the output is stable across runs.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut fields = BTreeMap::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("failed `{}` check", e.code),
            })
            .collect();
        fields.insert(to_camel_case(&field.to_string()), messages);
    }
    fields
}

/// Render validation errors as one human-readable line, e.g.
/// `firstName: First name is required; email: Invalid email address`.
pub fn summarize(errors: &ValidationErrors) -> String {
    field_messages(errors)
        .into_iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convert a `snake_case` identifier into `camelCase`.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_rejects_whitespace() {
        assert!(non_blank("").is_err());
        assert!(non_blank("   ").is_err());
        assert!(non_blank("\t\n").is_err());
    }

    #[test]
    fn non_blank_accepts_text() {
        assert!(non_blank("Ada").is_ok());
        assert!(non_blank("  Ada ").is_ok());
    }

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "blank_as_none")]
        email: Option<String>,
    }

    #[test]
    fn blank_as_none_maps_empty_strings() {
        let form: Form = serde_json::from_str(r#"{"email": "  "}"#).unwrap();
        assert_eq!(form.email, None);

        let form: Form = serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert_eq!(form.email, None);

        let form: Form = serde_json::from_str("{}").unwrap();
        assert_eq!(form.email, None);

        let form: Form = serde_json::from_str(r#"{"email": "ada@example.com"}"#).unwrap();
        assert_eq!(form.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn blank_as_none_trims_surrounding_whitespace() {
        let form: Form = serde_json::from_str(r#"{"email": "  ada@example.com \t"}"#).unwrap();
        assert_eq!(form.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn camel_case_conversion() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("date_of_birth"), "dateOfBirth");
        assert_eq!(to_camel_case("email"), "email");
        assert_eq!(to_camel_case("_private"), "private");
    }

    #[test]
    fn field_messages_are_camel_cased() {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("required");
        err.message = Some("First name is required".into());
        errors.add("first_name", err);
        errors.add("email", ValidationError::new("email"));

        let fields = field_messages(&errors);
        assert_eq!(fields["firstName"], vec!["First name is required"]);
        assert_eq!(fields["email"], vec!["failed `email` check"]);
        assert_eq!(
            summarize(&errors),
            "email: failed `email` check; firstName: First name is required"
        );
    }
}
