//! Field rules for venue, artist and show forms.
//!
//! The form structs derive [`validator::Validate`] and reference the custom
//! rules below; [`check`] turns the collected violations into a
//! [`CoreError::Validation`].

use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// Maximum length for entity names.
pub const MAX_NAME_LEN: u64 = 120;

/// Two-letter codes accepted for `state`.
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Genres a venue or artist may list.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

fn violation(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

pub fn validate_state(state: &str) -> Result<(), ValidationError> {
    if STATES.contains(&state) {
        Ok(())
    } else {
        Err(violation("state", format!("Unknown state code '{state}'")))
    }
}

pub fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.is_empty() {
        return Err(violation("genres", "At least one genre is required".into()));
    }
    match genres.iter().find(|g| !GENRES.contains(&g.as_str())) {
        Some(unknown) => Err(violation("genres", format!("Unknown genre '{unknown}'"))),
        None => Ok(()),
    }
}

/// Phone numbers are written `xxx-xxx-xxxx`.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let well_formed = phone.len() == 12
        && phone.char_indices().all(|(i, c)| match i {
            3 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if well_formed {
        Ok(())
    } else {
        Err(violation(
            "phone",
            format!("Phone '{phone}' must look like xxx-xxx-xxxx"),
        ))
    }
}

/// Facebook links must point at facebook.com.
pub fn validate_facebook_link(link: &str) -> Result<(), ValidationError> {
    let host = link
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(link)
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    // Drop an explicit port.
    let host = host.split(':').next().unwrap_or_default().to_ascii_lowercase();

    if host == "facebook.com" || host.ends_with(".facebook.com") {
        Ok(())
    } else {
        Err(violation(
            "facebook_link",
            "Facebook link must point at facebook.com".into(),
        ))
    }
}

/// Run the derived rules and flatten any violations into one message.
///
/// Fields are reported in alphabetical order so messages are stable.
pub fn check<T: Validate>(form: &T) -> Result<(), CoreError> {
    let Err(errors) = form.validate() else {
        return Ok(());
    };

    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(|e| match &e.message {
                    Some(msg) => format!("{field}: {msg}"),
                    None => format!("{field}: invalid ({})", e.code),
                })
                .collect::<Vec<_>>()
        })
        .collect();
    parts.sort();

    Err(CoreError::Validation(parts.join("; ")))
}

/// Treat blank optional text as absent.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct SampleForm {
        #[validate(length(min = 1, max = MAX_NAME_LEN))]
        name: String,
        #[validate(custom(function = "validate_state"))]
        state: String,
        #[validate(custom(function = "validate_phone"))]
        phone: Option<String>,
    }

    #[test]
    fn known_state_accepted() {
        assert!(validate_state("CA").is_ok());
        assert!(validate_state("DC").is_ok());
    }

    #[test]
    fn unknown_state_rejected() {
        assert!(validate_state("ZZ").is_err());
        assert!(validate_state("ca").is_err());
    }

    #[test]
    fn genres_must_be_known_and_non_empty() {
        assert!(validate_genres(&["Jazz".into(), "R&B".into()]).is_ok());
        assert!(validate_genres(&[]).is_err());
        assert!(validate_genres(&["Jazz".into(), "Polka".into()]).is_err());
    }

    #[test]
    fn phone_format() {
        assert!(validate_phone("123-123-1234").is_ok());
        assert!(validate_phone("1231231234").is_err());
        assert!(validate_phone("123-123-123a").is_err());
        assert!(validate_phone("123-1234-123").is_err());
    }

    #[test]
    fn facebook_host() {
        assert!(validate_facebook_link("https://www.facebook.com/TheMusicalHop").is_ok());
        assert!(validate_facebook_link("http://facebook.com/x").is_ok());
        assert!(validate_facebook_link("https://notfacebook.com/x").is_err());
        assert!(validate_facebook_link("https://example.com/facebook.com").is_err());
    }

    #[test]
    fn facebook_host_ignores_port() {
        assert!(validate_facebook_link("https://facebook.com:443/x").is_ok());
        assert!(validate_facebook_link("https://www.facebook.com:8443").is_ok());
        assert!(validate_facebook_link("https://example.com:443/facebook.com").is_err());
    }

    #[test]
    fn check_passes_valid_form() {
        let form = SampleForm {
            name: "The Musical Hop".into(),
            state: "CA".into(),
            phone: None,
        };
        assert!(check(&form).is_ok());
    }

    #[test]
    fn name_length_is_capped() {
        let mut form = SampleForm {
            name: "x".repeat(MAX_NAME_LEN as usize),
            state: "CA".into(),
            phone: None,
        };
        assert!(check(&form).is_ok());

        form.name.push('x');
        let Err(CoreError::Validation(msg)) = check(&form) else {
            panic!("expected a validation error");
        };
        assert!(msg.contains("name"));
    }

    #[test]
    fn check_reports_every_failing_field() {
        let form = SampleForm {
            name: String::new(),
            state: "XX".into(),
            phone: Some("555".into()),
        };
        let Err(CoreError::Validation(msg)) = check(&form) else {
            panic!("expected a validation error");
        };
        assert!(msg.contains("name"));
        assert!(msg.contains("state: Unknown state code 'XX'"));
        assert!(msg.contains("phone"));
    }

    #[test]
    fn blank_optional_text_becomes_none() {
        assert_eq!(blank_to_none(Some("   ".into())), None);
        assert_eq!(blank_to_none(None), None);
        assert_eq!(blank_to_none(Some(" x ".into())), Some("x".to_string()));
    }
}
