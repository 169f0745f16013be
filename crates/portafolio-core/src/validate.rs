// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field validators applied at the service boundary before anything is persisted.
//!
//! Each check appends to a [`ValidationErrors`] collector instead of returning
//! early, so a form reports every failing field at once. Messages are the
//! Spanish strings shown next to the form inputs.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationErrors;

/// Maximum length of a URL field.
pub const URL_MAX_CHARS: usize = 200;

/// Maximum length of an email address.
pub const EMAIL_MAX_CHARS: usize = 254;

pub const MSG_REQUIRED: &str = "Este campo es obligatorio.";
pub const MSG_INVALID_EMAIL: &str = "Introduzca una dirección de correo electrónico válida.";
pub const MSG_INVALID_URL: &str = "Introduzca una URL válida.";

static EMAIL_USER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-!#$%&'*+/=?^_`{}|~0-9A-Za-z]+(\.[-!#$%&'*+/=?^_`{}|~0-9A-Za-z]+)*$").unwrap()
});

static EMAIL_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$").unwrap()
});

fn too_long(max: usize, actual: usize) -> String {
    format!("Asegúrese de que este valor tenga como máximo {max} caracteres (tiene {actual}).")
}

/// Require a non-blank value of at most `max_chars` characters.
///
/// Returns `true` if the value passed.
pub fn required(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    max_chars: Option<usize>,
) -> bool {
    if value.trim().is_empty() {
        errors.push(field, MSG_REQUIRED);
        return false;
    }
    max_length(errors, field, value, max_chars)
}

/// Reject values longer than `max_chars` characters. Blank values pass.
pub fn max_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    max_chars: Option<usize>,
) -> bool {
    if let Some(max) = max_chars {
        let count = value.chars().count();
        if count > max {
            errors.push(field, too_long(max, count));
            return false;
        }
    }
    true
}

/// True if `value` is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    let Some((user, domain)) = value.rsplit_once('@') else {
        return false;
    };
    !user.is_empty()
        && !domain.is_empty()
        && EMAIL_USER.is_match(user)
        && (EMAIL_DOMAIN.is_match(domain) || domain == "localhost")
}

/// Require a non-blank, syntactically valid email address.
pub fn email(errors: &mut ValidationErrors, field: &'static str, value: &str) -> bool {
    if !required(errors, field, value, Some(EMAIL_MAX_CHARS)) {
        return false;
    }
    if !is_valid_email(value.trim()) {
        errors.push(field, MSG_INVALID_EMAIL);
        return false;
    }
    true
}

/// Schemes accepted in URL fields.
pub const URL_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// True if `value` parses as an absolute URL with a host, using one of
/// [`URL_SCHEMES`].
pub fn is_valid_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => {
            URL_SCHEMES.contains(&parsed.scheme())
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Require a non-blank, valid URL.
pub fn url(errors: &mut ValidationErrors, field: &'static str, value: &str) -> bool {
    if !required(errors, field, value, Some(URL_MAX_CHARS)) {
        return false;
    }
    if !is_valid_url(value.trim()) {
        errors.push(field, MSG_INVALID_URL);
        return false;
    }
    true
}

/// Validate an optional URL; `None` and blank values pass.
pub fn optional_url(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => true,
        Some(v) => url(errors, field, v),
    }
}

/// Trim a value and map blank strings to `None`.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
