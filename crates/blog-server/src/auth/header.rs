#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Authorization header format must be \"{scheme} <token>\"")]
pub struct HeaderFormatError {
    pub scheme: String,
}

/// Pulls the token out of an `Authorization: <scheme> <token>` value.
///
/// A missing or empty header is anonymous (`Ok(None)`); anything present that
/// is not exactly two parts with the expected scheme is a format error.
pub fn token_from_header<'a>(
    value: Option<&'a str>,
    scheme: &str,
) -> Result<Option<&'a str>, HeaderFormatError> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(None),
    };

    let parts: Vec<&str> = value.split_whitespace().collect();
    match parts.as_slice() {
        [s, token] if s.eq_ignore_ascii_case(scheme) => Ok(Some(*token)),
        _ => Err(HeaderFormatError {
            scheme: scheme.to_string(),
        }),
    }
}
