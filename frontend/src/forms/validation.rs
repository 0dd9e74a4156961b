use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern compiles")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-]{7,20}$").expect("phone pattern compiles"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*\.[^\s]+$").expect("url pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please enter a full link starting with http:// or https://")]
    InvalidUrl,
    #[error("{0} must be a whole number above zero")]
    InvalidCount(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

pub fn required(label: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required(label))
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), FieldError> {
    if EMAIL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

pub fn phone(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if PHONE_RE.is_match(value) && (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone)
    }
}

pub fn url(value: &str) -> Result<(), FieldError> {
    if URL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::InvalidUrl)
    }
}

pub fn positive_count(label: &'static str, value: &str) -> Result<u32, FieldError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FieldError::InvalidCount(label)),
    }
}

pub fn max_len(label: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    if value.trim().chars().count() > max {
        Err(FieldError::TooLong { field: label, max })
    } else {
        Ok(())
    }
}
