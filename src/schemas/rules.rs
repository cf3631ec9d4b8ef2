//! Shared field rules used by the payload validators.

use crate::error::AppError;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

pub const ITEM_NAME_MAX: usize = 100;
pub const CUSTOMER_EMAIL_MAX: usize = 255;
pub const CUSTOMER_NAME_MAX: usize = 100;
pub const STORE_NAME_MAX: usize = 128;
pub const STORE_LOCATION_MAX: usize = 255;

/// NUMERIC(10, 2): eight integer digits, two fractional.
const PRICE_SCALE: u32 = 2;
const PRICE_LIMIT: i64 = 100_000_000;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("static email pattern"))
}

/// Non-blank text of at most `max` characters.
pub fn required_text(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

pub fn email(field: &str, value: &str) -> Result<(), AppError> {
    required_text(field, value, CUSTOMER_EMAIL_MAX)?;
    if !email_regex().is_match(value) {
        return Err(AppError::Validation(format!("{} must be a valid email", field)));
    }
    Ok(())
}

pub fn price(field: &str, value: &Decimal) -> Result<(), AppError> {
    if value.normalize().scale() > PRICE_SCALE {
        return Err(AppError::Validation(format!(
            "{} must have at most {} decimal places",
            field, PRICE_SCALE
        )));
    }
    if value.abs() >= Decimal::from(PRICE_LIMIT) {
        return Err(AppError::Validation(format!("{} must be less than {}", field, PRICE_LIMIT)));
    }
    Ok(())
}
