use crate::core::{Amount, Currency};
use crate::error::{CurrencyError, Result};

/// Render atomic units as a decimal string with `decimal_places` fraction digits
pub fn format_amount(amount: Amount, decimal_places: usize) -> String {
    let mut digits = amount.to_string();
    if digits.len() < decimal_places + 1 {
        let padding = "0".repeat(decimal_places + 1 - digits.len());
        digits.insert_str(0, &padding);
    }
    digits.insert(digits.len() - decimal_places, '.');
    digits
}

pub fn format_signed_amount(amount: i64, decimal_places: usize) -> String {
    let formatted = format_amount(amount.unsigned_abs(), decimal_places);
    if amount < 0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Parse a decimal string into atomic units.
///
/// Extra fraction digits are accepted only when they are trailing zeros.
pub fn parse_amount(input: &str, decimal_places: usize) -> Result<Amount> {
    let mut digits = input.trim().to_string();
    let mut fraction_len = 0;

    if let Some(point) = digits.find('.') {
        fraction_len = digits.len() - point - 1;
        while fraction_len > decimal_places && digits.ends_with('0') {
            digits.pop();
            fraction_len -= 1;
        }
        if fraction_len > decimal_places {
            return Err(CurrencyError::InvalidAmount(format!(
                "'{}' has more than {decimal_places} decimal places",
                input.trim()
            )));
        }
        digits.remove(point);
    }

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CurrencyError::InvalidAmount(format!(
            "'{}' is not a decimal number",
            input.trim()
        )));
    }

    digits.push_str(&"0".repeat(decimal_places - fraction_len));

    digits
        .parse::<Amount>()
        .map_err(|e| CurrencyError::InvalidAmount(format!("'{}': {e}", input.trim())))
}

impl Currency {
    pub fn format_amount(&self, amount: Amount) -> String {
        format_amount(amount, self.number_of_decimal_places)
    }

    pub fn format_signed_amount(&self, amount: i64) -> String {
        format_signed_amount(amount, self.number_of_decimal_places)
    }

    pub fn parse_amount(&self, input: &str) -> Result<Amount> {
        parse_amount(input, self.number_of_decimal_places)
    }
}
