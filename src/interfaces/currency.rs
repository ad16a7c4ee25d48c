use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// How money amounts are written out.
///
/// Passed explicitly to every formatting call; there is no process-wide
/// default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    /// Put a space between the symbol and the digits (`Rs 10.00`).
    pub symbol_spacing: bool,
    pub grouping_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "Rs".to_string(),
            symbol_spacing: true,
            grouping_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl CurrencyFormat {
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }
}

/// Formats `amount` as symbol, grouped integer digits and two decimals.
///
/// Cents are rounded half-to-even. Negative amounts carry the sign in front
/// of the symbol: `-Rs 32.00`.
pub fn format_money(amount: Decimal, format: &CurrencyFormat) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let digits = rounded.to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::with_capacity(digits.len() + format.symbol.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&format.symbol);
    if format.symbol_spacing && !format.symbol.is_empty() {
        out.push(' ');
    }
    out.push_str(&group_digits(integer, format.grouping_separator));
    out.push(format.decimal_separator);
    out.push_str(fraction);
    out
}

fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats a fractional rate as a percentage with one decimal: `0.08` → `8.0%`.
pub fn format_percentage(rate: Decimal) -> String {
    let mut percent =
        (rate * dec!(100)).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    percent.rescale(1);
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_default() {
        let format = CurrencyFormat::default();
        assert_eq!(format_money(dec!(311.04), &format), "Rs 311.04");
        assert_eq!(format_money(dec!(50), &format), "Rs 50.00");
        assert_eq!(format_money(Decimal::ZERO, &format), "Rs 0.00");
        assert_eq!(format_money(dec!(0.01), &format), "Rs 0.01");
    }

    #[test]
    fn test_format_money_grouping() {
        let format = CurrencyFormat::default();
        assert_eq!(format_money(dec!(1234.5), &format), "Rs 1,234.50");
        assert_eq!(format_money(dec!(999999.99), &format), "Rs 999,999.99");
        assert_eq!(format_money(dec!(1234567.891), &format), "Rs 1,234,567.89");
        assert_eq!(format_money(dec!(100), &format), "Rs 100.00");
    }

    #[test]
    fn test_format_money_rounds_half_to_even() {
        let format = CurrencyFormat::default();
        assert_eq!(format_money(dec!(0.125), &format), "Rs 0.12");
        assert_eq!(format_money(dec!(0.135), &format), "Rs 0.14");
        assert_eq!(format_money(dec!(2.675), &format), "Rs 2.68");
    }

    #[test]
    fn test_format_money_negative() {
        let format = CurrencyFormat::default();
        assert_eq!(format_money(dec!(-32), &format), "-Rs 32.00");
        assert_eq!(format_money(dec!(-1500.5), &format), "-Rs 1,500.50");
        // Rounds to zero, so no sign.
        assert_eq!(format_money(dec!(-0.001), &format), "Rs 0.00");
    }

    #[test]
    fn test_format_money_custom_format() {
        let format = CurrencyFormat {
            symbol: "€".to_string(),
            symbol_spacing: false,
            grouping_separator: '.',
            decimal_separator: ',',
        };
        assert_eq!(format_money(dec!(1234.5), &format), "€1.234,50");

        let dollars = CurrencyFormat {
            symbol_spacing: false,
            ..CurrencyFormat::with_symbol("$")
        };
        assert_eq!(format_money(dec!(10.99), &dollars), "$10.99");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(dec!(0.08)), "8.0%");
        assert_eq!(format_percentage(dec!(0.1)), "10.0%");
        assert_eq!(format_percentage(dec!(0.0825)), "8.3%");
        assert_eq!(format_percentage(dec!(0.5)), "50.0%");
        assert_eq!(format_percentage(Decimal::ONE), "100.0%");
    }
}
