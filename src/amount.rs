use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::discount::ParseError;

/// Number of fractional digits in a currency string.
const CENTS_DP: u32 = 2;

/// Largest scale a parsed amount may have: a rate such as `0.87` adds two
/// fractional digits and `Decimal` holds at most 28.
const MAX_SCALE: u32 = 26;

/// Largest mantissa a parsed amount may have, so that multiplying by a
/// two-digit rate mantissa (at most 99) still fits in 96 bits.
const MAX_MANTISSA: u128 = ((1 << 96) - 1) / 99;

/// Exact decimal purchase amount.
///
/// Parsing only accepts amounts with enough headroom for the calculators'
/// arithmetic to stay exact. Rounding to cents happens once, when the
/// amount is rendered through [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub(crate) fn from_decimal(value: Decimal) -> Self {
        Amount(value)
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

/// Round to cents, ties away from zero, and render with exactly two
/// fractional digits.
pub fn currency_string(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(CENTS_DP, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

impl FromStr for Amount {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // from_str_exact refuses inputs it would otherwise have to round
        let value = Decimal::from_str_exact(s.trim()).map_err(|source| ParseError::Malformed {
            input: s.to_string(),
            source,
        })?;

        if value.scale() > MAX_SCALE || value.mantissa().unsigned_abs() > MAX_MANTISSA {
            return Err(ParseError::TooPrecise {
                input: s.to_string(),
            });
        }

        Ok(Amount(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&currency_string(self.0))
    }
}

impl std::ops::Mul<Decimal> for Amount {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Amount(self.0 * rhs)
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn parses_integer_and_decimal_notation() {
        assert_eq!(amount("30"), Amount::from_decimal(dec!(30)));
        assert_eq!(amount("29.99"), Amount::from_decimal(dec!(29.99)));
        assert_eq!(
            amount("3.074712643678161"),
            Amount::from_decimal(dec!(3.074712643678161))
        );
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        assert_eq!(amount("  12.50 "), Amount::from_decimal(dec!(12.50)));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for input in ["", "abc", "12.3.4", "$5"] {
            let err = input.parse::<Amount>().unwrap_err();
            assert_eq!(err.input(), input);
        }
    }

    #[test]
    fn parse_rejects_amounts_without_room_for_exact_arithmetic() {
        // 28 fractional digits: a product with 0.87 would need 30
        let err = "0.0057471264367816091954022988".parse::<Amount>().unwrap_err();
        assert!(matches!(err, ParseError::TooPrecise { .. }));

        // Decimal::MAX itself cannot be multiplied by 0.87 without rounding
        let err = "79228162514264337593543950335".parse::<Amount>().unwrap_err();
        assert!(matches!(err, ParseError::TooPrecise { .. }));
        assert_eq!(err.input(), "79228162514264337593543950335");
    }

    #[test]
    fn parse_accepts_amounts_at_the_precision_limit() {
        let value = amount("0.00574712643678160919540229");
        assert_eq!(value.value().scale(), MAX_SCALE);

        let largest = Decimal::from_i128_with_scale(MAX_MANTISSA as i128, 0);
        assert_eq!(amount(&largest.to_string()).value(), largest);
    }

    #[test]
    fn product_of_parsed_amount_is_exact() {
        let value = amount("0.00574712643678160919540229");
        let product = value * dec!(0.87);
        assert_eq!(product.value().scale(), MAX_SCALE + 2);
        assert_eq!(product.value(), dec!(0.0049999999999999999999999923));

        let largest = Amount::from_decimal(Decimal::from_i128_with_scale(MAX_MANTISSA as i128, 0));
        let product = largest * dec!(0.99);
        assert_eq!(product.value().mantissa(), MAX_MANTISSA as i128 * 99);
    }

    #[test]
    fn currency_string_pads_to_two_places() {
        assert_eq!(currency_string(dec!(0)), "0.00");
        assert_eq!(currency_string(dec!(25)), "25.00");
        assert_eq!(currency_string(dec!(2.6)), "2.60");
        assert_eq!(currency_string(dec!(104.99)), "104.99");
    }

    #[test]
    fn currency_string_rounds_half_away_from_zero() {
        assert_eq!(currency_string(dec!(2.675)), "2.68");
        // half-to-even would give 0.12
        assert_eq!(currency_string(dec!(0.125)), "0.13");
        assert_eq!(currency_string(dec!(-0.125)), "-0.13");
        assert_eq!(currency_string(dec!(2.674999)), "2.67");
        assert_eq!(currency_string(dec!(999999.995)), "1000000.00");
    }

    #[test]
    fn display_rounds_only_when_rendering() {
        let product = amount("3.074712643678161") * dec!(0.87);
        assert_eq!(product.value(), dec!(2.67500000000000007));
        assert_eq!(product.to_string(), "2.68");
    }

    #[test]
    fn formatting_is_idempotent() {
        for input in ["0", "2.675", "26.0913", "3.074712643678161", "119.99"] {
            let once = amount(input).to_string();
            let twice = amount(&once).to_string();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn sub() {
        assert_eq!(amount("30.01") - amount("5"), amount("25.01"));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default().to_string(), "0.00");
    }
}
