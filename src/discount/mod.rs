//! Discount calculators.
//!
//! Two scenarios are computed on a purchase amount:
//! - 13% off the whole amount
//! - $5 off for every complete $30 spent
//!
//! Every calculator takes the raw text entered by the user and returns a
//! currency string. Arithmetic is exact; the only rounding is done when the
//! result is rendered.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

use crate::Amount;

mod error;
pub use error::ParseError;

/// Share of the price paid after 13% off.
const THIRTEEN_PERCENT_OFF_RATE: Decimal = dec!(0.87);

/// Spend needed for each $5 reduction.
const INCREMENT: Decimal = dec!(30);

/// Reduction per complete increment.
const REDUCTION_PER_INCREMENT: Decimal = dec!(5);

/// The discount scenarios, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    /// 13% off the whole amount.
    ThirteenPercentOff,
    /// $5 off every complete $30.
    FiveOffPerThirty,
}

impl Discount {
    pub const ALL: [Discount; 2] = [Discount::ThirteenPercentOff, Discount::FiveOffPerThirty];

    /// Label prefixed to a result. Labels share one width so results line up.
    pub fn label(self) -> &'static str {
        match self {
            Discount::ThirteenPercentOff => "-13%     : ",
            Discount::FiveOffPerThirty => "-$5 ~$30 : ",
        }
    }

    /// Apply the discount. The result is exact; render it to round.
    pub fn apply(self, amount: Amount) -> Amount {
        match self {
            Discount::ThirteenPercentOff => amount * THIRTEEN_PERCENT_OFF_RATE,
            Discount::FiveOffPerThirty => {
                let reduction = increment_count(amount) * REDUCTION_PER_INCREMENT;
                amount - Amount::from_decimal(reduction)
            }
        }
    }

    /// Apply the discount and render the result after [`Discount::label`].
    pub fn render(self, amount: Amount) -> String {
        format!("{}{}", self.label(), self.calculate(amount))
    }

    fn calculate(self, amount: Amount) -> String {
        let result = self.apply(amount).to_string();
        info!(discount = ?self, amount = %amount.value(), result = %result, "discount calculated");
        result
    }

    fn calculate_str(self, input: &str) -> Result<String, ParseError> {
        let amount = input.parse()?;
        Ok(self.calculate(amount))
    }
}

/// Number of complete $30 increments in `amount`, rounded toward negative
/// infinity.
///
/// `29.99` holds 0 increments, `30` and `30.01` hold 1, `90` holds 3.
pub fn increment_count(amount: Amount) -> Decimal {
    let value = amount.value();
    let remainder = value % INCREMENT;
    let count = (value - remainder) / INCREMENT;
    // % truncates toward zero
    if remainder.is_sign_negative() && !remainder.is_zero() {
        count - Decimal::ONE
    } else {
        count
    }
}

/// Amount after 13% off, as a currency string.
pub fn thirteen_percent_off(input: &str) -> Result<String, ParseError> {
    Discount::ThirteenPercentOff.calculate_str(input)
}

/// Amount after $5 off every $30, as a currency string.
pub fn five_off_per_thirty(input: &str) -> Result<String, ParseError> {
    Discount::FiveOffPerThirty.calculate_str(input)
}

/// [`thirteen_percent_off`] with its label, e.g. `-13%     : 26.09`.
pub fn thirteen_percent_off_terse(input: &str) -> Result<String, ParseError> {
    let answer = thirteen_percent_off(input)?;
    Ok(format!("{}{answer}", Discount::ThirteenPercentOff.label()))
}

/// [`five_off_per_thirty`] with its label, e.g. `-$5 ~$30 : 29.99`.
pub fn five_off_per_thirty_terse(input: &str) -> Result<String, ParseError> {
    let answer = five_off_per_thirty(input)?;
    Ok(format!("{}{answer}", Discount::FiveOffPerThirty.label()))
}
