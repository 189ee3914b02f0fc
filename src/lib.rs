pub mod amount;
pub mod discount;
pub mod session;

pub use amount::{Amount, currency_string};
pub use discount::{
    Discount, ParseError, five_off_per_thirty, five_off_per_thirty_terse, increment_count,
    thirteen_percent_off, thirteen_percent_off_terse,
};
pub use session::{Exit, Session};
