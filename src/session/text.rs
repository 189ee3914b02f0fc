/// Shown once at startup.
pub const ENTRY_TIPS: &str = "Amounts are before tax.";

/// Shown once at startup, after [`ENTRY_TIPS`].
pub const HOW_TO_QUIT: &str = "Press q to quit.";

/// Asked before each purchase amount.
pub const PROMPT: &str = "Purchase amount: ";

/// Input line that ends the session.
pub const QUIT: &str = "q";
