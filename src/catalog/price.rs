use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a currency amount as `$` followed by exactly two decimals.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}
