use rust_decimal::{Decimal, RoundingStrategy};

/// Render a rupee amount with thousands separators: `format_inr(38000)`
/// is `"₹38,000"`.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("\u{20b9}{grouped}")
}

/// Overage as a percentage of the approval limit, rounded to one
/// decimal place with half-away-from-zero semantics.
///
/// A zero limit would divide by zero; the percentage is reported as
/// 0.0 in that degenerate case and the overage amount carries the
/// signal on its own.
pub fn overage_pct(overage: u64, approval_limit: u64) -> Decimal {
    if approval_limit == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(overage) * Decimal::from(100u32) / Decimal::from(approval_limit))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
