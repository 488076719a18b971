//! Fixed-point money
//!
//! Every payout and balance in the core is an integer number of the smallest
//! currency unit. Floats never carry money across an API boundary; the only
//! float in the system is the RNG draw, which is consumed before any amount
//! is computed.

/// Signed amount in the smallest currency unit (cents).
pub type Amount = i64;

/// Smallest units per major currency unit.
pub const AMOUNT_SCALE: Amount = 100;

/// Format an amount as a major-unit decimal string, e.g. `1250` → `"12.50"`.
pub fn format_amount(amount: Amount) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!(
        "{}{}.{:02}",
        sign,
        abs / AMOUNT_SCALE as u64,
        abs % AMOUNT_SCALE as u64
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0.00");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(1250), "12.50");
        assert_eq!(format_amount(-730), "-7.30");
    }
}
