//! Currency rounding and formatting helpers.
//!
//! All monetary arithmetic in the composition engine is fixed-point
//! decimal: subtotals and totals are rounded to two places with
//! midpoint-away-from-zero semantics, never aggregated as floats.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two-decimal currency precision.
pub fn round_currency(amount: Decimal) -> Decimal {
	amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount for display, e.g. `$1,299.99`.
pub fn format_currency(amount: Decimal) -> String {
	let rounded = round_currency(amount);
	let negative = rounded.is_sign_negative();
	let text = rounded.abs().to_string();
	let (integer, fraction) = match text.split_once('.') {
		Some((i, f)) => (i.to_string(), format!("{:0<2}", f)),
		None => (text, "00".to_string()),
	};

	// Insert thousands separators right-to-left
	let mut grouped = String::new();
	for (idx, ch) in integer.chars().rev().enumerate() {
		if idx > 0 && idx % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	let grouped: String = grouped.chars().rev().collect();

	let sign = if negative { "-" } else { "" };
	format!("{}${}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rust_decimal_macros::dec;

	#[test]
	fn rounds_midpoint_away_from_zero() {
		assert_eq!(round_currency(dec!(2.005)), dec!(2.01));
		assert_eq!(round_currency(dec!(2599.984)), dec!(2599.98));
	}

	#[test]
	fn formats_with_thousands_separator() {
		assert_eq!(format_currency(dec!(1299.99)), "$1,299.99");
		assert_eq!(format_currency(dec!(1000000)), "$1,000,000.00");
		assert_eq!(format_currency(dec!(0)), "$0.00");
		assert_eq!(format_currency(dec!(-45.5)), "-$45.50");
	}
}
