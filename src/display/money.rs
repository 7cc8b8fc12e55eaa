//! Currency formatting
//!
//! Writes amounts the way the configured locale does (pt-BR reais by
//! default: `R$ 1.234,56`).

use crate::config::CurrencyFormat;
use crate::models::Money;

/// Format an amount with symbol, grouped thousands and two decimals
pub fn format_money(amount: Money, format: &CurrencyFormat) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let whole = group_thousands(amount.whole().unsigned_abs(), format.thousands_separator);
    format!(
        "{}{} {}{}{:02}",
        sign,
        format.symbol,
        whole,
        format.decimal_separator,
        amount.cents_part()
    )
}

/// Compact axis label in thousands, e.g. `R$2k` for 2.400,00
pub fn format_compact(amount: Money, format: &CurrencyFormat) -> String {
    let thousands = (amount.cents() as f64 / 100_000.0).round() as i64;
    format!("{}{}k", format.symbol, thousands)
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl() -> CurrencyFormat {
        CurrencyFormat::default()
    }

    #[test]
    fn test_format_money_brl() {
        assert_eq!(format_money(Money::from_cents(0), &brl()), "R$ 0,00");
        assert_eq!(format_money(Money::from_cents(5), &brl()), "R$ 0,05");
        assert_eq!(format_money(Money::from_cents(99999), &brl()), "R$ 999,99");
        assert_eq!(format_money(Money::from_cents(123456), &brl()), "R$ 1.234,56");
        assert_eq!(
            format_money(Money::from_cents(123456789012), &brl()),
            "R$ 1.234.567.890,12"
        );
        assert_eq!(format_money(Money::from_cents(-169000), &brl()), "-R$ 1.690,00");
    }

    #[test]
    fn test_format_money_custom_locale() {
        let usd = CurrencyFormat {
            symbol: "$".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
        };
        assert_eq!(format_money(Money::from_cents(123456), &usd), "$ 1,234.56");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(Money::from_cents(240000), &brl()), "R$2k");
        assert_eq!(format_compact(Money::from_cents(250000), &brl()), "R$3k");
        assert_eq!(format_compact(Money::from_cents(40000), &brl()), "R$0k");
        assert_eq!(format_compact(Money::from_cents(1200000), &brl()), "R$12k");
    }
}
