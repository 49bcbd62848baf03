/// Currency rendering settings, passed explicitly instead of relying on the
/// process locale.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub thousands_sep: char,
    pub decimal_sep: char,
}

/// Matches the `en_CA` rendering of the original dashboard: `$4,392.00`.
pub const EN_CA: CurrencyFormat = CurrencyFormat {
    symbol: "$",
    thousands_sep: ',',
    decimal_sep: '.',
};

/// Format an amount as currency with thousands grouping and two decimals.
pub fn format_currency(amount: f64, format: &CurrencyFormat) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(format.thousands_sep);
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!(
        "{}{}{}{}{:02}",
        sign, format.symbol, grouped, format.decimal_sep, fraction
    )
}

/// Round to 3 decimal places (review-rating precision).
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, &EN_CA), "$0.00");
        assert_eq!(format_currency(42.0, &EN_CA), "$42.00");
        assert_eq!(format_currency(999.5, &EN_CA), "$999.50");
        assert_eq!(format_currency(1000.0, &EN_CA), "$1,000.00");
        assert_eq!(format_currency(1234567.89, &EN_CA), "$1,234,567.89");
        assert_eq!(format_currency(50.0, &EN_CA), "$50.00");
    }

    #[test]
    fn test_format_currency_custom_separators() {
        let fmt = CurrencyFormat {
            symbol: "€",
            thousands_sep: '.',
            decimal_sep: ',',
        };
        assert_eq!(format_currency(1234.5, &fmt), "€1.234,50");
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(3.74155), 3.742);
        assert_eq!(round3(4.0), 4.0);
        assert_eq!(round3(3.1234), 3.123);
    }
}
