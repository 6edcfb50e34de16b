//! Static currency reference data and display formatting.

/// Reference data for a supported display currency.
///
/// `rate_to_usd` is carried for completeness but no aggregation applies it;
/// amounts are stored and summed in the document currency as entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub rate_to_usd: f64,
}

pub static SUPPORTED_CURRENCIES: [Currency; 8] = [
    Currency {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
        rate_to_usd: 1.0,
    },
    Currency {
        code: "EUR",
        symbol: "€",
        name: "Euro",
        rate_to_usd: 0.85,
    },
    Currency {
        code: "GBP",
        symbol: "£",
        name: "British Pound",
        rate_to_usd: 0.75,
    },
    Currency {
        code: "INR",
        symbol: "₹",
        name: "Indian Rupee",
        rate_to_usd: 83.0,
    },
    Currency {
        code: "JPY",
        symbol: "¥",
        name: "Japanese Yen",
        rate_to_usd: 150.0,
    },
    Currency {
        code: "CAD",
        symbol: "C$",
        name: "Canadian Dollar",
        rate_to_usd: 1.35,
    },
    Currency {
        code: "AUD",
        symbol: "A$",
        name: "Australian Dollar",
        rate_to_usd: 1.50,
    },
    Currency {
        code: "CHF",
        symbol: "Fr",
        name: "Swiss Franc",
        rate_to_usd: 0.90,
    },
];

/// Looks up a supported currency by its ISO code.
pub fn currency_for(code: &str) -> Option<&'static Currency> {
    SUPPORTED_CURRENCIES.iter().find(|c| c.code == code)
}

pub fn symbol_for(code: &str) -> &'static str {
    currency_for(code).map(|c| c.symbol).unwrap_or("$")
}

/// Renders an amount for display: symbol prefix, absolute value, zero decimal
/// digits, comma grouping. The sign is never embedded; callers prepend `+` or
/// `-` themselves.
pub fn format_currency(amount: f64, code: &str) -> String {
    let symbol = symbol_for(code);
    let rounded = amount.abs().round() as i64;
    format!("{}{}", symbol, group_digits(&rounded.to_string()))
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
