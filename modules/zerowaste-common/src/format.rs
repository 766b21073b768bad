//! Display formatting for report and chart labels. Country only changes how
//! amounts are written; no conversion between currencies ever happens.

use crate::mapping::Country;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyConfig {
    pub code: &'static str,
    pub locale: &'static str,
    pub symbol: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
    /// Space between symbol and amount (`Rp 1.000` vs `₱1,000`).
    pub symbol_spaced: bool,
}

impl Country {
    pub fn currency(&self) -> CurrencyConfig {
        match self {
            Country::Philippines => CurrencyConfig {
                code: "PHP",
                locale: "en-PH",
                symbol: "₱",
                group_separator: ',',
                decimal_separator: '.',
                symbol_spaced: false,
            },
            Country::Indonesia => CurrencyConfig {
                code: "IDR",
                locale: "id-ID",
                symbol: "Rp",
                group_separator: '.',
                decimal_separator: ',',
                symbol_spaced: true,
            },
        }
    }
}

/// Currency amount with country grouping, e.g. `₱2,555,000` or `Rp 2.555.000`.
pub fn format_currency(value: f64, country: Country, decimals: usize) -> String {
    let config = country.currency();
    let body = group_digits(
        value.abs(),
        decimals,
        config.group_separator,
        config.decimal_separator,
    );
    let sign = if value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    let space = if config.symbol_spaced { " " } else { "" };
    format!("{sign}{}{space}{body}", config.symbol)
}

/// Plain number with en-US thousands grouping, e.g. `2,435,426.00`.
pub fn format_number(value: f64, decimals: usize) -> String {
    let body = group_digits(value.abs(), decimals, ',', '.');
    if value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{body}")
    } else {
        body
    }
}

/// Axis-label style: `2.6M`, `730.0K`, `12.5`.
pub fn format_compact(value: f64, decimals: usize) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", format_fixed(value / 1_000_000.0, decimals))
    } else if value >= 1_000.0 {
        format!("{}K", format_fixed(value / 1_000.0, decimals))
    } else {
        format_fixed(value, decimals)
    }
}

/// Fraction as percentage: `0.15` -> `15.0%`.
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    format!("{}%", format_fixed(fraction * 100.0, decimals))
}

/// Fixed-point rendering, rounding half away from zero: `99.25` -> `99.3`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.decimals$}")
}

fn group_digits(value: f64, decimals: usize, group: char, decimal: char) -> String {
    let text = format_fixed(value, decimals);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(group);
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push(decimal);
        grouped.push_str(frac);
    }
    grouped
}
