//! Number and percent formatting in fixed `en-US` conventions.

/// Maximum fraction digits rendered by the display formatters.
const MAX_FRACTION_DIGITS: usize = 3;

/// An immutable `en-US` number formatter: comma grouping, period decimal
/// point, up to three fraction digits with trailing zeros trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFormatter;

impl NumberFormatter {
    /// Builds the formatter.
    pub fn new() -> Self {
        Self
    }

    /// Renders `value`, e.g. `1234567.891` as `1,234,567.891`.
    pub fn format(&self, value: f64) -> String {
        format_en_us(value)
    }
}

/// An immutable percent formatter: scales a fraction by 100 and appends
/// `%`, e.g. `0.5` as `50%`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentFormatter;

impl PercentFormatter {
    /// Builds the formatter.
    pub fn new() -> Self {
        Self
    }

    /// Renders `fraction` as a percentage.
    pub fn format(&self, fraction: f64) -> String {
        format!("{}%", format_en_us(fraction * 100.0))
    }
}

/// Renders a number with the default [`NumberFormatter`].
pub fn format_number(value: f64) -> String {
    NumberFormatter::new().format(value)
}

/// Renders a fraction with the default [`PercentFormatter`].
pub fn format_percent(fraction: f64) -> String {
    PercentFormatter::new().format(fraction)
}

fn format_en_us(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS);
    let (int_segment, fraction_segment) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };
    let (sign, digits) = match int_segment.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_segment),
    };

    let mut out = String::with_capacity(fixed.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, digit) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !fraction_segment.is_empty() {
        out.push('.');
        out.push_str(fraction_segment);
    }
    out
}
