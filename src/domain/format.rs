// src/domain/format.rs

/// `1234567` -> `"1,234,567"`.
pub fn with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar price as shown on cards, e.g. `"$450,000"`.
pub fn format_price(value: u64) -> String {
    format!("${}", with_commas(value))
}

/// Short form used by summary cards: `$4.95M`, `$140K`, `$950`.
/// The unit is picked after rounding, so 999,999 reads `$1M`.
pub fn format_compact(value: u64) -> String {
    if value < 1_000 {
        return format!("${value}");
    }

    let thousands = round2(value as f64 / 1_000.0);
    if thousands < 1_000.0 {
        format!("${}K", trim_decimals(thousands))
    } else {
        format!("${}M", trim_decimals(round2(value as f64 / 1_000_000.0)))
    }
}

/// Signed percentage with one decimal: `"+12.5%"`, `"-6.1%"`.
pub fn format_change(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{pct:.1}%")
    } else {
        format!("{pct:.1}%")
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// Two decimals at most, trailing zeros dropped.
fn trim_decimals(v: f64) -> String {
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
