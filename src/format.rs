//! Display formatting for rupee amounts
//!
//! These functions only build strings; the numbers passed in are never changed.

const RUPEE: &str = "₹";

const CRORE: f64 = 1e7;
const LAKH: f64 = 1e5;
const THOUSAND: f64 = 1e3;

/// Group an unsigned digit string the Indian way: last three digits, then pairs
///
/// "1161695" -> "11,61,695"
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn with_sign(negative: bool, body: String) -> String {
    if negative {
        format!("-{}{}", RUPEE, body)
    } else {
        format!("{}{}", RUPEE, body)
    }
}

/// Whole-rupee amount with Indian grouping, e.g. `₹11,61,695`
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}", RUPEE, amount);
    }
    let rounded = amount.round();
    // avoid "-₹0" for small negatives
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    with_sign(negative, group_indian(&digits))
}

/// Amount with exactly two decimals, e.g. `₹2,051.65` (EMI display)
pub fn format_inr_precise(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}", RUPEE, amount);
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = amount < 0.0 && fixed != "0.00";
    with_sign(negative, format!("{}.{}", group_indian(whole), frac))
}

/// Short Indian magnitude tag: `(1.16 Cr)`, `(11.62 Lakh)`, `(5.00 K)`
///
/// Empty below one thousand.
pub fn abbreviate_inr(amount: f64) -> String {
    if amount >= CRORE {
        format!("({:.2} Cr)", amount / CRORE)
    } else if amount >= LAKH {
        format!("({:.2} Lakh)", amount / LAKH)
    } else if amount >= THOUSAND {
        format!("({:.2} K)", amount / THOUSAND)
    } else {
        String::new()
    }
}

/// Percentage with two decimals, e.g. `6.66%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}
