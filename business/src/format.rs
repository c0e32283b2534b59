//! Display helpers shared by pages.

/// Format `value` with `,` between groups of three digits.
///
/// `50000` becomes `"50,000"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Naira amount with grouped digits, e.g. `₦1,928,000`.
pub fn naira(value: u64) -> String {
    format!("₦{}", group_thousands(value))
}

/// Percentage label, e.g. `96%` or `2.1%`.
pub fn percent(value: f64) -> String {
    format!("{value}%")
}
