/// Formats an amount as Indian rupees: `₹` prefix, two decimals, and the
/// lakh/crore digit grouping (`₹12,34,567.80`).
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let paise = (amount.abs() * 100.0).round() as u64;
    let rupees = paise / 100;
    let fraction = paise % 100;

    let sign = if negative && paise > 0 { "-" } else { "" };

    format!("{}₹{}.{:02}", sign, group_indian(rupees), fraction)
}

// Last three digits form one group, everything before that is grouped in pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_have_no_grouping() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(5.5), "₹5.50");
        assert_eq!(format_inr(999.999), "₹1,000.00");
    }

    #[test]
    fn groups_lakhs_and_crores() {
        assert_eq!(format_inr(1500.0), "₹1,500.00");
        assert_eq!(format_inr(123456.78), "₹1,23,456.78");
        assert_eq!(format_inr(12345678.9), "₹1,23,45,678.90");
    }

    #[test]
    fn negative_amounts_keep_sign_before_symbol() {
        assert_eq!(format_inr(-2500.0), "-₹2,500.00");
        assert_eq!(format_inr(-0.001), "₹0.00");
    }
}
