//! Display formatting shared by every page: money, percentages and the
//! card/expiry input masks.

pub fn currency_symbol_for(code: &str) -> &'static str {
    match code {
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "PHP" => "₱",
        _ => "$",
    }
}

/// Inserts a comma every three digits of an unsigned integer string.
fn group_digits(digits: &str) -> String {
    let digits = digits.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `-$1,234.50` style; `decimals` is 0 or 2.
pub fn format_money(amount: f64, symbol: &str, decimals: u32) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let text = format!("{:.*}", decimals as usize, amount.abs());
    let (whole, cents) = match text.split_once('.') {
        Some((whole, cents)) => (whole, Some(cents)),
        None => (text.as_str(), None),
    };
    let rounds_to_zero = text.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !rounds_to_zero { "-" } else { "" };
    let whole = group_digits(whole);
    match cents {
        Some(cents) => format!("{}{}{}.{}", sign, symbol, whole, cents),
        None => format!("{}{}{}", sign, symbol, whole),
    }
}

pub fn format_currency(amount: f64, symbol: &str) -> String {
    format_money(amount, symbol, 2)
}

pub fn format_currency_whole(amount: f64, symbol: &str) -> String {
    format_money(amount, symbol, 0)
}

/// Ratio in, percentage out: `0.125` becomes `12.5%`.
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Already a percentage: `3.2` becomes `+3.2%`.
pub fn format_signed_percentage(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, value)
}

pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        let year: String = digits.chars().skip(2).take(2).collect();
        format!("{}/{}", &digits[..2], year)
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_two_decimals_and_grouping() {
        assert_eq!(format_currency(29.0, "$"), "$29.00");
        assert_eq!(format_currency(971.0, "$"), "$971.00");
        assert_eq!(format_currency(12450.0, "$"), "$12,450.00");
        assert_eq!(format_currency(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
    }

    #[test]
    fn negative_amounts_put_sign_before_symbol() {
        assert_eq!(format_currency(-5.5, "$"), "-$5.50");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
    }

    #[test]
    fn huge_amounts_keep_every_digit() {
        assert_eq!(format_currency(1e20, "$"), "$100,000,000,000,000,000,000.00");
        assert_eq!(format_currency_whole(-2.5e19, "€"), "-€25,000,000,000,000,000,000");
    }

    #[test]
    fn whole_currency_drops_cents() {
        assert_eq!(format_currency_whole(5616.7, "$"), "$5,617");
        assert_eq!(format_currency_whole(999.4, "€"), "€999");
    }

    #[test]
    fn percentages() {
        assert_eq!(format_percentage(0.125), "12.5%");
        assert_eq!(format_signed_percentage(3.21), "+3.2%");
        assert_eq!(format_signed_percentage(-0.44), "-0.4%");
        assert_eq!(format_signed_percentage(0.0), "0.0%");
    }

    #[test]
    fn card_number_groups_digits_by_four() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("4111 11a1-11"), "4111 1111 1");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn expiry_inserts_slash_after_month() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1225"), "12/25");
        assert_eq!(format_expiry("12/2599"), "12/25");
    }

    #[test]
    fn unknown_currency_code_falls_back_to_dollar() {
        assert_eq!(currency_symbol_for("USD"), "$");
        assert_eq!(currency_symbol_for("XYZ"), "$");
        assert_eq!(currency_symbol_for("GBP"), "£");
    }
}
