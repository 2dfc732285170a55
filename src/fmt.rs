/// Format an amount with a currency label and thousands separators: LKR 1,234.56
pub fn money(currency: &str, val: f64) -> String {
    let negative = val < 0.0;
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-{currency} {with_commas}.{dec_part}")
    } else {
        format!("{currency} {with_commas}.{dec_part}")
    }
}

/// Whole quantities print without a fraction; others keep up to three places.
pub fn quantity(val: f64) -> String {
    if val.fract() == 0.0 {
        format!("{val:.0}")
    } else {
        let s = format!("{val:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Human phrasing for a signed day count relative to today.
pub fn days(days_left: i64) -> String {
    match days_left {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        d if d > 1 => format!("in {d} days"),
        -1 => "1 day ago".to_string(),
        d => format!("{} days ago", -d),
    }
}
