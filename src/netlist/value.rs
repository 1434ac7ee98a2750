//! Numeric field parsing.

/// Parse a number string with optional unit suffix.
///
/// `10k` is 10000, `4.7m` is 0.0047, `2M` is 2e6. Plain floats and
/// exponents (`1e3`) pass through unchanged.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (num_str, multiplier) = match text.chars().last() {
        Some(last) => {
            let mult = match last {
                'p' => 1e-12,
                'n' => 1e-9,
                'u' | 'µ' => 1e-6,
                'm' => 1e-3,
                'k' | 'K' => 1e3,
                'M' => 1e6,
                'G' => 1e9,
                _ => 1.0,
            };
            if mult != 1.0 {
                (&text[..text.len() - last.len_utf8()], mult)
            } else {
                (text, 1.0)
            }
        }
        None => (text, 1.0),
    };

    num_str
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() < x.abs() * 1e-10 + 1e-15,
            (None, None) => true,
            _ => false,
        }
    }

    #[test]
    fn test_parse_value() {
        assert!(approx_eq(parse_value("10k"), Some(10_000.0)));
        assert!(approx_eq(parse_value("4.7K"), Some(4_700.0)));
        assert!(approx_eq(parse_value("1M"), Some(1_000_000.0)));
        assert!(approx_eq(parse_value("220m"), Some(0.22)));
        assert!(approx_eq(parse_value("2.2"), Some(2.2)));
        assert!(approx_eq(parse_value("-5"), Some(-5.0)));
        assert!(approx_eq(parse_value("1e3"), Some(1000.0)));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("ohm"), None);
        assert_eq!(parse_value("k"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("NaN"), None);
    }
}
