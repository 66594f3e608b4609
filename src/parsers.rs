/// Parse a strictly positive integer.
///
/// # Errors
/// Returns a message when the value is not a number or is zero.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number: {s}"))?;
    if value == 0 {
        return Err("Value must be greater than zero".to_string());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_usize() {
        assert_eq!(parse_positive_usize("80"), Ok(80));
        assert_eq!(parse_positive_usize(" 12 "), Ok(12));
        assert!(parse_positive_usize("0").is_err());
        assert!(parse_positive_usize("-3").is_err());
        assert!(parse_positive_usize("wide").is_err());
    }
}
