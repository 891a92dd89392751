use std::str::FromStr;

/// Read a variable through `lookup`, treating blank values as unset.
pub fn non_blank_var<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read and parse a variable. Unparseable values are reported back as the
/// raw string so the caller can turn them into a warning.
pub fn parse_var<F, T>(lookup: &F, name: &str) -> Option<Result<T, String>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    non_blank_var(lookup, name).map(|raw| raw.parse::<T>().map_err(|_| raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_unset() {
        let lookup = |name: &str| match name {
            "BLANK" => Some("   ".to_string()),
            "NUM" => Some(" 42 ".to_string()),
            "BAD" => Some("forty".to_string()),
            _ => None,
        };
        assert_eq!(non_blank_var(&lookup, "BLANK"), None);
        assert_eq!(parse_var::<_, u64>(&lookup, "NUM"), Some(Ok(42)));
        assert_eq!(
            parse_var::<_, u64>(&lookup, "BAD"),
            Some(Err("forty".to_string()))
        );
        assert_eq!(parse_var::<_, u64>(&lookup, "MISSING"), None);
    }
}
