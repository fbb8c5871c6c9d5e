/// Medal shown next to a podium position.
pub fn medal(position: u32) -> &'static str {
    match position {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "🏁",
    }
}

/// Championship points without a trailing `.0` for whole numbers.
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{}", points as i64)
    } else {
        format!("{points}")
    }
}

/// Race start as shown on the schedule: `"13:00:00Z"` becomes `"13:00:00 UTC"`.
pub fn format_race_time(time: Option<&str>) -> String {
    match time {
        Some(t) => t.replacen('Z', " UTC", 1),
        None => String::new(),
    }
}

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Minimum filter of the statistics table; anything invalid means "no filter".
pub fn parse_minimum_filter(input: &str) -> u32 {
    validate_numeric_input(input, Some(0u32), None, "Minimum").unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medals_for_podium() {
        assert_eq!(medal(1), "🥇");
        assert_eq!(medal(3), "🥉");
        assert_eq!(medal(7), "🏁");
    }

    #[test]
    fn points_formatting() {
        assert_eq!(format_points(25.0), "25");
        assert_eq!(format_points(12.5), "12.5");
    }

    #[test]
    fn race_time_formatting() {
        assert_eq!(format_race_time(Some("13:00:00Z")), "13:00:00 UTC");
        assert_eq!(format_race_time(None), "");
    }

    #[test]
    fn numeric_validation_bounds() {
        assert_eq!(validate_numeric_input("5", Some(0u32), Some(10), "Minimum"), Ok(5));
        assert_eq!(
            validate_numeric_input("11", Some(0u32), Some(10), "Minimum"),
            Err("Minimum cannot exceed 10".to_string())
        );
        assert_eq!(
            validate_numeric_input::<u32>("  ", None, None, "Minimum"),
            Err("Minimum cannot be empty".to_string())
        );
    }

    #[test]
    fn minimum_filter_resets_on_garbage() {
        assert_eq!(parse_minimum_filter("12"), 12);
        assert_eq!(parse_minimum_filter("-3"), 0);
        assert_eq!(parse_minimum_filter("abc"), 0);
        assert_eq!(parse_minimum_filter(""), 0);
    }
}
