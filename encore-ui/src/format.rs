//! Display formatting for concert dates and locations
//!
//! The backend stores concert data as raw slugs (`"san_francisco-usa"`,
//! `"05-03-1999"`); these helpers turn them into display strings. Malformed
//! input degrades to a readable fallback, never a panic.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats a `city-country` location slug: `"san_francisco-usa"` becomes
/// `"San Francisco, USA"`. Missing or empty input renders as
/// `"Unknown Location"`.
pub fn format_location(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return "Unknown Location".to_string();
    };

    raw.trim()
        .to_lowercase()
        .replace('_', " ")
        .split('-')
        .map(|part| {
            part.split(' ')
                .map(capitalize_word)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize_word(word: &str) -> String {
    // "usa" is an initialism, not a name
    if word == "usa" {
        return "USA".to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Formats a `DD-MM-YYYY` date: `"01-01-2023"` becomes `"01 Jan 2023"`.
/// Day and year pass through verbatim; an unparseable or out-of-range month
/// renders as `"??"`. Anything that does not split into exactly three parts
/// is returned unchanged, and missing input renders as `"Unknown Date"`.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return "Unknown Date".to_string();
    };

    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 3 {
        return raw.to_string();
    }

    let month = parts[1]
        .parse::<usize>()
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|m| MONTHS.get(m))
        .copied()
        .unwrap_or("??");

    format!("{} {} {}", parts[0], month, parts[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_missing() {
        assert_eq!(format_location(None), "Unknown Location");
        assert_eq!(format_location(Some("")), "Unknown Location");
    }

    #[test]
    fn test_location_city_country() {
        // only "usa" is special-cased, other country codes get plain capitalization
        assert_eq!(format_location(Some("london-uk")), "London, Uk");
        assert_eq!(format_location(Some("san_francisco-usa")), "San Francisco, USA");
    }

    #[test]
    fn test_location_uppercase_input() {
        assert_eq!(format_location(Some("NEW_YORK-usa")), "New York, USA");
    }

    #[test]
    fn test_location_trims_whitespace() {
        assert_eq!(format_location(Some("  paris-france  ")), "Paris, France");
    }

    #[test]
    fn test_date_missing() {
        assert_eq!(format_date(None), "Unknown Date");
        assert_eq!(format_date(Some("")), "Unknown Date");
    }

    #[test]
    fn test_date_formats_month() {
        assert_eq!(format_date(Some("01-01-2023")), "01 Jan 2023");
        assert_eq!(format_date(Some("05-03-1999")), "05 Mar 1999");
        assert_eq!(format_date(Some("23-12-2019")), "23 Dec 2019");
    }

    #[test]
    fn test_date_wrong_part_count_passes_through() {
        assert_eq!(format_date(Some("bad-format")), "bad-format");
        assert_eq!(format_date(Some("2023")), "2023");
    }

    #[test]
    fn test_date_invalid_month() {
        assert_eq!(format_date(Some("01-13-2023")), "01 ?? 2023");
        assert_eq!(format_date(Some("01-00-2023")), "01 ?? 2023");
        assert_eq!(format_date(Some("01-xx-2023")), "01 ?? 2023");
    }

    #[test]
    fn test_date_no_zero_padding_normalization() {
        assert_eq!(format_date(Some("1-2-23")), "1 Feb 23");
    }
}
