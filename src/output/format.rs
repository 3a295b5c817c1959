//! Number formatting for the demo output. Workshops run with the presenter's
//! locale; the CLI documents en (default), de, and fr.

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberFormat {
    group_sep: char,
    decimal_sep: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            group_sep: ',',
            decimal_sep: '.',
        }
    }
}

impl NumberFormat {
    /// Accepts a bare language code or a BCP 47 tag ("de", "de-DE", "fr_FR");
    /// only the language part matters for separators.
    pub(crate) fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(NumberFormat::default());
        };
        let language = raw.split(['-', '_']).next().unwrap_or(raw);

        match language.to_ascii_lowercase().as_str() {
            "en" => Ok(NumberFormat::default()),
            "de" => Ok(NumberFormat {
                group_sep: '.',
                decimal_sep: ',',
            }),
            "fr" => Ok(NumberFormat {
                group_sep: ' ',
                decimal_sep: ',',
            }),
            _ => Err(AppError::UnsupportedLocale {
                input: raw.to_string(),
            }),
        }
    }
}

/// Render an integer with thousands separators.
pub(crate) fn format_number(n: i64, format: NumberFormat) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(format.group_sep);
        }
        grouped.push(c);
    }
    grouped
}

/// Compact form with K/M/B suffixes, one decimal place.
pub(crate) fn format_compact(n: i64, format: NumberFormat) -> String {
    const SCALES: [(i64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    let sign = if n < 0 { "-" } else { "" };
    let value = n.unsigned_abs() as f64;
    for (scale, suffix) in SCALES {
        if value >= scale as f64 {
            let mut scaled = format!("{:.1}", value / scale as f64);
            if format.decimal_sep != '.' {
                scaled = scaled.replace('.', &format.decimal_sep.to_string());
            }
            return format!("{sign}{scaled}{suffix}");
        }
    }
    format!("{sign}{}", n.unsigned_abs())
}

pub(crate) fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.1}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_with_commas() {
        let fmt = NumberFormat::default();
        assert_eq!(format_number(0, fmt), "0");
        assert_eq!(format_number(999, fmt), "999");
        assert_eq!(format_number(1000, fmt), "1,000");
        assert_eq!(format_number(1_234_567, fmt), "1,234,567");
    }

    #[test]
    fn format_number_negative() {
        let fmt = NumberFormat::default();
        assert_eq!(format_number(-1234, fmt), "-1,234");
    }

    #[test]
    fn format_compact_units() {
        let fmt = NumberFormat::default();
        assert_eq!(format_compact(0, fmt), "0");
        assert_eq!(format_compact(999, fmt), "999");
        assert_eq!(format_compact(1_000, fmt), "1.0K");
        assert_eq!(format_compact(1_500, fmt), "1.5K");
        assert_eq!(format_compact(2_500_000, fmt), "2.5M");
        assert_eq!(format_compact(1_000_000_000, fmt), "1.0B");
    }

    #[test]
    fn from_locale_none_returns_default() {
        let fmt = NumberFormat::from_locale(None).unwrap();
        assert_eq!(format_number(1000, fmt), "1,000");
    }

    #[test]
    fn from_locale_empty_returns_default() {
        let fmt = NumberFormat::from_locale(Some("")).unwrap();
        assert_eq!(format_number(1000, fmt), "1,000");
    }

    #[test]
    fn from_locale_de_uses_dot_separator() {
        let fmt = NumberFormat::from_locale(Some("de")).unwrap();
        assert_eq!(format_number(1000, fmt), "1.000");
    }

    #[test]
    fn from_locale_fr_uses_space_separator() {
        let fmt = NumberFormat::from_locale(Some("fr")).unwrap();
        assert_eq!(format_number(1000, fmt), "1 000");
    }

    #[test]
    fn from_locale_with_region_suffix() {
        let fmt = NumberFormat::from_locale(Some("de-DE")).unwrap();
        assert_eq!(format_number(1000, fmt), "1.000");
    }

    #[test]
    fn from_locale_unsupported_returns_error() {
        assert!(NumberFormat::from_locale(Some("ja")).is_err());
        assert!(NumberFormat::from_locale(Some("zh")).is_err());
    }

    #[test]
    fn format_compact_with_de_locale() {
        let fmt = NumberFormat::from_locale(Some("de")).unwrap();
        assert_eq!(format_compact(1500, fmt), "1,5K");
    }

    #[test]
    fn format_seconds_one_decimal() {
        assert_eq!(format_seconds(12.34), "12.3s");
        assert_eq!(format_seconds(0.0), "0.0s");
    }
}
