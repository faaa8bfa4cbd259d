//! Monetary amounts as integer centavos.
//!
//! Everything the UI shows or sends over the wire goes through this module so
//! values never live as floats longer than the single conversion away from
//! the backend's JSON numbers.

use thiserror::Error;

/// Why a user-typed amount could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount")]
    Invalid,
    #[error("more than two decimal places")]
    TooManyDecimals,
    #[error("amount out of range")]
    OutOfRange,
}

/// Formats centavos the Brazilian way: `.` groups thousands, `,` separates
/// the two decimal places. `123456` becomes `R$ 1.234,56`.
pub fn format_brl(centavos: i64) -> String {
    let abs = centavos.unsigned_abs();
    let reais = abs / 100;
    let cents = abs % 100;

    let digits = reais.to_string();
    let grouped: String = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(".");

    if centavos < 0 {
        format!("-R$ {grouped},{cents:02}")
    } else {
        format!("R$ {grouped},{cents:02}")
    }
}

/// Parses a typed amount into centavos.
///
/// Accepts `,` or `.` as the decimal separator and at most two decimals; when
/// both appear (`1.234,56`) the dots are treated as thousands grouping. A
/// leading `R$` is tolerated. Negative input is rejected: the form picks the
/// direction, the amount is always a magnitude.
pub fn parse_brl(input: &str) -> Result<i64, MoneyParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MoneyParseError::Empty);
    }
    let trimmed = trimmed
        .strip_prefix("R$")
        .map(str::trim_start)
        .unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(MoneyParseError::Empty);
    }

    let normalized = if trimmed.contains('.') && trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.replace(',', ".")
    };

    let mut parts = normalized.split('.');
    let whole = parts.next().unwrap_or("");
    let frac = parts.next();
    if parts.next().is_some() {
        return Err(MoneyParseError::Invalid);
    }

    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(MoneyParseError::Invalid);
    }
    let reais: i64 = whole.parse().map_err(|_| MoneyParseError::OutOfRange)?;

    let cents: i64 = match frac {
        None | Some("") => 0,
        Some(frac) => {
            if !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(MoneyParseError::Invalid);
            }
            match frac.len() {
                1 => frac.parse::<i64>().map_err(|_| MoneyParseError::Invalid)? * 10,
                2 => frac.parse::<i64>().map_err(|_| MoneyParseError::Invalid)?,
                _ => return Err(MoneyParseError::TooManyDecimals),
            }
        }
    };

    reais
        .checked_mul(100)
        .and_then(|v| v.checked_add(cents))
        .ok_or(MoneyParseError::OutOfRange)
}

/// Converts a backend float (reais) into centavos, rounding to the nearest.
pub fn from_reais(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Serialises centavos the way the backend's `valor` field expects:
/// dot-decimal with exactly two places, e.g. `1250` → `"12.50"`.
pub fn wire_valor(centavos: i64) -> String {
    let sign = if centavos < 0 { "-" } else { "" };
    let abs = centavos.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_brl_with_grouping() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(1), "R$ 0,01");
        assert_eq!(format_brl(1050), "R$ 10,50");
        assert_eq!(format_brl(123_456), "R$ 1.234,56");
        assert_eq!(format_brl(123_456_789), "R$ 1.234.567,89");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_brl(-1050), "-R$ 10,50");
        assert_eq!(format_brl(-5), "-R$ 0,05");
    }

    #[test]
    fn parses_comma_or_dot_decimals() {
        assert_eq!(parse_brl("10"), Ok(1000));
        assert_eq!(parse_brl("10,5"), Ok(1050));
        assert_eq!(parse_brl("10.50"), Ok(1050));
        assert_eq!(parse_brl("  2,30 "), Ok(230));
        assert_eq!(parse_brl("R$ 25,90"), Ok(2590));
    }

    #[test]
    fn parses_thousands_grouping_when_both_separators_appear() {
        assert_eq!(parse_brl("1.234,56"), Ok(123_456));
        assert_eq!(parse_brl("12.345,00"), Ok(1_234_500));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_brl(""), Err(MoneyParseError::Empty));
        assert_eq!(parse_brl("   "), Err(MoneyParseError::Empty));
        assert_eq!(parse_brl("R$"), Err(MoneyParseError::Empty));
        assert_eq!(parse_brl("abc"), Err(MoneyParseError::Invalid));
        assert_eq!(parse_brl("1.2.3"), Err(MoneyParseError::Invalid));
        assert_eq!(parse_brl(",50"), Err(MoneyParseError::Invalid));
        assert_eq!(parse_brl("12,345"), Err(MoneyParseError::TooManyDecimals));
    }

    #[test]
    fn rejects_negative_input() {
        assert_eq!(parse_brl("-5"), Err(MoneyParseError::Invalid));
        assert_eq!(parse_brl("-0,01"), Err(MoneyParseError::Invalid));
    }

    #[test]
    fn converts_wire_floats_to_centavos() {
        assert_eq!(from_reais(0.0), 0);
        assert_eq!(from_reais(12.34), 1234);
        assert_eq!(from_reais(99.99), 9999);
        assert_eq!(from_reais(100.0), 10_000);
        assert_eq!(from_reais(-4.5), -450);
    }

    #[test]
    fn serialises_wire_valor_with_dot_decimal() {
        assert_eq!(wire_valor(0), "0.00");
        assert_eq!(wire_valor(1250), "12.50");
        assert_eq!(wire_valor(100_005), "1000.05");
        assert_eq!(wire_valor(-230), "-2.30");
    }
}
