/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Parses a positive number written either as a fraction `p/q` or as a
/// decimal.
///
/// # Examples
/// ```
/// # use hybrid_ssc::utils::parse_ratio;
/// assert_eq!(parse_ratio("1/8"), Ok(0.125));
/// assert_eq!(parse_ratio("0.5"), Ok(0.5));
/// assert!(parse_ratio("1/0").is_err());
/// ```
pub fn parse_ratio(s: &str) -> Result<f64, String> {
    let value = match s.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator = parse_number(numerator)?;
            let denominator = parse_number(denominator)?;
            if denominator == 0.0 {
                return Err(format!("zero denominator in {:?}", s));
            }
            numerator / denominator
        }
        None => parse_number(s)?,
    };

    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{:?} is not a positive finite number", s))
    }
}

fn parse_number(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|e| format!("cannot parse {:?}: {}", s, e))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_ratio() {
        assert_eq!(parse_ratio("1/128"), Ok(1.0 / 128.0));
        assert_eq!(parse_ratio(" 3 / 4 "), Ok(0.75));
        assert_eq!(parse_ratio("2"), Ok(2.0));
        assert!(parse_ratio("0").is_err());
        assert!(parse_ratio("-1/8").is_err());
        assert!(parse_ratio("1/8/2").is_err());
        assert!(parse_ratio("inf").is_err());
        assert!(parse_ratio("one").is_err());
    }
}
