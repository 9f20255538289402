// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

/// Parse an amount the way a browser number field is read: leading
/// whitespace is skipped, the longest numeric prefix is converted and any
/// trailing text is ignored. Input without a numeric prefix yields NaN.
pub fn parse_amount(s: &str) -> f64 {
    let s = s.trim_start();
    let Some(m) = NUMERIC_PREFIX.find(s) else {
        return f64::NAN;
    };
    let lit = m.as_str();
    match lit.trim_start_matches(['+', '-']) {
        "Infinity" if lit.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => lit.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Two-decimal fixed point, with `NaN` and `Infinity` spelled out.
pub fn to_fixed(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        // -0.0 prints unsigned
        return "0.00".to_string();
    }
    let sign = if v < 0.0 { "-" } else { "" };
    let a = v.abs();
    // Exact halfway cents are odd multiples of 1/8; those round away from zero.
    let eighths = a * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (a * 100.0).round();
        return format!("{}{:.2}", sign, cents / 100.0);
    }
    format!("{}{:.2}", sign, a)
}

/// Text put back into the amount field when an expense is loaded for editing.
pub fn amount_to_input(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    v.to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Split a command line into words. Single and double quotes group words,
/// a backslash escapes the next character outside single quotes.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut cur = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => {
                let next = chars
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("Trailing backslash in '{}'", line))?;
                cur.push(next);
                in_word = true;
            }
            (Some(_), c) => cur.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut cur));
                    in_word = false;
                }
            }
            (None, c) => {
                cur.push(c);
                in_word = true;
            }
        }
    }
    if let Some(q) = quote {
        return Err(anyhow::anyhow!("Unclosed {} quote in '{}'", q, line));
    }
    if in_word {
        words.push(cur);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_reads_numeric_prefix() {
        assert_eq!(parse_amount("3.50"), 3.5);
        assert_eq!(parse_amount("  -10"), -10.0);
        assert_eq!(parse_amount("3.50abc"), 3.5);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("1e3x"), 1000.0);
        assert_eq!(parse_amount("2e"), 2.0);
        assert_eq!(parse_amount("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_amount_without_prefix_is_nan() {
        assert!(parse_amount("abc").is_nan());
        assert!(parse_amount("").is_nan());
        assert!(parse_amount("$3").is_nan());
        assert!(parse_amount("inf").is_nan());
    }

    #[test]
    fn to_fixed_spells_special_values() {
        assert_eq!(to_fixed(3.5), "3.50");
        assert_eq!(to_fixed(-10.0), "-10.00");
        assert_eq!(to_fixed(-0.0), "0.00");
        assert_eq!(to_fixed(f64::NAN), "NaN");
        assert_eq!(to_fixed(f64::INFINITY), "Infinity");
        assert_eq!(to_fixed(-0.001), "-0.00");
    }

    #[test]
    fn to_fixed_rounds_halfway_cents_away_from_zero() {
        assert_eq!(to_fixed(0.125), "0.13");
        assert_eq!(to_fixed(-0.125), "-0.13");
        assert_eq!(to_fixed(0.375), "0.38");
        assert_eq!(to_fixed(1.625), "1.63");
        assert_eq!(to_fixed(2.5), "2.50");
        assert_eq!(to_fixed(1.005), "1.00");
    }

    #[test]
    fn amount_to_input_drops_trailing_zeros() {
        assert_eq!(amount_to_input(3.5), "3.5");
        assert_eq!(amount_to_input(10.0), "10");
        assert_eq!(amount_to_input(f64::NAN), "NaN");
    }

    #[test]
    fn split_words_honours_quotes() {
        let w = split_words(r#"submit --name "Coffee beans" --amount '3.50'"#).unwrap();
        assert_eq!(w, vec!["submit", "--name", "Coffee beans", "--amount", "3.50"]);
        assert_eq!(split_words(r#"set --name """#).unwrap(), vec!["set", "--name", ""]);
        assert!(split_words("set --name \"open").is_err());
    }
}
