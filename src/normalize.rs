// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/normalize.rs - Field normalization for decoded stock labels.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/*!
 * # `normalize` Module
 *
 * Normalization helpers shared by the decoder and its callers: converting a
 * GS1 expiry value to display form, interpreting an expiry string as a
 * calendar date, and collapsing product codes for catalog lookup.
 */

use chrono::NaiveDate;

// Entry formats accepted for expiry strings: label display form, ISO form
// from date inputs, and the bare GS1 value.
const EXPIRY_ENTRY_FORMATS: [&str; 3] = ["%d.%m.%Y", "%Y-%m-%d", "%y%m%d"];

/// Converts a GS1 `YYMMDD` expiry value to `DD.MM.YYYY` display form.
///
/// The century is fixed to `20`. Anything that is not exactly six ASCII
/// digits yields an empty string.
pub fn format_gs1_expiry(raw: &str) -> String {
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }
    format!("{}.{}.20{}", &raw[4..6], &raw[2..4], &raw[..2])
}

/// Interprets an expiry string as a calendar date.
///
/// Decoded labels carry the display form, while hand-corrected form fields
/// may carry ISO or bare `YYMMDD` values; all three are accepted. Returns
/// `None` when no format matches.
pub fn parse_expiry_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    EXPIRY_ENTRY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Normalizes a product code for catalog lookup.
///
/// Purely numeric codes lose their leading zeros (an all-zero code collapses
/// to `"0"`); anything else passes through trimmed. The decoder never applies
/// this itself: [crate::decoder::decode] returns codes as extracted.
pub fn normalize_product_code(raw: &str) -> String {
    let code = raw.trim();
    if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
        let stripped = code.trim_start_matches('0');
        if stripped.is_empty() { "0" } else { stripped }.to_string()
    } else {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gs1_expiry_display_form() {
        assert_eq!(format_gs1_expiry("171231"), "31.12.2017");
        assert_eq!(format_gs1_expiry("260801"), "01.08.2026");
    }

    #[test]
    fn gs1_expiry_rejects_malformed_values() {
        assert_eq!(format_gs1_expiry(""), "");
        assert_eq!(format_gs1_expiry("17123"), "");
        assert_eq!(format_gs1_expiry("1712311"), "");
        assert_eq!(format_gs1_expiry("17AB31"), "");
    }

    #[test]
    fn expiry_entry_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        assert_eq!(parse_expiry_date("31.08.2026"), Some(expected));
        assert_eq!(parse_expiry_date("2026-08-31"), Some(expected));
        assert_eq!(parse_expiry_date("260831"), Some(expected));
    }

    #[test]
    fn expiry_entry_rejects_garbage() {
        assert_eq!(parse_expiry_date(""), None);
        assert_eq!(parse_expiry_date("soon"), None);
        assert_eq!(parse_expiry_date("31.13.2026"), None);
    }

    #[test]
    fn numeric_codes_lose_leading_zeros() {
        assert_eq!(normalize_product_code("0011765983"), "11765983");
        assert_eq!(normalize_product_code("000"), "0");
        assert_eq!(normalize_product_code("12345678901231"), "12345678901231");
    }

    #[test]
    fn non_numeric_codes_pass_through() {
        assert_eq!(normalize_product_code("3PR00117"), "3PR00117");
        assert_eq!(normalize_product_code("  3PR00117 "), "3PR00117");
        assert_eq!(normalize_product_code(""), "");
    }
}
