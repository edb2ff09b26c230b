// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/vendor.rs - Extraction of vendor 3PR stock labels.
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
 * # `vendor` Module
 *
 * This module extracts the fields of vendor `3PR` labels. Two physical
 * sub-variants exist on shelves:
 *
 * - *Delimited*: `[..3PR<digits>]**[lot]**[expiry]`, with the expiry already
 *   printed in `DD.MM.YYYY` form.
 * - *Fixed-width*: no `**` delimiters; a 5-digit code suffix, a 10-character
 *   lot, and the remaining tail as the expiry string.
 */

use std::sync::LazyLock;

use regex::Regex;

use crate::decoder::{DecodedLabel, LabelFormat};

/// Literal marker present in every vendor label.
pub const MARKER: &str = "3PR";

const DELIMITER: &str = "**";
const FIXED_LOT_LEN: usize = 10;

// Delimited labels pad the code suffix to arbitrary width.
static DELIMITED_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"3PR\d+").unwrap());

// Fixed-width labels always carry a 5-digit code suffix.
static FIXED_WIDTH_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"3PR\d{5}").unwrap());

/// Extracts the fields of a vendor `3PR` label.
///
/// Expects input already trimmed and stripped of control characters. Labels
/// with at least two `**` delimiters decode as the delimited variant; anything
/// else falls back to the fixed-width variant. There is no cross-variant
/// retry: if the chosen variant finds no product code, the decode fails.
///
/// # Arguments
///
/// * `cleaned` - The cleaned scan, known to contain the `3PR` marker.
///
/// # Returns
///
/// The decoded label, or `None` when no product code can be located.
pub fn extract(cleaned: &str) -> Option<DecodedLabel> {
    if cleaned.matches(DELIMITER).count() >= 2 {
        extract_delimited(cleaned)
    } else {
        extract_fixed_width(cleaned)
    }
}

fn extract_delimited(cleaned: &str) -> Option<DecodedLabel> {
    let mut segments = cleaned.split(DELIMITER);
    let head = segments.next()?;

    // The code digits must sit before the first delimiter.
    let product_code = DELIMITED_CODE.find(head)?.as_str().to_string();
    let lot_number = segments.next().unwrap_or("").to_string();
    let expiry_date = segments.next().unwrap_or("").to_string();

    Some(DecodedLabel {
        product_code,
        lot_number,
        expiry_date,
        format: LabelFormat::Vendor3pr,
    })
}

fn extract_fixed_width(cleaned: &str) -> Option<DecodedLabel> {
    let flattened = cleaned.replace('*', "");
    let code = FIXED_WIDTH_CODE.find(&flattened)?;

    // Leading text before the marker is scanner padding; only the tail after
    // the code carries data.
    let tail = &flattened[code.end()..];
    let lot_end = tail
        .char_indices()
        .nth(FIXED_LOT_LEN)
        .map_or(tail.len(), |(idx, _)| idx);
    let (lot_number, expiry_date) = tail.split_at(lot_end);

    Some(DecodedLabel {
        product_code: code.as_str().to_string(),
        lot_number: lot_number.to_string(),
        expiry_date: expiry_date.to_string(),
        format: LabelFormat::Vendor3pr,
    })
}
