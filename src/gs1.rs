// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/gs1.rs - Application Identifier scan for GS1 stock labels.
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
 * # `gs1` Module
 *
 * This module scans the flattened text of a GS1-128 label for the three
 * Application Identifiers the inventory system consumes: `01` (GTIN), `17`
 * (expiry, `YYMMDD`), and `10` (lot/batch). The GTIN anchors decoding; a
 * label without it does not decode at all.
 */

use crate::decoder::{DecodedLabel, LabelFormat};
use crate::normalize;

/// AI tag of the mandatory GTIN / product code field.
pub const GTIN_AI: &str = "01";
const GTIN_LEN: usize = 14;

const EXPIRY_AI: &str = "17";
const EXPIRY_LEN: usize = 6;

const LOT_AI: &str = "10";

// AI tokens observed to follow a variable-length lot on real labels. A token
// only terminates the lot when a digit follows it.
const LOT_TERMINATORS: [&str; 7] = ["01", "17", "21", "15", "11", "30", "37"];

/// Extracts the fields of a GS1 Application-Identifier label.
///
/// The cleaned scan is flattened (separator characters dropped) and walked
/// left to right. Fixed-length AIs (`01`, `17`) consume their exact digit
/// count; the variable-length lot (`10`) runs to the next terminator token or
/// the end of input. An unrecognized AI, or a fixed-length field that is
/// short or non-numeric, stops the scan without discarding fields already
/// captured. The first occurrence of each AI wins.
///
/// # Arguments
///
/// * `cleaned` - The cleaned scan, known to start with the `01` tag.
///
/// # Returns
///
/// The decoded label, or `None` when the GTIN AI was never found.
pub fn extract(cleaned: &str) -> Option<DecodedLabel> {
    let flat = flatten(cleaned);

    let mut gtin: Option<&str> = None;
    let mut expiry: Option<&str> = None;
    let mut lot: Option<&str> = None;

    let mut cursor = 0;
    while cursor + 2 <= flat.len() {
        match &flat[cursor..cursor + 2] {
            GTIN_AI => match fixed_field(&flat, cursor + 2, GTIN_LEN) {
                Some(value) => {
                    gtin.get_or_insert(value);
                    cursor += 2 + GTIN_LEN;
                }
                None => break,
            },
            EXPIRY_AI => match fixed_field(&flat, cursor + 2, EXPIRY_LEN) {
                Some(value) => {
                    expiry.get_or_insert(value);
                    cursor += 2 + EXPIRY_LEN;
                }
                None => break,
            },
            LOT_AI => {
                let start = cursor + 2;
                let end = lot_end(&flat, start);
                lot.get_or_insert(&flat[start..end]);
                cursor = end;
            }
            _ => break,
        }
    }

    Some(DecodedLabel {
        product_code: gtin?.to_string(),
        lot_number: lot.unwrap_or("").to_string(),
        expiry_date: expiry.map_or_else(String::new, normalize::format_gs1_expiry),
        format: LabelFormat::Gs1,
    })
}

// Lot values may legally contain hyphens, underscores, dots, and slashes, so
// those survive; bracket and space separators from human-readable renditions
// do not. The result is pure ASCII, making byte indexing safe.
fn flatten(cleaned: &str) -> String {
    cleaned
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/'))
        .collect()
}

fn fixed_field(flat: &str, start: usize, len: usize) -> Option<&str> {
    let field = flat.get(start..start + len)?;
    field.bytes().all(|b| b.is_ascii_digit()).then_some(field)
}

fn lot_end(flat: &str, start: usize) -> usize {
    let bytes = flat.as_bytes();
    let mut pos = start;
    while pos < flat.len() {
        if pos + 2 < flat.len() && bytes[pos + 2].is_ascii_digit() {
            let token = &flat[pos..pos + 2];
            if LOT_TERMINATORS.contains(&token) {
                break;
            }
        }
        pos += 1;
    }
    pos
}
