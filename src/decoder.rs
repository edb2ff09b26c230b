// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/decoder.rs - Format detection and decoding for scanned stock labels.
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
 * # `decoder` Module
 *
 * This module is the entry point of the crate: it cleans a raw scanned
 * string, detects which label grammar it carries, and dispatches to the
 * matching extractor.
 *
 * ## Usage Example
 *
 * ```
 * use stocklabel::decoder::{LabelFormat, decode};
 *
 * let label = decode("0112345678901231171712311012345AB");
 *
 * assert_eq!(label.format, LabelFormat::Gs1);
 * assert_eq!(label.product_code, "12345678901231");
 * assert_eq!(label.expiry_date, "31.12.2017");
 * assert_eq!(label.lot_number, "12345AB");
 * ```
 */

use serde::Serialize;

use crate::gs1;
use crate::vendor;

/// Identifies which label grammar matched during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelFormat {
    /// Vendor-specific label carrying the literal `3PR` marker.
    #[serde(rename = "VENDOR_3PR")]
    Vendor3pr,
    /// GS1 Application-Identifier label.
    #[serde(rename = "GS1")]
    Gs1,
    /// No recognized grammar matched; the decode failed.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl LabelFormat {
    /// The wire name of this format tag.
    pub fn as_str(self) -> &'static str {
        match self {
            LabelFormat::Vendor3pr => "VENDOR_3PR",
            LabelFormat::Gs1 => "GS1",
            LabelFormat::Unknown => "UNKNOWN",
        }
    }
}

/// Normalized fields extracted from a single scanned label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedLabel {
    /// The product code; `3PR`-prefixed for vendor labels, a 14-digit GTIN for
    /// GS1 labels. Returned as extracted; catalog-lookup normalization is the
    /// caller's concern (see [crate::normalize::normalize_product_code]).
    pub product_code: String,
    /// The lot/batch number; empty if the label has no lot segment.
    pub lot_number: String,
    /// The expiry date in `DD.MM.YYYY` display form; empty if absent.
    pub expiry_date: String,
    /// The grammar that matched.
    pub format: LabelFormat,
}

impl DecodedLabel {
    fn unknown() -> Self {
        Self {
            product_code: String::new(),
            lot_number: String::new(),
            expiry_date: String::new(),
            format: LabelFormat::Unknown,
        }
    }

    /// Whether this decode failed. Callers must treat an unknown label as a
    /// user-correctable input error, typically by prompting for a re-scan.
    pub fn is_unknown(&self) -> bool {
        self.format == LabelFormat::Unknown
    }
}

/// Decodes a raw scanned string into a [DecodedLabel].
///
/// Detection is ordered: a label containing the `3PR` marker is decoded as a
/// vendor label, otherwise a label starting with the `01` Application
/// Identifier is decoded as GS1.
///
/// # Arguments
///
/// * `raw` - The scanned characters, as delivered by the scanner.
///
/// # Returns
///
/// The decoded label, with [LabelFormat::Unknown] and all fields empty when
/// no grammar matched. Never panics on malformed input.
pub fn decode(raw: &str) -> DecodedLabel {
    let cleaned = strip_control(raw.trim());
    if cleaned.is_empty() {
        return DecodedLabel::unknown();
    }

    if cleaned.contains(vendor::MARKER) {
        vendor::extract(&cleaned).unwrap_or_else(DecodedLabel::unknown)
    } else if cleaned.starts_with(gs1::GTIN_AI) {
        gs1::extract(&cleaned).unwrap_or_else(DecodedLabel::unknown)
    } else {
        DecodedLabel::unknown()
    }
}

// Scanners in keyboard-emulation mode deliver FNC1/GS as a control byte.
fn strip_control(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_control()).collect()
}
