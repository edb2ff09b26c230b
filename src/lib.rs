// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Decoder library for scanned pharmacy stock labels.
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
 * # `stocklabel` Crate
 *
 * A library for decoding scanned pharmacy/warehouse stock labels in the vendor
 * `3PR` format and the GS1 Application-Identifier format.
 *
 * A barcode scanner in keyboard-emulation mode delivers one raw string per
 * label. This crate turns that string into a normalized record:
 *
 * 1. [decoder]: Cleans the scan, detects the label format, and dispatches.
 * 2. [vendor] and [gs1]: Extract the per-format fields.
 * 3. [normalize]: Normalizes fields for display and catalog lookup.
 *
 * ## Usage Example
 *
 * ```
 * use stocklabel::decoder::{LabelFormat, decode};
 *
 * let label = decode("00063PR00117**0011765983**31.08.2026");
 *
 * assert_eq!(label.format, LabelFormat::Vendor3pr);
 * assert_eq!(label.product_code, "3PR00117");
 * assert_eq!(label.lot_number, "0011765983");
 * assert_eq!(label.expiry_date, "31.08.2026");
 * ```
 *
 * Decoding never fails with an error: input that matches no known grammar
 * comes back as [decoder::LabelFormat::Unknown] with every field empty.
 */

pub mod decoder;
pub mod gs1;
pub mod normalize;
pub mod vendor;

pub use decoder::{DecodedLabel, LabelFormat, decode};
