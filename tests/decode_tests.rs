// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  tests/decode_tests.rs - Integration tests for stock label decoding.
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

//! Integration tests for the public decoding contract: format detection,
//! both vendor sub-variants, the GS1 Application-Identifier scan, and the
//! failure semantics callers build their single error branch on.

use stocklabel::{LabelFormat, decode, normalize};

#[test]
fn unrecognized_input_is_unknown_with_empty_fields() {
    for raw in ["hello world", "PR3 not a marker", "1234567890", "0x01"] {
        let label = decode(raw);
        assert_eq!(label.format, LabelFormat::Unknown, "raw: {raw}");
        assert_eq!(label.product_code, "");
        assert_eq!(label.lot_number, "");
        assert_eq!(label.expiry_date, "");
        assert!(label.is_unknown());
    }
}

#[test]
fn empty_and_whitespace_input_is_unknown() {
    assert!(decode("").is_unknown());
    assert!(decode("   ").is_unknown());
}

#[test]
fn vendor_delimited_label_decodes() {
    let label = decode("00063PR00117**0011765983**31.08.2026");
    assert_eq!(label.format, LabelFormat::Vendor3pr);
    assert_eq!(label.product_code, "3PR00117");
    assert_eq!(label.lot_number, "0011765983");
    assert_eq!(label.expiry_date, "31.08.2026");
}

#[test]
fn vendor_fixed_width_label_decodes() {
    // No "**" delimiters: 5-digit code suffix, 10-character lot, expiry tail.
    let label = decode("0006*3PR00117*001176598331.08.2026");
    assert_eq!(label.format, LabelFormat::Vendor3pr);
    assert_eq!(label.product_code, "3PR00117");
    assert_eq!(label.lot_number, "0011765983");
    assert_eq!(label.expiry_date, "31.08.2026");
}

#[test]
fn gs1_round_trip_recovers_all_fields() {
    let cases = [
        ("12345678901231", "LOTAB12", "171231", "31.12.2017"),
        ("00000000000000", "A", "260801", "01.08.2026"),
        ("98765432109876", "B-7_X.4/2", "301130", "30.11.2030"),
    ];

    for (gtin, lot, yymmdd, display) in cases {
        let raw = format!("01{gtin}17{yymmdd}10{lot}");
        let label = decode(&raw);
        assert_eq!(label.format, LabelFormat::Gs1, "raw: {raw}");
        assert_eq!(label.product_code, gtin);
        assert_eq!(label.lot_number, lot);
        assert_eq!(label.expiry_date, display);
    }
}

#[test]
fn gs1_group_separators_do_not_affect_the_result() {
    let plain = decode("011234567890123110LOTAB17171231");
    let separated = decode("0112345678901231\u{1d}10LOTAB\u{1d}17171231");
    assert_eq!(separated, plain);
    assert_eq!(separated.product_code, "12345678901231");
}

#[test]
fn gs1_without_gtin_is_unknown() {
    // A lot AI with no leading 01 never decodes.
    let label = decode("10LOTAB1217171231");
    assert_eq!(label.format, LabelFormat::Unknown);
    assert_eq!(label.product_code, "");

    // GS1 prefix with a truncated GTIN fails the same way.
    assert!(decode("0112345").is_unknown());
}

#[test]
fn decoding_is_idempotent() {
    for raw in [
        "00063PR00117**0011765983**31.08.2026",
        "0112345678901231171712311012345AB",
        "not a label",
        "",
    ] {
        assert_eq!(decode(raw), decode(raw), "raw: {raw}");
    }
}

#[test]
fn decoder_keeps_leading_zeros_for_callers_to_strip() {
    let label = decode("01000123456789051717123110LOT");
    assert_eq!(label.product_code, "00012345678905");
    assert_eq!(normalize::normalize_product_code(&label.product_code), "12345678905");
}
