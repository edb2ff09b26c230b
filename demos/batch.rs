// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  batch.rs - Bulk decoding demo for stock label scan exports.
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

use std::error::Error;
use std::fs::File;
use std::io;

use clap::Parser;

use stocklabel::decoder::{self, DecodedLabel};
use stocklabel::normalize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The scan export file to read (one raw scan per record, first column).
    file: String,
}

fn main() {
    let args = Args::parse();

    let labels = match decode_file(&args.file) {
        Ok(labels) => labels,
        Err(error) => {
            eprintln!("Error reading file {:?}: {:?}", &args.file, error);
            return;
        }
    };

    if let Err(error) = write_report(&labels) {
        eprintln!("Error writing report: {:?}", error);
    }
}

fn decode_file(path: &str) -> Result<Vec<DecodedLabel>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(file);

    let mut labels = Vec::new();
    for result in reader.records() {
        let record = result?;
        let Some(raw) = record.get(0) else {
            continue;
        };
        labels.push(decoder::decode(raw));
    }

    Ok(labels)
}

fn write_report(labels: &[DecodedLabel]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["product_code", "lookup_code", "lot_number", "expiry_date", "format"])?;

    for label in labels {
        // Lookup normalization is a caller concern; the decoder leaves codes
        // as extracted.
        let lookup_code = normalize::normalize_product_code(&label.product_code);
        writer.write_record([
            label.product_code.as_str(),
            lookup_code.as_str(),
            label.lot_number.as_str(),
            label.expiry_date.as_str(),
            label.format.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
