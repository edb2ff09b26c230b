// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  decode.rs - Single-scan decoding demo for stock labels.
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

use clap::Parser;

use stocklabel::decoder;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The raw scanned text to decode.
    scan: String,
}

fn main() {
    let args = Args::parse();

    let label = decoder::decode(&args.scan);
    if label.is_unknown() {
        eprintln!("Unrecognized barcode format: {:?}", &args.scan);
        return;
    }

    match serde_json::to_string_pretty(&label) {
        Ok(json) => println!("{}", json),
        Err(error) => eprintln!("Error serializing label: {:?}", error),
    }
}
