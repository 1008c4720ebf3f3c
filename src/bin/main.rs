// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;
use thiserror::Error;
use ticket_service_rs::{
    ParseTicketTypeError, PriceTable, PurchasePolicy, RecordingGateway, TicketService,
    TicketType, TicketTypeRequest,
};
use tracing_subscriber::EnvFilter;

/// Ticket Service - Purchase a batch of tickets from a CSV file
///
/// Reads ticket requests from a CSV file, validates and prices them, and
/// writes the resulting payment and seat reservation calls to stdout.
#[derive(Parser, Debug)]
#[command(name = "ticket-service-rs")]
#[command(about = "Validates and prices a batch of ticket requests", long_about = None)]
struct Args {
    /// Path to CSV file with ticket requests
    ///
    /// Expected format: type,count
    /// Example: cargo run -- tickets.csv --account-id 1 > calls.csv
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Account charged for the purchase
    #[arg(long, allow_negative_numbers = true)]
    account_id: i64,

    /// Unit price of an adult ticket
    #[arg(long, default_value_t = 20)]
    adult_price: u64,

    /// Unit price of a child ticket
    #[arg(long, default_value_t = 10)]
    child_price: u64,

    /// Maximum number of tickets in one purchase
    #[arg(long, default_value_t = 20)]
    max_tickets: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let policy = PurchasePolicy::default()
        .with_prices(PriceTable::new(args.child_price, args.adult_price))
        .with_max_tickets(args.max_tickets);

    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let requests = match read_requests(BufReader::new(file)) {
        Ok(requests) => requests,
        Err(e) => {
            eprintln!("Error reading ticket requests: {}", e);
            process::exit(1);
        }
    };

    let gateway = RecordingGateway::new();
    let service = match TicketService::with_policy(policy, &gateway, &gateway) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Invalid policy: {}", e);
            process::exit(2);
        }
    };

    if let Err(e) = service.purchase_tickets(args.account_id, &requests) {
        eprintln!("Invalid purchase: {}", e);
        process::exit(1);
    }

    if let Err(e) = write_calls(&gateway, std::io::stdout()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Failure to turn CSV input into ticket requests.
#[derive(Debug, Error)]
enum RequestsError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: {source}")]
    UnknownType {
        line: u64,
        #[source]
        source: ParseTicketTypeError,
    },
}

/// Raw CSV record matching the input format.
///
/// Fields: `type, count`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "type")]
    ticket_type: String,
    count: u32,
}

/// Reads ticket requests from a CSV reader.
///
/// Any malformed row (unknown type, negative or missing count) rejects the
/// whole batch; a purchase is never made from a partial list.
///
/// # CSV Format
///
/// ```csv
/// type,count
/// ADULT,5
/// child,1
/// infant,2
/// ```
fn read_requests<R: Read>(reader: R) -> Result<Vec<TicketTypeRequest>, RequestsError> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(reader);

    let mut requests = Vec::new();
    for (index, result) in rdr.deserialize::<CsvRecord>().enumerate() {
        let record = result?;
        let ticket_type = record
            .ticket_type
            .parse::<TicketType>()
            .map_err(|source| RequestsError::UnknownType {
                // Header occupies line 1.
                line: index as u64 + 2,
                source,
            })?;
        requests.push(TicketTypeRequest::new(ticket_type, record.count));
    }

    Ok(requests)
}

/// Writes the recorded collaborator calls as CSV.
///
/// Columns: `kind, account_id, value`
fn write_calls<W: Write>(gateway: &RecordingGateway, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);
    for call in gateway.calls() {
        wtr.serialize(call)?;
    }
    wtr.flush()?;
    Ok(())
}
