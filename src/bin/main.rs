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
use csv::Writer;
use invoice_generator_rs::template::format_amount;
use invoice_generator_rs::{
    Clock, IdGenerator, Invoice, InvoiceLedger, InvoiceNumber, LinePrompter, Prompter,
    SessionError, Totals,
};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Invoice Generator - Build and print invoices interactively
///
/// Prompts for customer details and line items, applies a discount and tax
/// rate, and prints the invoice in a compact or detailed layout. Invoices
/// created in the session can be reviewed before exiting.
#[derive(Parser, Debug)]
#[command(name = "invoice-generator-rs")]
#[command(about = "An interactive console invoice builder", long_about = None)]
struct Args {
    /// Counter value for the first invoice number of the session
    #[arg(long, value_name = "N", default_value_t = IdGenerator::DEFAULT_SEED)]
    start_number: u32,

    /// Write a CSV summary of the session's invoices to FILE on exit
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut prompter = match LinePrompter::new() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error starting line editor: {}", e);
            process::exit(1);
        }
    };
    let mut ledger = InvoiceLedger::new(IdGenerator::new(args.start_number, Clock::System));

    if let Err(e) = run_session(&mut ledger, &mut prompter, &mut io::stdout()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Some(path) = &args.summary {
        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error creating summary '{}': {}", path.display(), e);
                process::exit(1);
            }
        };
        if let Err(e) = write_summary(&ledger, file) {
            eprintln!("Error writing summary: {}", e);
            process::exit(1);
        }
    }
}

/// Logs go to stderr so they never mix with the printed invoices.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Creates invoices until the user declines, then optionally lists them.
///
/// # Errors
///
/// Returns the first prompter or output failure, e.g. stdin closing.
fn run_session<P, W>(
    ledger: &mut InvoiceLedger,
    prompter: &mut P,
    out: &mut W,
) -> Result<(), SessionError>
where
    P: Prompter,
    W: Write,
{
    loop {
        ledger.create_invoice(prompter, out)?;
        if prompter.choice("Do you want to generate another invoice? (y/n): ")? != 'y' {
            break;
        }
    }

    if prompter.choice("Would you like to view all past invoices? (y/n): ")? == 'y' {
        ledger.list_all(out)?;
    }
    out.flush()?;
    Ok(())
}

/// One CSV row per invoice.
///
/// Columns: `invoice, customer, items, subtotal, discount, tax, grand_total`.
/// Amounts are left empty when the invoice totals are out of range.
#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    invoice: &'a InvoiceNumber,
    customer: &'a str,
    items: usize,
    subtotal: Option<String>,
    discount: Option<String>,
    tax: Option<String>,
    grand_total: Option<String>,
}

impl<'a> From<&'a Invoice> for SummaryRecord<'a> {
    fn from(invoice: &'a Invoice) -> Self {
        let totals: Option<Totals> = invoice.totals().ok();
        Self {
            invoice: invoice.number(),
            customer: invoice.customer_name(),
            items: invoice.items().len(),
            subtotal: totals.map(|t| format_amount(t.subtotal)),
            discount: totals.map(|t| format_amount(t.discount_amount)),
            tax: totals.map(|t| format_amount(t.tax_amount)),
            grand_total: totals.map(|t| format_amount(t.grand_total)),
        }
    }
}

/// Write the session summary as CSV.
///
/// # Example
///
/// ```csv
/// invoice,customer,items,subtotal,discount,tax,grand_total
/// INV2025112_1000,Ada,2,170.00,17.00,7.65,160.65
/// ```
///
/// # Errors
///
/// Returns a CSV error if writing fails.
fn write_summary<W: Write>(ledger: &InvoiceLedger, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    for invoice in ledger.invoices() {
        wtr.serialize(SummaryRecord::from(invoice))?;
    }

    wtr.flush()?;
    Ok(())
}
