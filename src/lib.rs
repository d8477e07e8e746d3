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


//! # Invoice Generator
//!
//! This library builds and prints invoices: line items with a discount and
//! tax rate applied, rendered through a compact or detailed text layout, and
//! collected in a per-session ledger.
//!
//! ## Core Components
//!
//! - [`LineItem`]: A purchased item that computes its own line total
//! - [`Template`]: The compact and detailed report layouts ([`RenderStrategy`])
//! - [`Invoice`]: Items, customer details, discount/tax and the chosen template
//! - [`InvoiceLedger`]: The session's invoices and the interactive workflow
//! - [`IdGenerator`]: Sequential invoice numbers and timestamps
//!
//! ## Example
//!
//! ```
//! use invoice_generator_rs::{Clock, IdGenerator, InvoiceLedger, LineItem, Template};
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = InvoiceLedger::new(IdGenerator::new(1000, Clock::System));
//!
//! let mut invoice = ledger.new_invoice();
//! invoice.set_customer_info("Ada Lovelace", "12 Analytical Way");
//! invoice.add_item(LineItem::new("Pen", "Office", 10, dec!(2.00)));
//! invoice.add_item(LineItem::new("Desk", "Furniture", 1, dec!(150.00)));
//! invoice.set_discount(dec!(10));
//! invoice.set_tax_rate(dec!(5));
//! invoice.set_template(Template::Compact);
//!
//! let stored = ledger.push(invoice);
//! assert_eq!(stored.totals().unwrap().grand_total, dec!(160.65));
//! ```
//!
//! ## Arithmetic
//!
//! All amounts are [`rust_decimal::Decimal`] and kept at full precision.
//! Only the printed text is rounded, to two decimal places.

mod base;
pub mod console;
pub mod error;
mod invoice;
mod item;
mod ledger;
pub mod template;

pub use base::{Clock, IdGenerator, InvoiceNumber};
pub use console::{ConsolePrompter, LinePrompter, Prompter};
pub use error::{InvoiceError, SessionError};
pub use invoice::Invoice;
pub use item::{LineItem, line_total};
pub use ledger::InvoiceLedger;
pub use template::{RenderStrategy, Template, Totals};
