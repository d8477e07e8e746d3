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


//! Session ledger.
//!
//! The [`InvoiceLedger`] holds every invoice finished during one run of the
//! program, in creation order. It also drives the interactive workflow that
//! builds a single invoice from a [`Prompter`].
//!
//! # Workflow
//!
//! 1. Customer name and address.
//! 2. Line items, repeated while the user answers `y`.
//! 3. One optional delete (`d`) or modify (`m`) action.
//! 4. Discount and tax percentages.
//! 5. Template selection.
//! 6. The report is printed and the invoice appended.

use crate::base::{IdGenerator, InvoiceNumber};
use crate::console::Prompter;
use crate::invoice::Invoice;
use crate::item::{LineItem, line_total};
use crate::template::Template;
use crate::{InvoiceError, SessionError};
use std::io::Write;
use tracing::{debug, warn};

const TEMPLATE_MENU: &str = "Select Invoice Template:\n";

/// Append-only collection of the invoices created in this session.
#[derive(Debug, Default)]
pub struct InvoiceLedger {
    invoices: Vec<Invoice>,
    ids: IdGenerator,
}

impl InvoiceLedger {
    pub fn new(ids: IdGenerator) -> Self {
        Self {
            invoices: Vec::new(),
            ids,
        }
    }

    /// Creates an empty invoice stamped with the next number and the
    /// current time. The invoice is not stored.
    pub fn new_invoice(&mut self) -> Invoice {
        let number = self.ids.next_number();
        Invoice::new(number, self.ids.timestamp())
    }

    /// Appends a finished invoice.
    pub fn push(&mut self, invoice: Invoice) -> &Invoice {
        debug!(invoice = %invoice.number(), items = invoice.items().len(), "invoice stored");
        self.invoices.push(invoice);
        &self.invoices[self.invoices.len() - 1]
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn get(&self, number: &InvoiceNumber) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.number() == number)
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// Builds one invoice interactively, prints its report to `out` and
    /// stores it.
    ///
    /// # Errors
    ///
    /// Fails only when the prompter or `out` fails (e.g. end of input).
    /// A missing item, an item whose total is out of range or an invalid
    /// template choice is reported to the user and the session carries on.
    /// An out-of-range item is asked for again.
    pub fn create_invoice<P, W>(
        &mut self,
        prompter: &mut P,
        out: &mut W,
    ) -> Result<&Invoice, SessionError>
    where
        P: Prompter + ?Sized,
        W: Write + ?Sized,
    {
        let mut invoice = self.new_invoice();

        let name = prompter.text("Enter customer name: ")?;
        let address = prompter.text("Enter customer address: ")?;
        invoice.set_customer_info(name, address);

        loop {
            let item_name = prompter.text("Enter item name: ")?;
            let category = prompter.text("Enter item category: ")?;
            let quantity = prompter.integer("Enter quantity: ")?;
            let price = prompter.decimal("Enter price: ")?;
            if let Err(error) = line_total(quantity, price) {
                warn!(%error, item = %item_name, quantity, %price, "item rejected");
                writeln!(
                    out,
                    "Item \"{item_name}\" is too large to total. Please enter it again."
                )?;
                continue;
            }
            invoice.add_item(LineItem::new(item_name, category, quantity, price));

            if prompter.choice("Do you want to add another item? (y/n): ")? != 'y' {
                break;
            }
        }

        match prompter.choice("Do you want to delete or modify an item? (d/m/n): ")? {
            'd' => {
                let target = prompter.text("Enter item name to delete: ")?;
                match invoice.delete_item(&target) {
                    Ok(_) => writeln!(out, "Item \"{target}\" has been removed from the invoice.")?,
                    Err(e) => report_skipped(out, &e, &target)?,
                }
            }
            'm' => {
                let target = prompter.text("Enter item name to modify: ")?;
                let quantity = prompter.integer("Enter new quantity: ")?;
                let price = prompter.decimal("Enter new price: ")?;
                let result = line_total(quantity, price)
                    .and_then(|_| invoice.modify_item(&target, quantity, price));
                match result {
                    Ok(()) => writeln!(out, "Item \"{target}\" has been updated.")?,
                    Err(e) => report_skipped(out, &e, &target)?,
                }
            }
            _ => {}
        }

        invoice.set_discount(prompter.decimal("Enter discount percentage (or 0 for none): ")?);
        invoice.set_tax_rate(prompter.decimal("Enter tax rate percentage (or 0 for none): ")?);

        let choice = prompter.integer(&template_prompt())?;
        if invoice.choose_template(choice).is_none() {
            warn!(invoice = %invoice.number(), choice, "unknown template selection");
        }

        write!(out, "{}", invoice.report())?;
        out.flush()?;

        Ok(self.push(invoice))
    }

    /// Writes the review summary of every stored invoice, oldest first.
    pub fn list_all<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--------- All Generated Invoices ---------")?;
        for invoice in &self.invoices {
            writeln!(out, "{}", invoice.details_text())?;
        }
        Ok(())
    }
}

fn template_prompt() -> String {
    let mut prompt = String::from(TEMPLATE_MENU);
    for (choice, template) in [(1, Template::Compact), (2, Template::Detailed)] {
        prompt.push_str(&format!("{choice}. {template}\n"));
    }
    prompt.push_str("Enter your choice (1 or 2): ");
    prompt
}

fn report_skipped<W: Write + ?Sized>(
    out: &mut W,
    error: &InvoiceError,
    target: &str,
) -> std::io::Result<()> {
    warn!(%error, "item edit skipped");
    match error {
        InvoiceError::AmountOverflow => {
            writeln!(out, "Item \"{target}\" was not updated: amount too large to total.")
        }
        _ => writeln!(out, "Item \"{target}\" not found in the invoice."),
    }
}
