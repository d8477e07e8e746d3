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


//! Invoices.
//!
//! An [`Invoice`] owns its line items, customer details, discount and tax
//! rates, and at most one active [`Template`]. Item lookups are by exact,
//! case-sensitive name and always act on the first match.
//!
//! # Example
//!
//! ```
//! use invoice_generator_rs::{Invoice, InvoiceNumber, LineItem, Template};
//! use rust_decimal_macros::dec;
//!
//! let mut invoice = Invoice::new(InvoiceNumber("INV1".into()), "1/2/2025 10:00");
//! invoice.add_item(LineItem::new("Pen", "Office", 10, dec!(2.00)));
//! invoice.add_item(LineItem::new("Desk", "Furniture", 1, dec!(150.00)));
//! invoice.set_discount(dec!(10));
//! invoice.set_tax_rate(dec!(5));
//! invoice.set_template(Template::Compact);
//!
//! assert_eq!(invoice.totals().unwrap().grand_total, dec!(160.65));
//! assert!(invoice.report().contains("Grand Total: 160.65"));
//! ```

use crate::InvoiceError;
use crate::base::InvoiceNumber;
use crate::item::LineItem;
use crate::template::{DETAILED_RULE, RenderStrategy, Template, Totals};
use rust_decimal::Decimal;
use std::fmt;
use tracing::debug;

const BANNER: &str = "------------------- Invoice -------------------";
const HEADER_RULE: &str = "------------------------------------------------";
const NO_TEMPLATE_NOTICE: &str = "No template selected!";
const OVERFLOW_NOTICE: &str = "Totals are too large to display!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    number: InvoiceNumber,
    issued_at: String,
    customer_name: String,
    customer_address: String,
    items: Vec<LineItem>,
    discount_percent: Decimal,
    tax_percent: Decimal,
    template: Option<Template>,
}

impl Invoice {
    /// Creates an empty invoice with no template, zero discount and zero tax.
    pub fn new(number: InvoiceNumber, issued_at: impl Into<String>) -> Self {
        Self {
            number,
            issued_at: issued_at.into(),
            customer_name: String::new(),
            customer_address: String::new(),
            items: Vec::new(),
            discount_percent: Decimal::ZERO,
            tax_percent: Decimal::ZERO,
            template: None,
        }
    }

    pub fn number(&self) -> &InvoiceNumber {
        &self.number
    }

    pub fn issued_at(&self) -> &str {
        &self.issued_at
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_address(&self) -> &str {
        &self.customer_address
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    pub fn tax_percent(&self) -> Decimal {
        self.tax_percent
    }

    /// The active template, if one has been chosen.
    pub fn template(&self) -> Option<Template> {
        self.template
    }

    pub fn add_item(&mut self, item: LineItem) {
        debug!(invoice = %self.number, item = item.name(), "adding item");
        self.items.push(item);
    }

    /// Removes the first item named `name` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::ItemNotFound`] and leaves the items untouched
    /// if no item has that name.
    pub fn delete_item(&mut self, name: &str) -> Result<LineItem, InvoiceError> {
        let index = self
            .items
            .iter()
            .position(|item| item.name() == name)
            .ok_or_else(|| InvoiceError::ItemNotFound(name.to_string()))?;
        debug!(invoice = %self.number, item = name, "removing item");
        Ok(self.items.remove(index))
    }

    /// Overwrites quantity and unit price of the first item named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::ItemNotFound`] if no item has that name.
    pub fn modify_item(
        &mut self,
        name: &str,
        quantity: i64,
        unit_price: Decimal,
    ) -> Result<(), InvoiceError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.name() == name)
            .ok_or_else(|| InvoiceError::ItemNotFound(name.to_string()))?;
        item.set_quantity(quantity);
        item.set_price(unit_price);
        debug!(invoice = %self.number, item = name, quantity, %unit_price, "modified item");
        Ok(())
    }

    pub fn set_customer_info(&mut self, name: impl Into<String>, address: impl Into<String>) {
        self.customer_name = name.into();
        self.customer_address = address.into();
    }

    pub fn set_discount(&mut self, discount_percent: Decimal) {
        self.discount_percent = discount_percent;
    }

    pub fn set_tax_rate(&mut self, tax_percent: Decimal) {
        self.tax_percent = tax_percent;
    }

    pub fn set_template(&mut self, template: Template) {
        self.template = Some(template);
    }

    /// Replaces the active template with the one selected by `choice`.
    ///
    /// An unknown selection clears the template; the next report then
    /// prints the "no template" notice.
    pub fn choose_template(&mut self, choice: i64) -> Option<Template> {
        self.template = Template::from_choice(choice);
        debug!(invoice = %self.number, choice, template = ?self.template, "template chosen");
        self.template
    }

    /// Totals for the current items, discount and tax.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::AmountOverflow`] if any amount is out of range.
    pub fn totals(&self) -> Result<Totals, InvoiceError> {
        Totals::compute(&self.items, self.discount_percent, self.tax_percent)
    }

    /// Renders the item table and totals through the active template.
    ///
    /// # Errors
    ///
    /// - [`InvoiceError::NoTemplateSelected`] - no template is active.
    /// - [`InvoiceError::AmountOverflow`] - a total is out of range.
    pub fn render_items(&self) -> Result<(String, Totals), InvoiceError> {
        let template = self.template.ok_or(InvoiceError::NoTemplateSelected)?;
        let (text, totals) =
            template.render_to_string(&self.items, self.discount_percent, self.tax_percent);
        Ok((text, totals?))
    }

    /// Writes the full printed invoice: banner, header and either the
    /// rendered items or the "no template" notice. Totals out of range are
    /// replaced by a notice after the item rows.
    pub fn write_report(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out)?;
        writeln!(out, "{BANNER}")?;
        writeln!(out, "Invoice Number: {}", self.number)?;
        writeln!(out, "Date: {}", self.issued_at)?;
        writeln!(out, "Customer: {}", self.customer_name)?;
        writeln!(out, "Address: {}", self.customer_address)?;
        writeln!(out, "{HEADER_RULE}")?;

        match self.template {
            Some(template) => {
                match template.render(&self.items, self.discount_percent, self.tax_percent, out) {
                    Ok(_) => {}
                    Err(InvoiceError::AmountOverflow) => writeln!(out, "{OVERFLOW_NOTICE}")?,
                    Err(_) => return Err(fmt::Error),
                }
            }
            None => writeln!(out, "{NO_TEMPLATE_NOTICE}")?,
        }
        Ok(())
    }

    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = self.write_report(&mut out);
        out
    }

    /// Summary used when reviewing the session's invoices.
    ///
    /// Always uses the detailed column layout and lists rows only (no
    /// totals). The item table is omitted entirely when no template was
    /// ever chosen.
    pub fn details_text(&self) -> String {
        let mut out = String::new();
        let _ = self.write_details(&mut out);
        out
    }

    fn write_details(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "Invoice Number: {}", self.number)?;
        writeln!(out, "Date: {}", self.issued_at)?;
        writeln!(out, "Customer: {}", self.customer_name)?;
        writeln!(out, "Address: {}", self.customer_address)?;
        writeln!(out, "Items in Invoice:")?;

        if self.template.is_some() {
            let layout = Template::Detailed;
            layout.write_header(out)?;
            writeln!(out, "{DETAILED_RULE}")?;
            for item in &self.items {
                layout.write_row(item, out)?;
            }
            writeln!(out, "{DETAILED_RULE}")?;
        }
        Ok(())
    }
}
