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


//! Report templates.
//!
//! A template turns a list of line items plus a discount and tax rate into a
//! fixed-width text table followed by the totals block. Both layouts share
//! the arithmetic in [`RenderStrategy::render`]; they differ only in the
//! columns they print and how wide the totals labels are.
//!
//! # Totals
//!
//! | Line | Formula |
//! |------|---------|
//! | Subtotal | `Σ item.total()` |
//! | Discount | `subtotal * discount / 100` |
//! | Tax | `(subtotal - discount_amount) * tax / 100` |
//! | Grand Total | `subtotal - discount_amount + tax_amount` |

use crate::InvoiceError;
use crate::item::LineItem;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

const COMPACT_RULE: &str = "----------------------------------------------";
pub(crate) const DETAILED_RULE: &str =
    "-------------------------------------------------------------------------";

/// Shown in place of a line total that does not fit in a [`Decimal`].
const OVERFLOW_MARK: &str = "overflow";

/// Decimal places shown for every money amount and percentage.
pub const DISPLAY_PRECISION: u32 = 2;

/// Formats an amount to exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

fn line_total_text(item: &LineItem) -> String {
    item.total()
        .map(format_amount)
        .unwrap_or_else(|_| OVERFLOW_MARK.to_string())
}

/// `amount * percent / 100`.
fn percent_of(amount: Decimal, percent: Decimal) -> Result<Decimal, InvoiceError> {
    amount
        .checked_mul(percent)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(InvoiceError::AmountOverflow)
}

/// Invoice totals at full precision. Rounding happens only when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
}

impl Totals {
    /// Applies the discount, then taxes the discounted amount.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::AmountOverflow`] if any intermediate amount
    /// leaves the range of [`Decimal`].
    pub fn from_subtotal(
        subtotal: Decimal,
        discount_percent: Decimal,
        tax_percent: Decimal,
    ) -> Result<Self, InvoiceError> {
        let discount_amount = percent_of(subtotal, discount_percent)?;
        let discounted = subtotal
            .checked_sub(discount_amount)
            .ok_or(InvoiceError::AmountOverflow)?;
        let tax_amount = percent_of(discounted, tax_percent)?;
        let grand_total = discounted
            .checked_add(tax_amount)
            .ok_or(InvoiceError::AmountOverflow)?;
        Ok(Self {
            subtotal,
            discount_amount,
            tax_amount,
            grand_total,
        })
    }

    pub fn compute(
        items: &[LineItem],
        discount_percent: Decimal,
        tax_percent: Decimal,
    ) -> Result<Self, InvoiceError> {
        let subtotal = items.iter().try_fold(Decimal::ZERO, |sum, item| {
            sum.checked_add(item.total()?)
                .ok_or(InvoiceError::AmountOverflow)
        })?;
        Self::from_subtotal(subtotal, discount_percent, tax_percent)
    }
}

/// A textual invoice layout.
///
/// Implementors only describe their columns; [`render`](Self::render) is
/// shared so every layout yields the same [`Totals`] for the same input.
pub trait RenderStrategy {
    /// Dash rule printed above and below the item rows.
    fn rule(&self) -> &'static str;

    /// Width the totals labels are right-aligned to.
    fn label_width(&self) -> usize;

    fn write_header(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Writes one item row. A line total out of range prints as `overflow`.
    fn write_row(&self, item: &LineItem, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Writes the item table and totals block, returning the totals.
    ///
    /// The subtotal is accumulated while the rows are written.
    ///
    /// # Errors
    ///
    /// - [`InvoiceError::AmountOverflow`] - a total is out of range. Every row
    ///   and the closing rule are written; the totals block is not.
    /// - [`InvoiceError::Render`] - the sink rejected a write.
    fn render(
        &self,
        items: &[LineItem],
        discount_percent: Decimal,
        tax_percent: Decimal,
        out: &mut dyn fmt::Write,
    ) -> Result<Totals, InvoiceError> {
        self.write_header(out)?;
        writeln!(out, "{}", self.rule())?;

        let mut subtotal = Some(Decimal::ZERO);
        for item in items {
            self.write_row(item, out)?;
            subtotal = subtotal
                .zip(item.total().ok())
                .and_then(|(sum, total)| sum.checked_add(total));
        }
        writeln!(out, "{}", self.rule())?;

        let subtotal = subtotal.ok_or(InvoiceError::AmountOverflow)?;
        let totals = Totals::from_subtotal(subtotal, discount_percent, tax_percent)?;
        let width = self.label_width();
        writeln!(out, "{:>width$}{}", "Subtotal: ", format_amount(totals.subtotal))?;
        writeln!(
            out,
            "{:>width$}{}%): -{}",
            "Discount (",
            format_amount(discount_percent),
            format_amount(totals.discount_amount)
        )?;
        writeln!(
            out,
            "{:>width$}{}%): +{}",
            "Tax (",
            format_amount(tax_percent),
            format_amount(totals.tax_amount)
        )?;
        writeln!(out, "{:>width$}{}", "Grand Total: ", format_amount(totals.grand_total))?;

        Ok(totals)
    }
}

/// The available layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// Item, quantity and line total.
    Compact,
    /// Item, category, quantity, unit price and line total.
    Detailed,
}

impl Template {
    /// Maps a menu selection (`1` or `2`) to a template.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Compact),
            2 => Some(Self::Detailed),
            _ => None,
        }
    }

    /// Name shown in the selection menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Compact => "Simple Template",
            Self::Detailed => "Detailed Template",
        }
    }

    /// Renders into a fresh string.
    ///
    /// The text is returned even when the totals overflow, so callers can
    /// still show the item rows.
    pub fn render_to_string(
        &self,
        items: &[LineItem],
        discount_percent: Decimal,
        tax_percent: Decimal,
    ) -> (String, Result<Totals, InvoiceError>) {
        let mut out = String::new();
        let totals = self.render(items, discount_percent, tax_percent, &mut out);
        (out, totals)
    }
}

impl RenderStrategy for Template {
    fn rule(&self) -> &'static str {
        match self {
            Self::Compact => COMPACT_RULE,
            Self::Detailed => DETAILED_RULE,
        }
    }

    fn label_width(&self) -> usize {
        match self {
            Self::Compact => 30,
            Self::Detailed => 40,
        }
    }

    fn write_header(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Self::Compact => writeln!(out, "{:<20}{:<10}{:<10}", "Item", "Qty", "Total"),
            Self::Detailed => writeln!(
                out,
                "{:<20}{:<10}{:<10}{:<10}{:<10}",
                "Item", "Category", "Qty", "Price", "Total"
            ),
        }
    }

    fn write_row(&self, item: &LineItem, out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Self::Compact => writeln!(
                out,
                "{:<20}{:<10}{:<10}",
                item.name(),
                item.quantity(),
                line_total_text(item)
            ),
            Self::Detailed => writeln!(
                out,
                "{:<20}{:<10}{:<10}{:<10}{:<10}",
                item.name(),
                item.category(),
                item.quantity(),
                format_amount(item.unit_price()),
                line_total_text(item)
            ),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
