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


//! Line items.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use invoice_generator_rs::LineItem;
//!
//! let pen = LineItem::new("Pen", "Office", 10, dec!(2.00));
//! assert_eq!(pen.total(), Ok(dec!(20.00)));
//! ```

use crate::InvoiceError;
use rust_decimal::Decimal;

/// Returns `quantity * unit_price` at full precision.
///
/// # Errors
///
/// Returns [`InvoiceError::AmountOverflow`] when the product does not fit in
/// a [`Decimal`].
pub fn line_total(quantity: i64, unit_price: Decimal) -> Result<Decimal, InvoiceError> {
    Decimal::from(quantity)
        .checked_mul(unit_price)
        .ok_or(InvoiceError::AmountOverflow)
}

/// One purchased product or service on an invoice.
///
/// Quantity and price are not range checked; negative values are accepted
/// and flow through the totals unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    name: String,
    category: String,
    quantity: i64,
    unit_price: Decimal,
}

impl LineItem {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            unit_price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// See [`line_total`].
    pub fn total(&self) -> Result<Decimal, InvoiceError> {
        line_total(self.quantity, self.unit_price)
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn set_price(&mut self, unit_price: Decimal) {
        self.unit_price = unit_price;
    }
}
