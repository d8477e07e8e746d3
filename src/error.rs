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


//! Error types for invoice editing and interactive sessions.

use thiserror::Error;

/// Soft invoice errors.
///
/// None of these are fatal: the invoice is left unchanged and the caller
/// decides how to report the outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvoiceError {
    /// No line item with this name exists on the invoice
    #[error("item \"{0}\" not found in the invoice")]
    ItemNotFound(String),

    /// A report was requested before a template was chosen
    #[error("no template selected")]
    NoTemplateSelected,

    /// A line total or invoice total exceeds the range of `Decimal`
    #[error("amount too large to total")]
    AmountOverflow,

    /// The report sink rejected a write
    #[error("failed to write report")]
    Render(#[from] std::fmt::Error),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Input stream closed while a prompt was waiting for an answer
    #[error("unexpected end of input")]
    EndOfInput,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
