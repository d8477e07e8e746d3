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


//! Invoice identifiers and the number/timestamp source.
//!
//! Invoice numbers come from an explicit [`IdGenerator`] owned by the ledger
//! rather than from process-wide state, so a session seeded with the same
//! counter and a [`Clock::Fixed`] clock always produces the same numbers.

use chrono::{Datelike, Local, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// Identifier printed on an invoice, e.g. `INV2025314_1000`.
///
/// Treated as an opaque string: stored and echoed verbatim, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InvoiceNumber(pub String);

impl InvoiceNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of the wall-clock time stamped on new invoices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Local system time.
    System,
    /// A frozen instant, for reproducible sessions.
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::System => Local::now().naive_local(),
            Self::Fixed(at) => *at,
        }
    }
}

/// Sequential invoice number and timestamp generator.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u32,
    clock: Clock,
}

impl IdGenerator {
    /// Counter value used for the first invoice of a session unless configured.
    pub const DEFAULT_SEED: u32 = 1000;

    pub fn new(seed: u32, clock: Clock) -> Self {
        Self { next: seed, clock }
    }

    /// Returns the next invoice number and advances the counter.
    ///
    /// Format is `INV{year}{month}{day}_{counter}` with month and day
    /// unpadded.
    pub fn next_number(&mut self) -> InvoiceNumber {
        let today = self.clock.now();
        let counter = self.next;
        self.next = self.next.wrapping_add(1);
        InvoiceNumber(format!(
            "INV{}{}{}_{}",
            today.year(),
            today.month(),
            today.day(),
            counter
        ))
    }

    /// Display timestamp, `{month}/{day}/{year} {HH}:{MM}`.
    pub fn timestamp(&self) -> String {
        self.clock.now().format("%-m/%-d/%Y %H:%M").to_string()
    }

    /// Counter value the next invoice will receive.
    pub fn peek(&self) -> u32 {
        self.next
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED, Clock::System)
    }
}
