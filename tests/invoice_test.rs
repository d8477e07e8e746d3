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


//! Invoice public API integration tests.

use invoice_generator_rs::{
    Invoice, InvoiceError, InvoiceNumber, LineItem, RenderStrategy, Template, Totals,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// === Helper Functions ===

fn make_invoice() -> Invoice {
    let mut invoice = Invoice::new(InvoiceNumber("INV2025101_1000".to_string()), "10/1/2025 09:00");
    invoice.set_customer_info("Grace Hopper", "7 Compiler Court");
    invoice
}

fn pen() -> LineItem {
    LineItem::new("Pen", "Office", 10, dec!(2.00))
}

fn desk() -> LineItem {
    LineItem::new("Desk", "Furniture", 1, dec!(150.00))
}

fn names(invoice: &Invoice) -> Vec<&str> {
    invoice.items().iter().map(LineItem::name).collect()
}

// === Item Editing ===

#[test]
fn add_item_keeps_insertion_order_and_duplicates() {
    let mut invoice = make_invoice();
    invoice.add_item(pen());
    invoice.add_item(desk());
    invoice.add_item(pen());
    assert_eq!(names(&invoice), vec!["Pen", "Desk", "Pen"]);
}

#[test]
fn delete_missing_item_leaves_items_unchanged() {
    let mut invoice = make_invoice();
    invoice.add_item(pen());
    invoice.add_item(desk());

    let result = invoice.delete_item("Chair");
    assert_eq!(result, Err(InvoiceError::ItemNotFound("Chair".to_string())));
    assert_eq!(names(&invoice), vec!["Pen", "Desk"]);
}

#[test]
fn delete_removes_only_first_duplicate() {
    let mut invoice = make_invoice();
    invoice.add_item(LineItem::new("Pen", "Office", 1, dec!(1.00)));
    invoice.add_item(desk());
    invoice.add_item(LineItem::new("Pen", "Office", 2, dec!(1.00)));

    let removed = invoice.delete_item("Pen").unwrap();
    assert_eq!(removed.quantity(), 1);
    assert_eq!(names(&invoice), vec!["Desk", "Pen"]);
    assert_eq!(invoice.items()[1].quantity(), 2);
}

#[test]
fn delete_is_case_sensitive() {
    let mut invoice = make_invoice();
    invoice.add_item(pen());
    assert!(invoice.delete_item("pen").is_err());
    assert_eq!(invoice.items().len(), 1);
}

#[test]
fn modify_updates_only_the_matching_item() {
    let mut invoice = make_invoice();
    invoice.add_item(pen());
    invoice.add_item(desk());

    invoice.modify_item("Pen", 3, dec!(4.25)).unwrap();

    assert_eq!(invoice.items()[0].quantity(), 3);
    assert_eq!(invoice.items()[0].unit_price(), dec!(4.25));
    assert_eq!(invoice.items()[0].total(), Ok(dec!(12.75)));
    assert_eq!(invoice.items()[1], desk());
}

#[test]
fn modify_missing_item_has_no_effect() {
    let mut invoice = make_invoice();
    invoice.add_item(pen());

    let result = invoice.modify_item("Chair", 3, dec!(4.25));
    assert_eq!(result, Err(InvoiceError::ItemNotFound("Chair".to_string())));
    assert_eq!(invoice.items()[0], pen());
}

// === Templates ===

#[test]
fn choosing_template_replaces_previous() {
    let mut invoice = make_invoice();
    assert_eq!(invoice.choose_template(1), Some(Template::Compact));
    assert_eq!(invoice.choose_template(2), Some(Template::Detailed));
    assert_eq!(invoice.template(), Some(Template::Detailed));
}

#[test]
fn invalid_template_choice_clears_template() {
    let mut invoice = make_invoice();
    invoice.add_item(pen());
    invoice.choose_template(1);

    assert_eq!(invoice.choose_template(9), None);
    assert_eq!(invoice.template(), None);

    let report = invoice.report();
    assert!(report.contains("No template selected!"));
    assert!(!report.contains("Subtotal"));
}

// === Reports ===

#[test]
fn compact_scenario_totals() {
    let mut invoice = make_invoice();
    invoice.add_item(pen());
    invoice.add_item(desk());
    invoice.set_discount(dec!(10));
    invoice.set_tax_rate(dec!(5));
    invoice.set_template(Template::Compact);

    let (text, totals) = invoice.render_items().unwrap();
    assert_eq!(totals.subtotal, dec!(170.00));
    assert_eq!(totals.discount_amount, dec!(17.00));
    assert_eq!(totals.tax_amount, dec!(7.65));
    assert_eq!(totals.grand_total, dec!(160.65));

    assert!(text.contains("Subtotal: 170.00"));
    assert!(text.contains("Discount (10.00%): -17.00"));
    assert!(text.contains("Tax (5.00%): +7.65"));
    assert!(text.contains("Grand Total: 160.65"));
}

#[test]
fn report_contains_header_and_table() {
    let mut invoice = make_invoice();
    invoice.add_item(desk());
    invoice.set_template(Template::Detailed);

    let report = invoice.report();
    assert!(report.contains("Invoice Number: INV2025101_1000\n"));
    assert!(report.contains("Date: 10/1/2025 09:00\n"));
    assert!(report.contains("Customer: Grace Hopper\n"));
    assert!(report.contains("Address: 7 Compiler Court\n"));
    assert!(report.contains("Furniture"));
}

#[test]
fn negative_values_propagate_unclamped() {
    let mut invoice = make_invoice();
    invoice.add_item(LineItem::new("Refund", "Credit", -2, dec!(10.00)));
    invoice.set_discount(dec!(-10));
    invoice.set_tax_rate(dec!(150));

    let totals = invoice.totals().unwrap();
    assert_eq!(totals.subtotal, dec!(-20.00));
    assert_eq!(totals.discount_amount, dec!(2.00));
    assert_eq!(totals.tax_amount, dec!(-33.00));
    assert_eq!(totals.grand_total, dec!(-55.00));
}

#[test]
fn empty_invoice_renders_zero_totals() {
    let mut invoice = make_invoice();
    invoice.set_discount(dec!(25));
    invoice.set_tax_rate(dec!(8));
    invoice.set_template(Template::Detailed);

    let (text, totals) = invoice.render_items().unwrap();
    assert_eq!(totals, Totals::default());
    assert!(text.starts_with("Item"));
    assert!(text.contains("Subtotal: 0.00"));
    assert!(text.contains("Grand Total: 0.00"));
}

#[test]
fn strategies_render_through_trait_object() {
    let items = vec![pen(), desk()];
    let strategies: [&dyn RenderStrategy; 2] = [&Template::Compact, &Template::Detailed];

    let mut results = Vec::new();
    for strategy in strategies {
        let mut out = String::new();
        results.push(strategy.render(&items, dec!(10), dec!(5), &mut out).unwrap());
        assert!(out.contains("Grand Total: 160.65"));
    }
    assert_eq!(results[0], results[1]);
    assert_eq!(results[0].grand_total, dec!(160.65));
}

#[test]
fn totals_ignore_template_choice() {
    let mut invoice = make_invoice();
    invoice.add_item(pen());
    let before = invoice.totals().unwrap();
    invoice.set_template(Template::Detailed);
    assert_eq!(invoice.totals(), Ok(before));
    assert_eq!(before.subtotal, Decimal::from(20));
}

// === Overflow ===

#[test]
fn oversized_amounts_are_soft_errors() {
    let mut invoice = make_invoice();
    let quantity = 1_000_000_000_000_000_000;
    invoice.add_item(LineItem::new("Ship", "Freight", quantity, dec!(100000000000)));
    invoice.set_template(Template::Compact);

    assert_eq!(invoice.items()[0].total(), Err(InvoiceError::AmountOverflow));
    assert_eq!(invoice.totals(), Err(InvoiceError::AmountOverflow));
    assert_eq!(invoice.render_items(), Err(InvoiceError::AmountOverflow));

    let report = invoice.report();
    assert!(report.contains("overflow"));
    assert!(report.contains("Totals are too large to display!"));

    // Shrinking the item brings the totals back.
    invoice.modify_item("Ship", 2, dec!(10)).unwrap();
    assert_eq!(invoice.totals().unwrap().grand_total, dec!(20));
}

#[test]
fn oversized_discount_is_a_soft_error() {
    let mut invoice = make_invoice();
    invoice.add_item(LineItem::new("Bulk", "Freight", 1, Decimal::MAX / dec!(2)));
    invoice.set_discount(dec!(500));
    assert_eq!(invoice.totals(), Err(InvoiceError::AmountOverflow));
}
