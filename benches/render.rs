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


//! Benchmarks for invoice rendering.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Totals arithmetic alone
//! - Compact and detailed rendering
//! - Scaling with number of line items

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use invoice_generator_rs::{
    Invoice, InvoiceLedger, InvoiceNumber, LineItem, RenderStrategy, Template, Totals,
};
use rust_decimal::Decimal;

// =============================================================================
// Helper Functions
// =============================================================================

fn make_items(count: usize) -> Vec<LineItem> {
    (0..count)
        .map(|i| {
            LineItem::new(
                format!("Item {i}"),
                "Bench",
                (i % 17) as i64 + 1,
                Decimal::new((i as i64 % 10_000) + 99, 2),
            )
        })
        .collect()
}

fn make_invoice(count: usize) -> Invoice {
    let mut invoice = Invoice::new(InvoiceNumber("INV_BENCH".to_string()), "1/1/2025 00:00");
    invoice.set_customer_info("Bench Customer", "1 Bench Street");
    invoice.set_discount(Decimal::new(125, 1));
    invoice.set_tax_rate(Decimal::new(825, 2));
    for item in make_items(count) {
        invoice.add_item(item);
    }
    invoice
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_totals(c: &mut Criterion) {
    let items = make_items(1_000);
    c.bench_function("totals_1000_items", |b| {
        b.iter(|| {
            Totals::compute(
                black_box(&items),
                black_box(Decimal::new(10, 0)),
                black_box(Decimal::new(5, 0)),
            )
        })
    });
}

fn bench_templates(c: &mut Criterion) {
    let items = make_items(100);
    let mut group = c.benchmark_group("render_100_items");

    for template in [Template::Compact, Template::Detailed] {
        group.bench_with_input(BenchmarkId::from_parameter(template), &template, |b, t| {
            let mut out = String::with_capacity(16 * 1024);
            b.iter(|| {
                out.clear();
                t.render(black_box(&items), Decimal::TEN, Decimal::new(5, 0), &mut out)
            })
        });
    }
    group.finish();
}

fn bench_report_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_scaling");

    for count in [10usize, 100, 1_000, 10_000] {
        let invoice = {
            let mut invoice = make_invoice(count);
            invoice.set_template(Template::Detailed);
            invoice
        };
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &invoice, |b, invoice| {
            b.iter(|| black_box(invoice.report()))
        });
    }
    group.finish();
}

fn bench_ledger_listing(c: &mut Criterion) {
    let mut ledger = InvoiceLedger::default();
    for _ in 0..50 {
        let mut invoice = make_invoice(20);
        invoice.set_template(Template::Compact);
        ledger.push(invoice);
    }

    c.bench_function("list_all_50_invoices", |b| {
        let mut out = Vec::with_capacity(256 * 1024);
        b.iter(|| {
            out.clear();
            ledger.list_all(&mut out)
        })
    });
}

criterion_group!(
    benches,
    bench_totals,
    bench_templates,
    bench_report_scaling,
    bench_ledger_listing
);
criterion_main!(benches);
