// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Expense;
use crate::store::TotalDisplay;
use crate::utils::{pretty_table, to_fixed};
use comfy_table::Table;
use serde::Serialize;

pub const ROW_HEADERS: [&str; 5] = ["ID", "Name", "Amount", "Category", "Date"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRow {
    pub id: i64,
    pub name: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

/// What a handler leaves on screen: the visible rows and the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub rows: Vec<ExpenseRow>,
    pub total: TotalDisplay,
}

pub fn render_rows<'a, I>(expenses: I, currency_symbol: &str) -> Vec<ExpenseRow>
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .map(|e| ExpenseRow {
            id: e.id,
            name: e.name.clone(),
            amount: format!("{}{}", currency_symbol, to_fixed(e.amount)),
            category: e.category.clone(),
            date: e.date.clone(),
        })
        .collect()
}

pub fn rows_table(rows: &[ExpenseRow]) -> Table {
    let data = rows
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.name.clone(),
                r.amount.clone(),
                r.category.clone(),
                r.date.clone(),
            ]
        })
        .collect();
    pretty_table(&ROW_HEADERS, data)
}

pub fn total_line(total: &TotalDisplay) -> String {
    if total.negative {
        format!("Total: {} (negative)", total.text)
    } else {
        format!("Total: {}", total.text)
    }
}
