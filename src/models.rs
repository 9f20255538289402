// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

/// Filter value meaning "no category restriction". Never stored on a record.
pub const ALL_CATEGORIES: &str = "All";

pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Transport", "Entertainment", "Other"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub amount: f64, // NaN when the input did not parse
    pub category: String,
    pub date: String,
}

/// The four raw field values of the expense form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseDraft {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }
}
