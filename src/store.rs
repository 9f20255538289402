// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory expense ledger for one session.
//!
//! Records keep insertion order. Nothing here fails: amounts that do not
//! parse are stored as NaN and removing an unknown id leaves the store as
//! it was.

use crate::models::{ALL_CATEGORIES, Expense, ExpenseDraft};
use crate::utils::{amount_to_input, parse_amount, to_fixed};
use serde::Serialize;

pub type Clock = fn() -> i64;

fn wall_clock_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    clock: Clock,
    last_id: Option<i64>,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::with_clock(wall_clock_millis)
    }

    /// Store whose ids are derived from `clock` (milliseconds).
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            expenses: Vec::new(),
            clock,
            last_id: None,
        }
    }

    // Strictly increasing even when two records land in the same millisecond.
    fn next_id(&mut self) -> i64 {
        let now = (self.clock)();
        let id = match self.last_id {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_id = Some(id);
        id
    }

    pub fn create(&mut self, name: &str, amount: &str, category: &str, date: &str) -> Expense {
        let expense = Expense {
            id: self.next_id(),
            name: name.to_string(),
            amount: parse_amount(amount),
            category: category.to_string(),
            date: date.to_string(),
        };
        self.expenses.push(expense.clone());
        expense
    }

    pub fn create_from(&mut self, draft: &ExpenseDraft) -> Expense {
        self.create(&draft.name, &draft.amount, &draft.category, &draft.date)
    }

    pub fn remove(&mut self, id: i64) -> Option<Expense> {
        let pos = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(pos))
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&Expense> {
        if category == ALL_CATEGORIES {
            return self.expenses.iter().collect();
        }
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Load a record into a draft and drop it from the store.
    ///
    /// There is no update in place: the record only comes back if the draft
    /// is submitted again, and it then gets a new id at the end of the list.
    pub fn begin_edit(&mut self, id: i64) -> Option<ExpenseDraft> {
        let draft = self.find_by_id(id).map(|e| ExpenseDraft {
            name: e.name.clone(),
            amount: amount_to_input(e.amount),
            category: e.category.clone(),
            date: e.date.clone(),
        })?;
        self.remove(id);
        Some(draft)
    }

    pub fn total(&self) -> Total {
        Total::new(total_of(&self.expenses))
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Left-to-right sum of amounts starting from zero. A NaN amount makes the
/// whole sum NaN.
pub fn total_of<'a, I>(expenses: I) -> f64
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().fold(0.0, |sum, e| sum + e.amount)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Total {
    pub value: f64,
}

impl Total {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }

    pub fn display(&self) -> TotalDisplay {
        TotalDisplay {
            text: to_fixed(self.value),
            negative: self.is_negative(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalDisplay {
    pub text: String,
    pub negative: bool,
}
