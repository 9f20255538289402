// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ExpenseDraft;

/// The four-field expense form. Reset restores the default category.
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    fields: ExpenseDraft,
    default_category: String,
}

impl ExpenseForm {
    pub fn new(default_category: &str) -> Self {
        let mut form = Self {
            fields: ExpenseDraft::default(),
            default_category: default_category.to_string(),
        };
        form.reset();
        form
    }

    pub fn reset(&mut self) {
        self.fields = ExpenseDraft {
            category: self.default_category.clone(),
            ..ExpenseDraft::default()
        };
    }

    pub fn fill(&mut self, draft: ExpenseDraft) {
        self.fields = draft;
    }

    pub fn set_name(&mut self, v: &str) {
        self.fields.name = v.to_string();
    }

    pub fn set_amount(&mut self, v: &str) {
        self.fields.amount = v.to_string();
    }

    pub fn set_category(&mut self, v: &str) {
        self.fields.category = v.to_string();
    }

    pub fn set_date(&mut self, v: &str) {
        self.fields.date = v.to_string();
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.fields
    }
}
