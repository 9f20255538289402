// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Command handlers for one tracker session.
//!
//! Every handler runs to completion against the owned store and returns the
//! resulting [`Screen`]. Handlers that change the store always show the full
//! list afterwards, whatever filter was last picked, and the total is always
//! taken over the whole store.

use crate::config::Settings;
use crate::form::ExpenseForm;
use crate::models::Expense;
use crate::store::ExpenseStore;
use crate::view::{Screen, render_rows};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Session {
    store: ExpenseStore,
    form: ExpenseForm,
    settings: Settings,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self::with_store(settings, ExpenseStore::new())
    }

    pub fn with_store(settings: Settings, store: ExpenseStore) -> Self {
        let form = ExpenseForm::new(settings.default_category());
        Self {
            store,
            form,
            settings,
        }
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn form(&self) -> &ExpenseForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ExpenseForm {
        &mut self.form
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Create an expense from the form, then clear the form.
    pub fn submit(&mut self) -> (Expense, Screen) {
        let expense = self.store.create_from(self.form.draft());
        info!(id = expense.id, category = %expense.category, "expense added");
        if expense.amount.is_nan() {
            debug!(id = expense.id, "amount did not parse, stored as NaN");
        }
        self.form.reset();
        (expense, self.screen())
    }

    pub fn delete(&mut self, id: i64) -> Screen {
        match self.store.remove(id) {
            Some(_) => info!(id, "expense deleted"),
            None => debug!(id, "delete of unknown id ignored"),
        }
        self.screen()
    }

    /// Move a record into the form and out of the store. An unknown id
    /// leaves both untouched.
    pub fn edit(&mut self, id: i64) -> Screen {
        match self.store.begin_edit(id) {
            Some(draft) => {
                info!(id, "expense moved to form for editing");
                self.form.fill(draft);
            }
            None => debug!(id, "edit of unknown id ignored"),
        }
        self.screen()
    }

    pub fn change_filter(&mut self, category: &str) -> Screen {
        debug!(category, "filter changed");
        Screen {
            rows: render_rows(
                self.store.filter_by_category(category),
                &self.settings.currency_symbol,
            ),
            total: self.store.total().display(),
        }
    }

    /// Full list plus total.
    pub fn screen(&self) -> Screen {
        Screen {
            rows: render_rows(self.store.list(), &self.settings.currency_symbol),
            total: self.store.total().display(),
        }
    }
}
