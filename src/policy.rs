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

//! Purchase policy configuration.

use crate::error::PolicyError;
use crate::pricing::PriceTable;
use serde::{Deserialize, Serialize};

/// Prices and limits applied to every purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasePolicy {
    #[serde(default)]
    pub prices: PriceTable,

    /// Maximum number of tickets in one purchase, inclusive.
    #[serde(default = "default_max_tickets")]
    pub max_tickets: u32,
}

fn default_max_tickets() -> u32 {
    20
}

impl PurchasePolicy {
    pub fn with_prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }

    pub fn with_max_tickets(mut self, max_tickets: u32) -> Self {
        self.max_tickets = max_tickets;
        self
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_tickets == 0 {
            return Err(PolicyError::ZeroMaxTickets);
        }
        Ok(())
    }
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            max_tickets: default_max_tickets(),
        }
    }
}
