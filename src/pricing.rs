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

//! Per-type aggregation and price/seat derivation.
//!
//! # Example
//!
//! ```
//! use ticket_service_rs::{PriceTable, TicketCounts, TicketType, TicketTypeRequest};
//!
//! let counts = TicketCounts::from_requests(&[
//!     TicketTypeRequest::new(TicketType::Adult, 2),
//!     TicketTypeRequest::new(TicketType::Infant, 1),
//! ]);
//! assert_eq!(counts.total_price(&PriceTable::default()), Some(40));
//! assert_eq!(counts.seats(), 2);
//! ```

use crate::ticket::{TicketType, TicketTypeRequest};
use serde::{Deserialize, Serialize};

/// Unit price of each ticket type.
///
/// Infant tickets are free and that price cannot be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    #[serde(default = "default_child_price")]
    child: u64,
    #[serde(default = "default_adult_price")]
    adult: u64,
}

fn default_child_price() -> u64 {
    10
}

fn default_adult_price() -> u64 {
    20
}

impl PriceTable {
    pub fn new(child: u64, adult: u64) -> Self {
        Self { child, adult }
    }

    pub fn price(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Infant => 0,
            TicketType::Child => self.child,
            TicketType::Adult => self.adult,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            child: default_child_price(),
            adult: default_adult_price(),
        }
    }
}

/// Ticket counts aggregated by type for a single purchase.
///
/// Built fresh for every purchase; every type starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketCounts {
    counts: [u64; 3],
}

impl TicketCounts {
    /// Returns a table with every ticket type at zero.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Sums the requested count of each line item into its type's bucket.
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        let mut counts = Self::zeroed();
        for request in requests {
            counts.add(request.ticket_type(), request.count());
        }
        counts
    }

    pub fn add(&mut self, ticket_type: TicketType, count: u32) {
        let bucket = &mut self.counts[ticket_type.index()];
        *bucket = bucket.saturating_add(u64::from(count));
    }

    pub fn get(&self, ticket_type: TicketType) -> u64 {
        self.counts[ticket_type.index()]
    }

    /// Total number of tickets across all types.
    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .fold(0u64, |total, count| total.saturating_add(*count))
    }

    /// Amount owed: count times unit price, summed over all types.
    ///
    /// Returns `None` if the amount does not fit in a `u64`.
    pub fn total_price(&self, prices: &PriceTable) -> Option<u64> {
        TicketType::ALL.iter().try_fold(0u64, |total, ticket_type| {
            self.get(*ticket_type)
                .checked_mul(prices.price(*ticket_type))
                .and_then(|amount| total.checked_add(amount))
        })
    }

    /// Number of seats to reserve. Infant tickets never take a seat.
    pub fn seats(&self) -> u64 {
        TicketType::ALL
            .iter()
            .filter(|ticket_type| ticket_type.occupies_seat())
            .fold(0u64, |total, ticket_type| total.saturating_add(self.get(*ticket_type)))
    }

    /// Child or infant tickets are present without any adult ticket.
    pub fn is_unaccompanied(&self) -> bool {
        let dependants = self.get(TicketType::Infant) > 0 || self.get(TicketType::Child) > 0;
        dependants && self.get(TicketType::Adult) < 1
    }
}
