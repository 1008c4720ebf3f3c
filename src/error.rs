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

//! Error types for ticket purchases.

use thiserror::Error;

/// Reasons a purchase is rejected.
///
/// The whole enum is the invalid-purchase kind: every variant means the
/// request was refused before any payment or reservation was attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// Account identifier is negative
    #[error("accountId must be an integer greater than 0")]
    InvalidAccountId,

    /// No ticket requests were supplied
    #[error("Number of tickets purchased must be greater than 0")]
    NoTickets,

    /// Child or infant tickets requested without an adult ticket
    #[error("Number of adult tickets must be greater than 0")]
    NoAdult,

    /// Batch exceeds the maximum number of tickets per purchase
    #[error("Number of tickets purchased must be less than or equal to {max}")]
    TooManyTickets { requested: u64, max: u32 },

    /// Total price does not fit the payable amount range
    #[error("Total price of tickets purchased is too large")]
    PriceOverflow,
}

/// Rejected purchase policy configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("max_tickets must be greater than 0")]
    ZeroMaxTickets,
}

/// Ticket type name that is not INFANT, CHILD or ADULT.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ticket type: {0}")]
pub struct ParseTicketTypeError(pub String);
