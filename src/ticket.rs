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

//! Ticket types and purchase line items.

use crate::error::ParseTicketTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a ticket, driving price and seat occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Infant,
    Child,
    Adult,
}

impl TicketType {
    /// Every ticket type, in a fixed order.
    pub const ALL: [TicketType; 3] = [TicketType::Infant, TicketType::Child, TicketType::Adult];

    /// Infants sit on an adult's lap.
    pub fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TicketType::Infant => "INFANT",
            TicketType::Child => "CHILD",
            TicketType::Adult => "ADULT",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            TicketType::Infant => 0,
            TicketType::Child => 1,
            TicketType::Adult => 2,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = ParseTicketTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFANT" => Ok(TicketType::Infant),
            "CHILD" => Ok(TicketType::Child),
            "ADULT" => Ok(TicketType::Adult),
            _ => Err(ParseTicketTypeError(s.to_string())),
        }
    }
}

/// A single line item of a purchase: a number of tickets of one type.
///
/// Several requests in one purchase may share a type; their counts are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: u32) -> Self {
        Self { ticket_type, count }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
