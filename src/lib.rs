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

//! # Ticket Service
//!
//! This library validates and prices a batch of ticket purchase requests for a
//! single transaction, then delegates payment collection and seat reservation
//! to external services.
//!
//! ## Core Components
//!
//! - [`TicketService`]: Validates a purchase and settles it with the collaborators
//! - [`TicketTypeRequest`]: One line item (ticket type and count)
//! - [`TicketCounts`]: Per-type aggregation with price and seat derivation
//! - [`PurchasePolicy`]: Prices and per-purchase ticket limit
//! - [`PurchaseError`]: Reasons a purchase is rejected
//!
//! ## Example
//!
//! ```
//! use ticket_service_rs::{RecordingGateway, TicketService, TicketType, TicketTypeRequest};
//!
//! let gateway = RecordingGateway::new();
//! let service = TicketService::new(&gateway, &gateway);
//!
//! service
//!     .purchase_tickets(
//!         1,
//!         &[
//!             TicketTypeRequest::new(TicketType::Adult, 5),
//!             TicketTypeRequest::new(TicketType::Child, 1),
//!             TicketTypeRequest::new(TicketType::Infant, 2),
//!         ],
//!     )
//!     .unwrap();
//!
//! assert_eq!(gateway.payments()[0].value, 110);
//! assert_eq!(gateway.reservations()[0].value, 6);
//! ```
//!
//! ## Thread Safety
//!
//! Purchases share no mutable state, so concurrent calls for different
//! transactions proceed independently.

mod base;
pub mod error;
pub mod gateway;
mod policy;
mod pricing;
mod service;
mod ticket;

pub use base::AccountId;
pub use error::{ParseTicketTypeError, PolicyError, PurchaseError};
pub use gateway::{
    CallKind, GatewayCall, RecordingGateway, SeatReservationService, TicketPaymentService,
};
pub use policy::PurchasePolicy;
pub use pricing::{PriceTable, TicketCounts};
pub use service::{PurchaseSummary, TicketService};
pub use ticket::{TicketType, TicketTypeRequest};
