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

//! External payment and seat reservation collaborators.
//!
//! The purchase core only depends on the two traits below. Both are
//! side-effect-only: the core never reads a result back from them.

use crate::base::AccountId;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Collects payment for a purchase.
pub trait TicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64);
}

/// Reserves seats for a purchase.
pub trait SeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seats: u64);
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, seats: u64) {
        (**self).reserve_seat(account_id, seats)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, seats: u64) {
        (**self).reserve_seat(account_id, seats)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    Payment,
    Reservation,
}

/// One collaborator invocation. `value` is the amount for payments and the
/// seat count for reservations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayCall {
    pub kind: CallKind,
    pub account_id: AccountId,
    pub value: u64,
}

/// In-memory gateway that records every call, in order.
///
/// Implements both collaborator traits so a single instance observes the
/// relative order of payment and reservation.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<GatewayCall>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the calls made so far.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().clone()
    }

    pub fn payments(&self) -> Vec<GatewayCall> {
        self.calls_of(CallKind::Payment)
    }

    pub fn reservations(&self) -> Vec<GatewayCall> {
        self.calls_of(CallKind::Reservation)
    }

    fn calls_of(&self, kind: CallKind) -> Vec<GatewayCall> {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.kind == kind)
            .copied()
            .collect()
    }

    fn record(&self, kind: CallKind, account_id: AccountId, value: u64) {
        self.calls.lock().push(GatewayCall {
            kind,
            account_id,
            value,
        });
    }
}

impl TicketPaymentService for RecordingGateway {
    fn make_payment(&self, account_id: AccountId, amount: u64) {
        self.record(CallKind::Payment, account_id, amount);
    }
}

impl SeatReservationService for RecordingGateway {
    fn reserve_seat(&self, account_id: AccountId, seats: u64) {
        self.record(CallKind::Reservation, account_id, seats);
    }
}
