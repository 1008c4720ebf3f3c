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

//! Ticket purchase processing.
//!
//! The [`TicketService`] validates a batch of ticket requests against the
//! [`PurchasePolicy`], derives the amount owed and the seats to reserve, then
//! hands both to the external collaborators.
//!
//! # Validation Order
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. Account identifier is non-negative.
//! 2. At least one ticket request is present.
//! 3. Child or infant tickets are accompanied by at least one adult ticket.
//! 4. Total tickets do not exceed the policy maximum.
//! 5. Total price fits in a `u64`.
//!
//! No collaborator is invoked unless every check passes.

use crate::base::AccountId;
use crate::error::{PolicyError, PurchaseError};
use crate::gateway::{SeatReservationService, TicketPaymentService};
use crate::policy::PurchasePolicy;
use crate::pricing::TicketCounts;
use crate::ticket::TicketTypeRequest;
use serde::Serialize;

/// Outcome of a validated purchase: what to charge and how many seats to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    pub account_id: AccountId,
    pub total_price: u64,
    pub seats: u64,
}

/// Validates, prices and settles ticket purchases.
///
/// Holds no per-purchase state: counts are aggregated fresh on every call,
/// so one service can be shared across threads when its collaborators allow.
pub struct TicketService<P, S> {
    policy: PurchasePolicy,
    payment: P,
    reservation: S,
}

impl<P, S> TicketService<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    /// Creates a service using the default policy.
    pub fn new(payment: P, reservation: S) -> Self {
        Self {
            policy: PurchasePolicy::default(),
            payment,
            reservation,
        }
    }

    /// Creates a service with a custom policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] if the policy fails validation.
    pub fn with_policy(
        policy: PurchasePolicy,
        payment: P,
        reservation: S,
    ) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self {
            policy,
            payment,
            reservation,
        })
    }

    pub fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    /// Purchases tickets for an account.
    ///
    /// On success the payment collaborator is called exactly once with the
    /// total price, then the reservation collaborator exactly once with the
    /// number of seats.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::InvalidAccountId`] - Account identifier is negative.
    /// - [`PurchaseError::NoTickets`] - No ticket requests were supplied.
    /// - [`PurchaseError::NoAdult`] - Child or infant tickets without an adult.
    /// - [`PurchaseError::TooManyTickets`] - More tickets than the policy allows.
    /// - [`PurchaseError::PriceOverflow`] - Total price does not fit in a `u64`.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError> {
        let summary = self.quote(account_id, requests)?;

        self.payment
            .make_payment(summary.account_id, summary.total_price);
        self.reservation.reserve_seat(summary.account_id, summary.seats);

        tracing::info!(
            account_id = %summary.account_id,
            total_price = summary.total_price,
            seats = summary.seats,
            "tickets purchased"
        );
        Ok(())
    }

    /// Validates a purchase and computes its totals without settling it.
    ///
    /// # Errors
    ///
    /// Same as [`TicketService::purchase_tickets`].
    pub fn quote(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseError> {
        evaluate(&self.policy, account_id, requests).inspect_err(|e| {
            tracing::debug!(account_id, reason = %e, "purchase rejected");
        })
    }
}

fn evaluate(
    policy: &PurchasePolicy,
    account_id: i64,
    requests: &[TicketTypeRequest],
) -> Result<PurchaseSummary, PurchaseError> {
    let account_id = AccountId::try_from(account_id)?;

    if requests.is_empty() {
        return Err(PurchaseError::NoTickets);
    }

    let counts = TicketCounts::from_requests(requests);
    tracing::trace!(%account_id, ?counts, "aggregated ticket requests");

    if counts.is_unaccompanied() {
        return Err(PurchaseError::NoAdult);
    }

    let requested = counts.total();
    if requested > u64::from(policy.max_tickets) {
        return Err(PurchaseError::TooManyTickets {
            requested,
            max: policy.max_tickets,
        });
    }

    let total_price = counts
        .total_price(&policy.prices)
        .ok_or(PurchaseError::PriceOverflow)?;

    Ok(PurchaseSummary {
        account_id,
        total_price,
        seats: counts.seats(),
    })
}
