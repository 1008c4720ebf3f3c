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


//! TicketService public API integration tests.

use std::sync::Arc;
use std::thread;
use ticket_service_rs::{
    AccountId, CallKind, GatewayCall, PriceTable, PurchaseError, PurchasePolicy,
    RecordingGateway, SeatReservationService, TicketPaymentService, TicketService, TicketType,
    TicketTypeRequest,
};

// === Helper Functions ===

fn adult(count: u32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Adult, count)
}

fn child(count: u32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Child, count)
}

fn infant(count: u32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Infant, count)
}

fn payment(account_id: u64, amount: u64) -> GatewayCall {
    GatewayCall {
        kind: CallKind::Payment,
        account_id: AccountId(account_id),
        value: amount,
    }
}

fn reservation(account_id: u64, seats: u64) -> GatewayCall {
    GatewayCall {
        kind: CallKind::Reservation,
        account_id: AccountId(account_id),
        value: seats,
    }
}

// === Validation Tests ===

#[test]
fn negative_account_id_is_rejected() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    let result = service.purchase_tickets(-1, &[adult(1)]);

    assert_eq!(result, Err(PurchaseError::InvalidAccountId));
    assert_eq!(
        result.unwrap_err().to_string(),
        "accountId must be an integer greater than 0"
    );
    assert!(gateway.calls().is_empty());
}

#[test]
fn zero_account_id_is_accepted() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    service.purchase_tickets(0, &[adult(1)]).unwrap();

    assert_eq!(gateway.calls(), vec![payment(0, 20), reservation(0, 1)]);
}

#[test]
fn no_requests_is_rejected() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    let result = service.purchase_tickets(1, &[]);

    assert_eq!(result, Err(PurchaseError::NoTickets));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Number of tickets purchased must be greater than 0"
    );
    assert!(gateway.calls().is_empty());
}

#[test]
fn infant_without_adult_is_rejected() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    let result = service.purchase_tickets(1, &[infant(1)]);

    assert_eq!(result, Err(PurchaseError::NoAdult));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Number of adult tickets must be greater than 0"
    );
    assert!(gateway.calls().is_empty());
}

#[test]
fn child_without_adult_is_rejected() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    let result = service.purchase_tickets(1, &[child(2), adult(0)]);

    assert_eq!(result, Err(PurchaseError::NoAdult));
    assert!(gateway.calls().is_empty());
}

#[test]
fn more_than_twenty_tickets_is_rejected() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    // 10 + 5 + 5 + 2 = 22
    let result = service.purchase_tickets(1, &[adult(10), child(5), infant(5), infant(2)]);

    assert_eq!(
        result,
        Err(PurchaseError::TooManyTickets {
            requested: 22,
            max: 20
        })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "Number of tickets purchased must be less than or equal to 20"
    );
    assert!(gateway.calls().is_empty());
}

#[test]
fn exactly_twenty_tickets_is_accepted() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    service
        .purchase_tickets(1, &[adult(10), child(5), infant(5)])
        .unwrap();

    assert_eq!(gateway.calls(), vec![payment(1, 250), reservation(1, 15)]);
}

#[test]
fn twenty_one_tickets_is_rejected() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    let result = service.purchase_tickets(1, &[adult(21)]);

    assert!(matches!(
        result,
        Err(PurchaseError::TooManyTickets { requested: 21, .. })
    ));
    assert!(gateway.calls().is_empty());
}

#[test]
fn infants_count_towards_the_ticket_limit() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    let result = service.purchase_tickets(1, &[adult(1), infant(20)]);

    assert!(matches!(result, Err(PurchaseError::TooManyTickets { .. })));
}

#[test]
fn account_is_checked_before_anything_else() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    assert_eq!(
        service.purchase_tickets(-3, &[]),
        Err(PurchaseError::InvalidAccountId)
    );
    assert_eq!(
        service.purchase_tickets(-3, &[infant(30)]),
        Err(PurchaseError::InvalidAccountId)
    );
}

// === Pricing and Reservation Tests ===

#[test]
fn mixed_batch_charges_and_reserves_correctly() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    service
        .purchase_tickets(1, &[adult(5), child(1), infant(2)])
        .unwrap();

    assert_eq!(gateway.payments(), vec![payment(1, 110)]);
    assert_eq!(gateway.reservations(), vec![reservation(1, 6)]);
}

#[test]
fn single_adult_ticket() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    service.purchase_tickets(42, &[adult(1)]).unwrap();

    assert_eq!(gateway.payments(), vec![payment(42, 20)]);
    assert_eq!(gateway.reservations(), vec![reservation(42, 1)]);
}

#[test]
fn split_requests_of_one_type_are_summed() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    service
        .purchase_tickets(1, &[adult(2), child(1), adult(3), child(2)])
        .unwrap();

    assert_eq!(gateway.calls(), vec![payment(1, 130), reservation(1, 8)]);
}

#[test]
fn payment_happens_before_reservation() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    service.purchase_tickets(1, &[adult(2), infant(1)]).unwrap();

    let kinds: Vec<CallKind> = gateway.calls().iter().map(|call| call.kind).collect();
    assert_eq!(kinds, vec![CallKind::Payment, CallKind::Reservation]);
}

#[test]
fn all_zero_counts_still_settle_with_zero_totals() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    service.purchase_tickets(1, &[adult(0)]).unwrap();

    assert_eq!(gateway.calls(), vec![payment(1, 0), reservation(1, 0)]);
}

#[test]
fn custom_policy_changes_prices_and_limit() {
    let gateway = RecordingGateway::new();
    let policy = PurchasePolicy::default()
        .with_prices(PriceTable::new(15, 40))
        .with_max_tickets(5);
    let service = TicketService::with_policy(policy, &gateway, &gateway).unwrap();

    service.purchase_tickets(3, &[adult(2), child(2), infant(1)]).unwrap();
    assert_eq!(gateway.calls(), vec![payment(3, 110), reservation(3, 4)]);

    let result = service.purchase_tickets(3, &[adult(6)]);
    assert_eq!(
        result,
        Err(PurchaseError::TooManyTickets {
            requested: 6,
            max: 5
        })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "Number of tickets purchased must be less than or equal to 5"
    );
}

#[test]
fn price_overflow_is_rejected_without_settling() {
    let gateway = RecordingGateway::new();
    let policy = PurchasePolicy::default().with_prices(PriceTable::new(0, u64::MAX / 2 + 1));
    let service = TicketService::with_policy(policy, &gateway, &gateway).unwrap();

    let result = service.purchase_tickets(1, &[adult(3)]);

    assert_eq!(result, Err(PurchaseError::PriceOverflow));
    assert!(gateway.calls().is_empty());

    // A total that exactly fits is still charged in full.
    service.purchase_tickets(1, &[adult(1)]).unwrap();
    assert_eq!(gateway.payments(), vec![payment(1, u64::MAX / 2 + 1)]);
}

#[test]
fn separate_gateways_each_receive_one_call() {
    let payments = RecordingGateway::new();
    let reservations = RecordingGateway::new();
    let service = TicketService::new(&payments, &reservations);

    service.purchase_tickets(8, &[adult(3), child(1)]).unwrap();

    assert_eq!(payments.calls(), vec![payment(8, 70)]);
    assert_eq!(reservations.calls(), vec![reservation(8, 4)]);
}

#[test]
fn purchases_are_independent() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);

    service.purchase_tickets(1, &[adult(20)]).unwrap();
    // A previous full batch does not count against the next purchase.
    service.purchase_tickets(2, &[adult(20)]).unwrap();

    assert_eq!(
        gateway.calls(),
        vec![
            payment(1, 400),
            reservation(1, 20),
            payment(2, 400),
            reservation(2, 20)
        ]
    );
}

#[test]
fn quote_matches_purchase_without_side_effects() {
    let gateway = RecordingGateway::new();
    let service = TicketService::new(&gateway, &gateway);
    let requests = [adult(5), child(1), infant(2)];

    let first = service.quote(1, &requests).unwrap();
    let second = service.quote(1, &requests).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.total_price, 110);
    assert_eq!(first.seats, 6);
    assert!(gateway.calls().is_empty());
}

// === Custom Collaborator Tests ===

struct PanickingPayment;

impl TicketPaymentService for PanickingPayment {
    fn make_payment(&self, _account_id: AccountId, _amount: u64) {
        panic!("payment gateway unavailable");
    }
}

#[test]
fn collaborator_failure_propagates_and_skips_reservation() {
    let reservations = RecordingGateway::new();
    let service = TicketService::new(PanickingPayment, &reservations);

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        service.purchase_tickets(1, &[adult(1)])
    }));

    assert!(outcome.is_err());
    assert!(reservations.calls().is_empty());
}

struct CountingReservation(parking_lot::Mutex<u64>);

impl SeatReservationService for CountingReservation {
    fn reserve_seat(&self, _account_id: AccountId, seats: u64) {
        *self.0.lock() += seats;
    }
}

// === Multi-threading Tests ===

#[test]
fn concurrent_purchases_are_independent() {
    let payments = Arc::new(RecordingGateway::new());
    let reservations = Arc::new(CountingReservation(parking_lot::Mutex::new(0)));
    let service = Arc::new(TicketService::new(
        Arc::clone(&payments),
        Arc::clone(&reservations),
    ));
    let mut handles = vec![];

    for i in 0..50i64 {
        let service = Arc::clone(&service);
        handles.push(thread::spawn(move || {
            service.purchase_tickets(i, &[adult(1), child(1)]).unwrap();
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let calls = payments.calls();
    assert_eq!(calls.len(), 50);
    assert!(calls.iter().all(|call| call.value == 30));
    assert_eq!(*reservations.0.lock(), 100);
}
