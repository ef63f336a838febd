//! In-memory booking store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, BookingId, PayerAddress};

/// Insertion-ordered booking store guarded by one async lock.
///
/// Entries keep their insertion position so payer listings come back in
/// creation order; the id index makes the release transition a single
/// indexed mutation under the write lock.
#[derive(Debug, Default)]
struct BookingStore {
    entries: Vec<Booking>,
    index: HashMap<BookingId, usize>,
}

/// Volatile, process-scoped booking repository.
///
/// All mutations take the write lock, so the release transition's
/// lookup-transition-replace sequence is atomic with respect to concurrent
/// mutations on the same record.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    store: RwLock<BookingStore>,
}

impl InMemoryBookingRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn append(&self, booking: &Booking) -> Result<(), BookingRepositoryError> {
        let mut store = self.store.write().await;
        let position = store.entries.len();
        store.index.insert(booking.id(), position);
        store.entries.push(booking.clone());
        Ok(())
    }

    async fn release_funds(
        &self,
        id: &BookingId,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        let mut store = self.store.write().await;
        let Some(position) = store.index.get(id).copied() else {
            return Ok(None);
        };
        Ok(store.entries.get_mut(position).map(|entry| {
            entry.mark_released();
            entry.clone()
        }))
    }

    async fn list_by_payer(
        &self,
        payer: &PayerAddress,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        let store = self.store.read().await;
        Ok(store
            .entries
            .iter()
            .filter(|booking| booking.payer_address() == payer)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use crate::domain::{BookingDraft, BookingStatus, StayDates};

    fn build_booking(payer: &str, payment_reference: Option<&str>) -> Booking {
        Booking::new(BookingDraft {
            item_id: "mum_001".into(),
            payer_address: payer.into(),
            price: 0.1,
            payment_reference: payment_reference.map(str::to_owned),
            stay_dates: StayDates {
                check_in: "2026-03-01".parse().expect("valid date"),
                check_out: "2026-03-04".parse().expect("valid date"),
            },
            guest_count: 2,
            guest_name: "Alice".into(),
        })
        .expect("valid booking")
    }

    #[tokio::test]
    async fn list_by_payer_filters_and_preserves_creation_order() {
        let repo = InMemoryBookingRepository::new();
        let first = build_booking("ADDR1", Some("TX1"));
        let other = build_booking("ADDR2", Some("TX2"));
        let second = build_booking("ADDR1", None);

        for booking in [&first, &other, &second] {
            repo.append(booking).await.expect("append succeeds");
        }

        let payer = PayerAddress::new("ADDR1").expect("valid payer");
        let listed = repo.list_by_payer(&payer).await.expect("list succeeds");

        let ids: Vec<_> = listed.iter().map(Booking::id).collect();
        assert_eq!(ids, vec![first.id(), second.id()]);
    }

    #[tokio::test]
    async fn list_by_payer_returns_empty_for_unknown_payers() {
        let repo = InMemoryBookingRepository::new();
        repo.append(&build_booking("ADDR1", None))
            .await
            .expect("append succeeds");

        let payer = PayerAddress::new("NOBODY").expect("valid payer");
        let listed = repo.list_by_payer(&payer).await.expect("list succeeds");
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn release_funds_transitions_locked_bookings() {
        let repo = InMemoryBookingRepository::new();
        let booking = build_booking("ADDR1", Some("TX1"));
        repo.append(&booking).await.expect("append succeeds");

        let released = repo
            .release_funds(&booking.id())
            .await
            .expect("release succeeds")
            .expect("booking exists");

        assert_eq!(released.status(), BookingStatus::FundsReleased);
        assert_eq!(released.id(), booking.id());
    }

    #[tokio::test]
    async fn release_funds_works_on_pending_bookings() {
        let repo = InMemoryBookingRepository::new();
        let booking = build_booking("ADDR1", None);
        repo.append(&booking).await.expect("append succeeds");

        let released = repo
            .release_funds(&booking.id())
            .await
            .expect("release succeeds")
            .expect("booking exists");

        assert_eq!(released.status(), BookingStatus::FundsReleased);
        assert!(released.payment_reference().is_none());
    }

    #[tokio::test]
    async fn release_funds_is_idempotent() {
        let repo = InMemoryBookingRepository::new();
        let booking = build_booking("ADDR1", Some("TX1"));
        repo.append(&booking).await.expect("append succeeds");

        let first = repo
            .release_funds(&booking.id())
            .await
            .expect("release succeeds")
            .expect("booking exists");
        let second = repo
            .release_funds(&booking.id())
            .await
            .expect("release succeeds")
            .expect("booking exists");

        assert_eq!(first, second);
        assert_eq!(second.status(), BookingStatus::FundsReleased);
    }

    #[tokio::test]
    async fn release_funds_leaves_the_store_untouched_for_unknown_ids() {
        let repo = InMemoryBookingRepository::new();
        let booking = build_booking("ADDR1", Some("TX1"));
        repo.append(&booking).await.expect("append succeeds");

        let released = repo
            .release_funds(&BookingId::random())
            .await
            .expect("release succeeds");
        assert!(released.is_none());

        let payer = PayerAddress::new("ADDR1").expect("valid payer");
        let listed = repo.list_by_payer(&payer).await.expect("list succeeds");
        assert_eq!(listed.first().map(Booking::status), Some(BookingStatus::EscrowLocked));
    }

    #[tokio::test]
    async fn concurrent_releases_on_one_id_agree_on_the_terminal_record() {
        let repo = std::sync::Arc::new(InMemoryBookingRepository::new());
        let booking = build_booking("ADDR1", Some("TX1"));
        repo.append(&booking).await.expect("append succeeds");

        let id = booking.id();
        let (a, b) = tokio::join!(repo.release_funds(&id), repo.release_funds(&id));

        let a = a.expect("release succeeds").expect("booking exists");
        let b = b.expect("release succeeds").expect("booking exists");
        assert_eq!(a, b);
        assert_eq!(a.status(), BookingStatus::FundsReleased);
    }
}
