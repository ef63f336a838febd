//! Booking aggregate and its value types.
//!
//! A booking walks a fixed, forward-only lifecycle:
//! `PENDING → ESCROW_LOCKED → FUNDS_RELEASED`. The first two states are
//! decided at creation time from the presence of a payment reference; the
//! terminal state is reached exactly once, at check-in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation failures raised when constructing a [`Booking`] or one of its
/// value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    /// The booked item reference was empty.
    #[error("item id must not be empty")]
    EmptyItemId,
    /// The paying party identifier was empty.
    #[error("payer address must not be empty")]
    EmptyPayerAddress,
    /// The price was zero, negative, or not a finite number.
    #[error("price must be a positive amount")]
    NonPositivePrice,
    /// A payment reference was supplied but empty.
    #[error("payment reference must not be empty when supplied")]
    EmptyPaymentReference,
}

/// Opaque booking identifier, generated by the ledger at creation time and
/// unique within the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(Uuid);

impl BookingId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Construct an identifier from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BookingId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Reference to the booked hotel or listing. The ledger treats it as opaque
/// and never checks it against the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Validate and construct an item reference.
    pub fn new(value: impl Into<String>) -> Result<Self, BookingValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(BookingValidationError::EmptyItemId);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Identifier of the paying party on the external payment network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PayerAddress(String);

impl PayerAddress {
    /// Validate and construct a payer address.
    pub fn new(value: impl Into<String>) -> Result<Self, BookingValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(BookingValidationError::EmptyPayerAddress);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for PayerAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for PayerAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Opaque transaction identifier on the external payment network.
///
/// The ledger trusts the caller-supplied reference at face value; it never
/// verifies it against the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaymentReference(String);

impl PaymentReference {
    /// Validate and construct a payment reference.
    pub fn new(value: impl Into<String>) -> Result<Self, BookingValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(BookingValidationError::EmptyPaymentReference);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for PaymentReference {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for PaymentReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Positive, finite amount in the payment network's unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// Validate and construct a price.
    pub fn new(value: f64) -> Result<Self, BookingValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(BookingValidationError::NonPositivePrice);
        }
        Ok(Self(value))
    }

    /// The numeric amount.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Stay window attached to a booking. Opaque to the lifecycle logic; the
/// ledger enforces no ordering between the two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayDates {
    /// First night of the stay.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
}

/// Lifecycle state of a booking. Ordered; transitions are forward-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Recorded without a payment reference; escrow not yet observed.
    Pending,
    /// Payment reference observed; funds held until check-in.
    EscrowLocked,
    /// Terminal state: funds released to the recipient.
    FundsReleased,
}

impl BookingStatus {
    /// Whether the status is the terminal lifecycle state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::FundsReleased
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pending => "PENDING",
            Self::EscrowLocked => "ESCROW_LOCKED",
            Self::FundsReleased => "FUNDS_RELEASED",
        };
        f.write_str(label)
    }
}

/// Input payload for [`Booking::new`]. Identifier, status, and creation
/// timestamp are assigned by the ledger, never by the caller.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    /// Reference to the booked item.
    pub item_id: String,
    /// Identifier of the paying party.
    pub payer_address: String,
    /// Amount in the payment network's unit.
    pub price: f64,
    /// External transaction identifier, when payment has been observed.
    pub payment_reference: Option<String>,
    /// Stay window.
    pub stay_dates: StayDates,
    /// Number of guests.
    pub guest_count: u32,
    /// Name the booking was made under.
    pub guest_name: String,
}

/// A recorded booking.
///
/// # Examples
/// ```
/// use backend::domain::{Booking, BookingDraft, BookingStatus, StayDates};
///
/// let draft = BookingDraft {
///     item_id: "mum_001".into(),
///     payer_address: "ADDR1".into(),
///     price: 0.1,
///     payment_reference: Some("TX123".into()),
///     stay_dates: StayDates {
///         check_in: "2026-03-01".parse().expect("valid date"),
///         check_out: "2026-03-04".parse().expect("valid date"),
///     },
///     guest_count: 2,
///     guest_name: "Alice".into(),
/// };
/// let booking = Booking::new(draft).expect("valid draft");
/// assert_eq!(booking.status(), BookingStatus::EscrowLocked);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    id: BookingId,
    item_id: ItemId,
    payer_address: PayerAddress,
    price: Price,
    payment_reference: Option<PaymentReference>,
    status: BookingStatus,
    stay_dates: StayDates,
    guest_count: u32,
    guest_name: String,
    created_at: DateTime<Utc>,
}

impl Booking {
    /// Validate a draft and record it with a fresh identifier.
    ///
    /// The status is derived, never caller-supplied: `ESCROW_LOCKED` when a
    /// payment reference accompanies the draft, `PENDING` otherwise.
    pub fn new(draft: BookingDraft) -> Result<Self, BookingValidationError> {
        let payment_reference = draft
            .payment_reference
            .map(PaymentReference::new)
            .transpose()?;
        let status = if payment_reference.is_some() {
            BookingStatus::EscrowLocked
        } else {
            BookingStatus::Pending
        };

        Ok(Self {
            id: BookingId::random(),
            item_id: ItemId::new(draft.item_id)?,
            payer_address: PayerAddress::new(draft.payer_address)?,
            price: Price::new(draft.price)?,
            payment_reference,
            status,
            stay_dates: draft.stay_dates,
            guest_count: draft.guest_count,
            guest_name: draft.guest_name,
            created_at: Utc::now(),
        })
    }

    /// Returns the ledger-assigned identifier.
    #[must_use]
    pub fn id(&self) -> BookingId {
        self.id
    }

    /// Returns the booked item reference.
    #[must_use]
    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Returns the paying party identifier.
    #[must_use]
    pub fn payer_address(&self) -> &PayerAddress {
        &self.payer_address
    }

    /// Returns the booked price.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the payment reference, when payment has been observed.
    #[must_use]
    pub fn payment_reference(&self) -> Option<&PaymentReference> {
        self.payment_reference.as_ref()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn status(&self) -> BookingStatus {
        self.status
    }

    /// Returns the stay window.
    #[must_use]
    pub fn stay_dates(&self) -> StayDates {
        self.stay_dates
    }

    /// Returns the guest count.
    #[must_use]
    pub fn guest_count(&self) -> u32 {
        self.guest_count
    }

    /// Returns the guest name.
    #[must_use]
    pub fn guest_name(&self) -> &str {
        self.guest_name.as_str()
    }

    /// Returns the immutable creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the booking to its terminal state.
    ///
    /// Idempotent once released; the lifecycle never reverts.
    pub fn mark_released(&mut self) {
        self.status = BookingStatus::FundsReleased;
    }
}

#[cfg(test)]
mod tests;
