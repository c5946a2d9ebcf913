use chrono::{DateTime, Utc};

use crate::errors::{ClientError, ClientResult};
use crate::failure::BookingFailure;
use crate::models::{BookingData, TimeSlot, UserDetails};
use crate::slots::SlotStatus;

/// Sub-state of the slot-selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotsPhase {
    /// Looking at the slot list; nothing selected.
    Browsing,
    /// A slot is selected and awaiting user confirmation.
    Confirming,
    /// The booking request is in flight. At most one booking can be in
    /// flight per wizard; the frontend must not submit again until this
    /// phase resolves.
    Booking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Form,
    Slots(SlotsPhase),
    Confirmation,
}

/// The booking wizard state machine: `form → slots → confirmation`, with
/// no terminal state. Start-over is the only way back, and it clears all
/// in-memory state. Illegal transitions return
/// [`ClientError::InvalidTransition`] and leave the state untouched.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: Step,
    user: Option<UserDetails>,
    selected: Option<TimeSlot>,
    booking: Option<BookingData>,
    error: Option<String>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn user_details(&self) -> Option<&UserDetails> {
        self.user.as_ref()
    }

    pub fn selected_slot(&self) -> Option<&TimeSlot> {
        self.selected.as_ref()
    }

    pub fn booking(&self) -> Option<&BookingData> {
        self.booking.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Form → Slots. Stores the user details for the rest of the pass.
    pub fn submit_details(&mut self, details: UserDetails) -> ClientResult<()> {
        if self.step != Step::Form {
            return Err(self.bad_transition("submit details"));
        }
        if details.name.trim().is_empty() {
            return Err(ClientError::Validation("name must not be empty".to_string()));
        }
        if details.email.trim().is_empty() {
            return Err(ClientError::Validation(
                "email must not be empty".to_string(),
            ));
        }
        self.user = Some(details);
        self.step = Step::Slots(SlotsPhase::Browsing);
        Ok(())
    }

    /// Browsing → Confirming. Only a slot whose derived status at `now`
    /// is available can be selected; at most one slot is selected at a
    /// time.
    pub fn select_slot(&mut self, slot: TimeSlot, now: DateTime<Utc>) -> ClientResult<()> {
        if self.step != Step::Slots(SlotsPhase::Browsing) {
            return Err(self.bad_transition("select a slot"));
        }
        if !SlotStatus::of(&slot, now).is_selectable() {
            return Err(ClientError::Validation(
                "this slot cannot be booked".to_string(),
            ));
        }
        self.selected = Some(slot);
        self.error = None;
        self.step = Step::Slots(SlotsPhase::Confirming);
        Ok(())
    }

    /// Confirming → Browsing. Drops the selection.
    pub fn cancel_selection(&mut self) -> ClientResult<()> {
        if self.step != Step::Slots(SlotsPhase::Confirming) {
            return Err(self.bad_transition("cancel the selection"));
        }
        self.selected = None;
        self.error = None;
        self.step = Step::Slots(SlotsPhase::Browsing);
        Ok(())
    }

    /// Confirming → Booking. Marks the submission in flight.
    pub fn begin_booking(&mut self) -> ClientResult<()> {
        if self.step != Step::Slots(SlotsPhase::Confirming) {
            return Err(self.bad_transition("begin booking"));
        }
        self.error = None;
        self.step = Step::Slots(SlotsPhase::Booking);
        Ok(())
    }

    /// Booking → Confirmation. The booking is committed server-side;
    /// there is no local rollback from here.
    pub fn booking_succeeded(&mut self, data: BookingData) -> ClientResult<()> {
        if self.step != Step::Slots(SlotsPhase::Booking) {
            return Err(self.bad_transition("record a booking"));
        }
        self.booking = Some(data);
        self.step = Step::Confirmation;
        Ok(())
    }

    /// Booking → Confirming. Keeps the slot selected so the user can try
    /// again or pick a different one; the categorized message is exposed
    /// through [`Wizard::error`].
    pub fn booking_failed(&mut self, failure: &BookingFailure) -> ClientResult<()> {
        if self.step != Step::Slots(SlotsPhase::Booking) {
            return Err(self.bad_transition("record a booking failure"));
        }
        self.error = Some(failure.user_message().into_owned());
        self.step = Step::Slots(SlotsPhase::Confirming);
        Ok(())
    }

    /// Any state → Form. Clears user details, booking data, the selected
    /// slot, and any error.
    pub fn start_over(&mut self) {
        *self = Self::default();
    }

    fn bad_transition(&self, action: &str) -> ClientError {
        ClientError::InvalidTransition(format!("cannot {action} from {:?}", self.step))
    }
}
