pub mod booking;
pub mod session;
pub mod slot;

pub use booking::{BookingData, BookingRequest, BookingResponse, UserDetails};
pub use session::{ActiveSession, SessionDetails};
pub use slot::{SlotsResponse, TimeSlot};
