use chrono::{DateTime, TimeZone, Timelike, Utc};

use crate::models::TimeSlot;

/// Display status of a slot, derived from wall-clock `now` at render or
/// selection time. Never cached on the slot itself: a displayed slot can
/// cross from available to past while on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Past,
    Available,
    Booked,
}

impl SlotStatus {
    pub fn of(slot: &TimeSlot, now: DateTime<Utc>) -> Self {
        if slot.start_time <= now {
            // A started slot is past regardless of its availability flag.
            SlotStatus::Past
        } else if slot.available {
            SlotStatus::Available
        } else {
            SlotStatus::Booked
        }
    }

    pub fn is_selectable(self) -> bool {
        matches!(self, SlotStatus::Available)
    }
}

/// The four fixed day periods slots are grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    LateNight,
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    /// Rendering order: late night first, evening last.
    pub const ALL: [Period; 4] = [
        Period::LateNight,
        Period::Morning,
        Period::Afternoon,
        Period::Evening,
    ];

    pub fn of_hour(hour: u32) -> Period {
        match hour {
            0..=5 => Period::LateNight,
            6..=11 => Period::Morning,
            12..=17 => Period::Afternoon,
            _ => Period::Evening,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::LateNight => "Late Night",
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
            Period::Evening => "Evening",
        }
    }

    pub fn time_range(self) -> &'static str {
        match self {
            Period::LateNight => "12 AM - 6 AM",
            Period::Morning => "6 AM - 12 PM",
            Period::Afternoon => "12 PM - 6 PM",
            Period::Evening => "6 PM - 12 AM",
        }
    }
}

/// Slots partitioned by day period. Relative order within each bucket is
/// the order of the input list.
#[derive(Debug, Clone, Default)]
pub struct GroupedSlots {
    pub late_night: Vec<TimeSlot>,
    pub morning: Vec<TimeSlot>,
    pub afternoon: Vec<TimeSlot>,
    pub evening: Vec<TimeSlot>,
}

impl GroupedSlots {
    pub fn get(&self, period: Period) -> &[TimeSlot] {
        match period {
            Period::LateNight => &self.late_night,
            Period::Morning => &self.morning,
            Period::Afternoon => &self.afternoon,
            Period::Evening => &self.evening,
        }
    }

    fn get_mut(&mut self, period: Period) -> &mut Vec<TimeSlot> {
        match period {
            Period::LateNight => &mut self.late_night,
            Period::Morning => &mut self.morning,
            Period::Afternoon => &mut self.afternoon,
            Period::Evening => &mut self.evening,
        }
    }

    /// All slots in period order, late night through evening.
    pub fn in_render_order(&self) -> Vec<TimeSlot> {
        Period::ALL
            .iter()
            .flat_map(|period| self.get(*period).iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        Period::ALL.iter().map(|p| self.get(*p).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition slots into the four day-period buckets by the hour-of-day of
/// `start_time` in the given timezone. Every slot lands in exactly one
/// bucket.
pub fn group_by_period<Tz: TimeZone>(slots: &[TimeSlot], tz: &Tz) -> GroupedSlots {
    let mut grouped = GroupedSlots::default();
    for slot in slots {
        let hour = slot.start_time.with_timezone(tz).hour();
        grouped.get_mut(Period::of_hour(hour)).push(slot.clone());
    }
    grouped
}

/// Counts for the summary line under the slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCounts {
    pub available: usize,
    pub booked: usize,
    pub past: usize,
    pub total: usize,
}

pub fn count_by_status(slots: &[TimeSlot], now: DateTime<Utc>) -> SlotCounts {
    let mut counts = SlotCounts {
        available: 0,
        booked: 0,
        past: 0,
        total: slots.len(),
    };
    for slot in slots {
        match SlotStatus::of(slot, now) {
            SlotStatus::Available => counts.available += 1,
            SlotStatus::Booked => counts.booked += 1,
            SlotStatus::Past => counts.past += 1,
        }
    }
    counts
}
