use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Light, Room, WaterAmount, WateringDays};

/// One tracked plant and its watering state.
///
/// `is_watered` is the stored checkmark; it is only trustworthy after the
/// store's daily refresh has run, since a checkmark set yesterday goes stale
/// at midnight. `is_watered_today` is the derived truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: Uuid,
    pub name: String,
    pub room: Room,
    pub light: Light,
    pub watering_days: WateringDays,
    pub water: WaterAmount,
    #[serde(default)]
    pub is_watered: bool,
    #[serde(default)]
    pub last_watered_at: Option<DateTime<Utc>>,
}

impl Plant {
    /// A freshly added plant: new id, never watered.
    pub fn new(
        name: impl Into<String>,
        room: Room,
        light: Light,
        watering_days: WateringDays,
        water: WaterAmount,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            room,
            light,
            watering_days,
            water,
            is_watered: false,
            last_watered_at: None,
        }
    }

    /// True iff the last watering falls on the current calendar day in
    /// device-local time.
    pub fn is_watered_today(&self) -> bool {
        self.watered_on(Local::now().date_naive())
    }

    pub(crate) fn watered_on(&self, day: NaiveDate) -> bool {
        match self.last_watered_at {
            Some(ts) => ts.with_timezone(&Local).date_naive() == day,
            None => false,
        }
    }
}
