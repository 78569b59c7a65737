use serde::{Deserialize, Serialize};

/// Where the plant lives. The raw tags are the on-disk representation and
/// must stay stable across releases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Room {
    Bedroom,
    LivingRoom,
    Kitchen,
    Balcony,
    Bathroom,
}

impl Room {
    /// Picker rows in display order.
    pub const ALL: [Room; 5] = [
        Room::Bedroom,
        Room::LivingRoom,
        Room::Kitchen,
        Room::Balcony,
        Room::Bathroom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Room::Bedroom => "Bedroom",
            Room::LivingRoom => "Living Room",
            Room::Kitchen => "Kitchen",
            Room::Balcony => "Balcony",
            Room::Bathroom => "Bathroom",
        }
    }
}

impl Default for Room {
    fn default() -> Self {
        Room::Bedroom
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Light {
    FullSun,
    PartialSun,
    LowLight,
}

impl Light {
    pub const ALL: [Light; 3] = [Light::FullSun, Light::PartialSun, Light::LowLight];

    pub fn label(&self) -> &'static str {
        match self {
            Light::FullSun => "Full Sun",
            Light::PartialSun => "Partial Sun",
            Light::LowLight => "Low Light",
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Light::FullSun
    }
}

/// Watering cadence. Each variant maps to a fixed interval in days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WateringDays {
    EveryDay,
    Every2Days,
    Every3Days,
    OnceAWeek,
    Every10Days,
    Every2Weeks,
}

impl WateringDays {
    pub const ALL: [WateringDays; 6] = [
        WateringDays::EveryDay,
        WateringDays::Every2Days,
        WateringDays::Every3Days,
        WateringDays::OnceAWeek,
        WateringDays::Every10Days,
        WateringDays::Every2Weeks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WateringDays::EveryDay => "Every day",
            WateringDays::Every2Days => "Every 2 days",
            WateringDays::Every3Days => "Every 3 days",
            WateringDays::OnceAWeek => "Once a week",
            WateringDays::Every10Days => "Every 10 days",
            WateringDays::Every2Weeks => "Every 2 weeks",
        }
    }

    pub fn interval_days(&self) -> u32 {
        match self {
            WateringDays::EveryDay => 1,
            WateringDays::Every2Days => 2,
            WateringDays::Every3Days => 3,
            WateringDays::OnceAWeek => 7,
            WateringDays::Every10Days => 10,
            WateringDays::Every2Weeks => 14,
        }
    }
}

impl Default for WateringDays {
    fn default() -> Self {
        WateringDays::EveryDay
    }
}

/// How much water one session takes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WaterAmount {
    Ml20to50,
    Ml50to100,
    Ml100to200,
    Ml200to300,
}

impl WaterAmount {
    pub const ALL: [WaterAmount; 4] = [
        WaterAmount::Ml20to50,
        WaterAmount::Ml50to100,
        WaterAmount::Ml100to200,
        WaterAmount::Ml200to300,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WaterAmount::Ml20to50 => "20–50 ml",
            WaterAmount::Ml50to100 => "50–100 ml",
            WaterAmount::Ml100to200 => "100–200 ml",
            WaterAmount::Ml200to300 => "200–300 ml",
        }
    }
}

impl Default for WaterAmount {
    fn default() -> Self {
        WaterAmount::Ml20to50
    }
}
