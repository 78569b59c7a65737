use serde::Serialize;

use crate::models::Plant;

/// Snapshot of today's watering progress, shaped for direct UI binding.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgress {
    pub completed: usize,
    pub total: usize,
    /// `completed / total`, or 0 for an empty list.
    pub value: f64,
    pub status_line: String,
    pub all_done: bool,
}

impl DailyProgress {
    pub fn for_plants(plants: &[Plant]) -> Self {
        let total = plants.len();
        let completed = plants.iter().filter(|p| p.is_watered_today()).count();
        let value = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64
        };

        Self {
            completed,
            total,
            value,
            status_line: status_line(completed),
            all_done: total > 0 && completed == total,
        }
    }
}

pub(crate) fn status_line(completed: usize) -> String {
    if completed == 0 {
        "Your plants are waiting for a sip 💦".to_string()
    } else {
        format!("{completed} of your plants feel loved today ✨")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Light, Room, WaterAmount, WateringDays};
    use chrono::Utc;

    fn plant(watered_now: bool) -> Plant {
        let mut plant = Plant::new(
            "Cactus",
            Room::Balcony,
            Light::FullSun,
            WateringDays::Every2Weeks,
            WaterAmount::Ml20to50,
        );
        if watered_now {
            plant.is_watered = true;
            plant.last_watered_at = Some(Utc::now());
        }
        plant
    }

    #[test]
    fn empty_list_has_zero_progress() {
        let progress = DailyProgress::for_plants(&[]);
        assert_eq!(progress.completed, 0);
        assert_eq!(progress.value, 0.0);
        assert!(!progress.all_done);
    }

    #[test]
    fn partial_progress_is_a_fraction() {
        let progress = DailyProgress::for_plants(&[plant(true), plant(false)]);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.value, 0.5);
        assert!(!progress.all_done);
    }

    #[test]
    fn all_done_only_when_every_plant_is_watered() {
        let progress = DailyProgress::for_plants(&[plant(true), plant(true)]);
        assert_eq!(progress.value, 1.0);
        assert!(progress.all_done);
    }

    #[test]
    fn status_line_has_two_variants() {
        assert_eq!(status_line(0), "Your plants are waiting for a sip 💦");
        assert_eq!(status_line(3), "3 of your plants feel loved today ✨");
    }
}
