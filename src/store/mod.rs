mod events;

pub use events::StoreEvent;

use std::{
    path::{Path, PathBuf},
    sync::{
        mpsc::{self, Receiver, Sender},
        Mutex, RwLock,
    },
};

use anyhow::Result;
use chrono::{Local, Utc};
use log::info;
use uuid::Uuid;

use crate::{
    models::Plant,
    progress::DailyProgress,
    storage::{default_plant_file, PlantFile},
};

/// The authoritative in-memory plant list, kept in insertion/display order
/// and written through to a single JSON file on every mutation.
///
/// Each command applies its change in memory, saves the full list, and then
/// notifies subscribers. A failed save is returned to the caller; the
/// in-memory change stands, so callers wanting fire-and-forget behavior
/// discard the result explicitly.
pub struct PlantStore {
    file: PlantFile,
    plants: RwLock<Vec<Plant>>,
    subscribers: Mutex<Vec<Sender<StoreEvent>>>,
}

impl PlantStore {
    /// Open the store backed by `path`. An unreadable or corrupt file starts
    /// the list empty (logged, not fatal). Runs the daily refresh so stale
    /// checkmarks from earlier days are cleared before anyone reads.
    pub fn open(path: PathBuf) -> Result<Self> {
        let file = PlantFile::new(path)?;
        let plants = file.load_or_default();

        let store = Self {
            file,
            plants: RwLock::new(plants),
            subscribers: Mutex::new(Vec::new()),
        };
        store.refresh_daily_state()?;

        info!(
            "plant store opened at {} ({} plants)",
            store.file.path().display(),
            store.len()
        );
        Ok(store)
    }

    /// Open the store at its per-user default location.
    pub fn open_default() -> Result<Self> {
        Self::open(default_plant_file()?)
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    // ---- commands ----

    /// Append a plant. No uniqueness check beyond the generated id.
    pub fn add(&self, plant: Plant) -> Result<()> {
        let snapshot = {
            let mut plants = self.plants.write().unwrap();
            plants.push(plant.clone());
            plants.clone()
        };
        self.file.save(&snapshot)?;
        self.emit(StoreEvent::PlantAdded { plant });
        Ok(())
    }

    /// Replace the entry with a matching id, keeping its position. Returns
    /// whether a replacement happened; an absent id is a no-op.
    pub fn update(&self, plant: Plant) -> Result<bool> {
        let snapshot = {
            let mut plants = self.plants.write().unwrap();
            let Some(entry) = plants.iter_mut().find(|p| p.id == plant.id) else {
                return Ok(false);
            };
            *entry = plant.clone();
            plants.clone()
        };
        self.file.save(&snapshot)?;
        self.emit(StoreEvent::PlantUpdated { plant });
        Ok(true)
    }

    /// Delete by id. An absent id is a no-op.
    pub fn remove(&self, id: Uuid) -> Result<bool> {
        let snapshot = {
            let mut plants = self.plants.write().unwrap();
            let before = plants.len();
            plants.retain(|p| p.id != id);
            if plants.len() == before {
                return Ok(false);
            }
            plants.clone()
        };
        self.file.save(&snapshot)?;
        self.emit(StoreEvent::PlantsRemoved { ids: vec![id] });
        Ok(true)
    }

    /// Delete by display indices (the list's swipe-to-delete). Out-of-range
    /// and duplicate offsets are ignored; returns how many plants went away.
    pub fn remove_at(&self, offsets: &[usize]) -> Result<usize> {
        let (snapshot, removed_ids) = {
            let mut plants = self.plants.write().unwrap();
            let mut offsets: Vec<usize> = offsets
                .iter()
                .copied()
                .filter(|&i| i < plants.len())
                .collect();
            offsets.sort_unstable();
            offsets.dedup();

            let mut removed_ids = Vec::with_capacity(offsets.len());
            for &i in offsets.iter().rev() {
                removed_ids.push(plants.remove(i).id);
            }
            if removed_ids.is_empty() {
                return Ok(0);
            }
            removed_ids.reverse();
            (plants.clone(), removed_ids)
        };
        self.file.save(&snapshot)?;
        let count = removed_ids.len();
        self.emit(StoreEvent::PlantsRemoved { ids: removed_ids });
        Ok(count)
    }

    /// Check off a plant as watered now, or undo today's check-off if it is
    /// already watered today (clearing both flag and timestamp). Returns the
    /// new checkmark state, or `None` for an absent id.
    pub fn toggle_watered(&self, id: Uuid) -> Result<Option<bool>> {
        let (snapshot, is_watered) = {
            let mut plants = self.plants.write().unwrap();
            let Some(plant) = plants.iter_mut().find(|p| p.id == id) else {
                return Ok(None);
            };
            if plant.is_watered_today() {
                plant.is_watered = false;
                plant.last_watered_at = None;
            } else {
                plant.is_watered = true;
                plant.last_watered_at = Some(Utc::now());
            }
            let is_watered = plant.is_watered;
            (plants.clone(), is_watered)
        };
        self.file.save(&snapshot)?;
        self.emit(StoreEvent::WateredToggled { id, is_watered });
        Ok(Some(is_watered))
    }

    /// Clear checkmarks that have gone stale because a new day started:
    /// `is_watered` set but the last watering is no longer today. Leaves
    /// `last_watered_at` untouched. Runs on open; the embedder should also
    /// call it when the app returns to the foreground.
    pub fn refresh_daily_state(&self) -> Result<usize> {
        let (snapshot, cleared) = {
            let mut plants = self.plants.write().unwrap();
            let today = Local::now().date_naive();
            let mut cleared = 0;
            for plant in plants.iter_mut() {
                if plant.is_watered && !plant.watered_on(today) {
                    plant.is_watered = false;
                    cleared += 1;
                }
            }
            if cleared == 0 {
                return Ok(0);
            }
            (plants.clone(), cleared)
        };
        self.file.save(&snapshot)?;
        self.emit(StoreEvent::DailyStateRefreshed { cleared });
        Ok(cleared)
    }

    // ---- reads ----

    /// Snapshot clone of the list in display order.
    pub fn plants(&self) -> Vec<Plant> {
        self.plants.read().unwrap().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Plant> {
        self.plants.read().unwrap().iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.plants.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.read().unwrap().is_empty()
    }

    /// Plants watered today.
    pub fn completed_count(&self) -> usize {
        self.progress().completed
    }

    pub fn progress_value(&self) -> f64 {
        self.progress().value
    }

    pub fn status_line(&self) -> String {
        self.progress().status_line
    }

    pub fn is_all_done(&self) -> bool {
        self.progress().all_done
    }

    pub fn progress(&self) -> DailyProgress {
        DailyProgress::for_plants(&self.plants.read().unwrap())
    }

    // ---- events ----

    /// Register for change notifications. Dropped receivers are pruned on the
    /// next emit.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }

    fn emit(&self, event: StoreEvent) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
