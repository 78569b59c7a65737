use serde::Serialize;
use uuid::Uuid;

use crate::models::Plant;

/// Change notifications emitted by the store after a mutation has been
/// applied and saved. Shaped for forwarding straight to a UI bridge.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StoreEvent {
    PlantAdded { plant: Plant },
    PlantUpdated { plant: Plant },
    PlantsRemoved { ids: Vec<Uuid> },
    WateredToggled { id: Uuid, is_watered: bool },
    DailyStateRefreshed { cleared: usize },
}
