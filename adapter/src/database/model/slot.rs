use kernel::model::id::SlotId;
use kernel::model::slot::Slot;

#[derive(sqlx::FromRow)]
pub struct SlotRow {
    pub slot_id: SlotId,
    pub level: String,
    pub is_available: bool,
}

impl From<SlotRow> for Slot {
    fn from(value: SlotRow) -> Self {
        let SlotRow {
            slot_id,
            level,
            is_available,
        } = value;
        Slot {
            slot_id,
            level,
            is_available,
        }
    }
}
