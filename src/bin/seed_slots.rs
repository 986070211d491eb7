//! One-shot seeding of the facility layout: three levels, rows A through D,
//! nine slots per row. Safe to re-run; existing slots are left untouched.

use adapter::database::connect_database_with;
use adapter::repository::slot::SlotRepositoryImpl;
use anyhow::Result;
use kernel::model::id::SlotId;
use kernel::model::slot::event::CreateSlot;
use kernel::repository::slot::SlotRepository;
use shared::config::AppConfig;

const LEVELS: [(&str, &str); 3] = [("basement", "sub"), ("level-1", "L1"), ("level-2", "L2")];
const ROWS: [char; 4] = ['A', 'B', 'C', 'D'];
const SLOTS_PER_ROW: u32 = 9;

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = AppConfig::new()?;
    let pool = connect_database_with(&app_config.database);
    let repository = SlotRepositoryImpl::new(pool);

    let mut seeded = 0u32;
    for (level, prefix) in LEVELS {
        for row in ROWS {
            for number in 1..=SLOTS_PER_ROW {
                let slot_id = SlotId::new(format!("{prefix}_{row}{number}"));
                repository
                    .create(CreateSlot::new(slot_id, level.to_string(), true))
                    .await?;
                seeded += 1;
            }
        }
    }

    println!("seeded {seeded} slots");
    Ok(())
}
