pub mod health;
pub mod parking;
pub mod plate;
pub mod reservation;
pub mod slot;
pub mod updates;
pub mod v1;
