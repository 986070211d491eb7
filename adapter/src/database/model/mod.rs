pub mod parking;
pub mod plate;
pub mod reservation;
pub mod slot;
