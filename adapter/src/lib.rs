pub mod database;
pub mod notifier;
pub mod recognizer;
pub mod repository;
