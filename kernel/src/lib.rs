pub mod model;
pub mod notifier;
pub mod recognizer;
pub mod repository;
