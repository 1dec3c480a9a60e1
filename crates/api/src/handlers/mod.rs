pub mod admin;
pub mod events;
pub mod gallery;
pub mod hero;
pub mod spa;
pub mod sponsors;
pub mod stats;
pub mod uploads;
