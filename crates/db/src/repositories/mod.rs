//! One repository per table. Each is a unit struct whose associated functions
//! take the pool explicitly.

mod event_repo;
mod event_setting_repo;
mod gallery_repo;
mod hero_settings_repo;
mod sponsor_repo;

pub use event_repo::EventRepo;
pub use event_setting_repo::EventSettingRepo;
pub use gallery_repo::GalleryRepo;
pub use hero_settings_repo::HeroSettingsRepo;
pub use sponsor_repo::SponsorRepo;
