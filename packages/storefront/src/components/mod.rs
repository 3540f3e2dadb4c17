pub mod card;
pub mod chrome;
pub mod detail;
pub mod home;
pub mod icons;
pub mod related;
pub mod shell;
pub mod tabs;
