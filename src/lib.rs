pub mod api;
pub mod carousel;
pub mod config;
pub mod interpret;
pub mod store;
pub mod theme;
pub mod topic;
pub mod types;

#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod ui;
#[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
pub mod views;
