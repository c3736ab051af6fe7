//! Reusable components

mod button;
mod card;
mod confidence_meter;
mod dark_mode_toggle;
mod file_upload;
mod footer;
mod heatmap_overlay;
mod nav;
mod progress_bar;
mod tabs;
mod video_player;

pub use button::Button;
pub use card::Card;
pub use confidence_meter::ConfidenceMeter;
pub use dark_mode_toggle::DarkModeToggle;
pub use file_upload::FileUpload;
pub use footer::Footer;
pub use heatmap_overlay::HeatmapOverlay;
pub use nav::Navbar;
pub use progress_bar::ProgressBar;
pub use tabs::Tabs;
pub use video_player::VideoPlayer;
