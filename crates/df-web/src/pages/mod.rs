//! Page components

mod about;
mod help;
mod landing;
mod news;
mod results;
mod upload;

pub use about::AboutPage;
pub use help::HelpPage;
pub use landing::LandingPage;
pub use news::NewsPage;
pub use results::ResultsPage;
pub use upload::UploadPage;
