//! Application context
//!
//! Built once in [`crate::app::App`] and passed to each page as a prop.

use df_core::{AppConfig, PayloadSlot, Theme};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub theme: RwSignal<Theme>,
    /// Upload page writes, results page takes
    pub results: PayloadSlot,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let theme = create_rw_signal(config.theme);
        tracing::info!(
            "App context ready (api {}, max {} files, {} theme)",
            config.api_base,
            config.max_files,
            config.theme
        );
        Self {
            config: Rc::new(config),
            theme,
            results: PayloadSlot::new(),
        }
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }
}
