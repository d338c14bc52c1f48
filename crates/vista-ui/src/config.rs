use vista_engine::coords::Viewport;
use vista_engine::logging::LoggingConfig;

/// Settings for a [`UiContext`](crate::context::UiContext).
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Size given to every pushed scene.
    pub display_size: Viewport,
    /// Name of the theme active at startup.
    pub theme: String,
    /// Class every style chain ends at.
    pub base_class: String,
    pub logging: LoggingConfig,
}

impl UiConfig {
    pub fn display_size(mut self, width: f32, height: f32) -> Self {
        self.display_size = Viewport::new(width, height);
        self
    }

    pub fn theme(mut self, name: impl Into<String>) -> Self {
        self.theme = name.into();
        self
    }

    pub fn base_class(mut self, class: impl Into<String>) -> Self {
        self.base_class = class.into();
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            display_size: Viewport::default(),
            theme: "dracula".to_string(),
            base_class: "View".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}
