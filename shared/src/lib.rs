pub mod config;
pub mod controller;
pub mod error;
pub mod types;

pub use config::{AccordionConfig, IconPosition, IconStyle};
pub use controller::{
    AccordionController, CollapsibleHandle, PanelEntry, PanelFragment, PanelRegistry,
    ToggleOutcome,
};
pub use error::{ConfigError, HandleError};
pub use types::{PanelId, PanelState};
