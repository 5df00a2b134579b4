pub mod accordion;
pub mod icon;
pub mod panel;
pub mod panel_body;
pub mod summary;

pub use accordion::{AccordionApi, AccordionGroup, DetailsHandle, PanelScope, SummaryHandle};
pub use icon::CaretIcon;
pub use panel::Panel;
pub use panel_body::PanelBody;
pub use summary::Summary;
