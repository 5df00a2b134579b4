use accordion_shared::{
    AccordionConfig, AccordionController, CollapsibleHandle, HandleError, PanelFragment, PanelId,
    ToggleOutcome,
};
use leptos::*;
use uuid::Uuid;

/// Handle to a panel's `<details>` element.
#[derive(Clone, Copy)]
pub struct DetailsHandle(NodeRef<html::Details>);

impl DetailsHandle {
    pub fn new(node_ref: NodeRef<html::Details>) -> Self {
        Self(node_ref)
    }
}

impl CollapsibleHandle for DetailsHandle {
    fn is_open(&self) -> Option<bool> {
        self.0.get_untracked().map(|details| details.open())
    }

    fn force_close(&self) -> Result<(), HandleError> {
        let details = self.0.get_untracked().ok_or(HandleError::Unresolved)?;
        details.set_open(false);
        Ok(())
    }
}

/// Handle to a panel's `<summary>` element, for callers that need the
/// header itself (focus, scrolling).
#[derive(Clone, Copy)]
pub struct SummaryHandle(pub NodeRef<html::Summary>);

impl SummaryHandle {
    pub fn new(node_ref: NodeRef<html::Summary>) -> Self {
        Self(node_ref)
    }
}

type Controller = AccordionController<DetailsHandle, SummaryHandle>;

/// Copyable access to one accordion's controller.
///
/// Created by the owner of the accordion and passed explicitly to the
/// group and to every panel.
#[derive(Clone, Copy)]
pub struct AccordionApi {
    controller: StoredValue<Controller>,
    prefix: StoredValue<String>,
    next_id: StoredValue<usize>,
}

impl AccordionApi {
    /// Invalid presentation settings are replaced by their defaults.
    pub fn new(config: AccordionConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("invalid accordion config, using default styling: {}", e);
                AccordionConfig::default().with_exclusive_open(config.exclusive_open)
            }
        };
        let instance = Uuid::new_v4().simple().to_string();
        Self {
            controller: store_value(AccordionController::new(config)),
            prefix: store_value(format!("accordion-{}", &instance[..8])),
            next_id: store_value(0),
        }
    }

    pub fn config(&self) -> AccordionConfig {
        self.controller.with_value(|controller| controller.config().clone())
    }

    /// Unique id for a new panel of this accordion.
    pub fn next_panel_id(&self) -> PanelId {
        let index = self.next_id.with_value(|n| *n);
        self.next_id.set_value(index + 1);
        PanelId::from(format!("{}-panel-{}", self.prefix.get_value(), index))
    }

    /// Scope for a new panel with a generated id.
    pub fn panel(&self) -> PanelScope {
        self.panel_with_id(self.next_panel_id())
    }

    pub fn panel_with_id(&self, id: impl Into<PanelId>) -> PanelScope {
        PanelScope {
            api: *self,
            id: id.into(),
            open: create_rw_signal(false),
        }
    }

    pub fn register_element(&self, id: &PanelId, handle: DetailsHandle) {
        self.controller
            .update_value(|controller| controller.register(id.clone(), PanelFragment::element(handle)));
    }

    pub fn register_summary(&self, id: &PanelId, handle: SummaryHandle) {
        self.controller
            .update_value(|controller| controller.register(id.clone(), PanelFragment::summary(handle)));
    }

    /// No-op once the accordion itself has been disposed.
    pub fn unregister(&self, id: &PanelId) {
        self.controller
            .try_update_value(|controller| controller.unregister(id));
    }

    pub fn notify_toggled(&self, id: &PanelId) -> ToggleOutcome {
        self.controller
            .try_update_value(|controller| controller.notify_toggled(id))
            .unwrap_or_default()
    }
}

/// Everything a panel and its summary need: the accordion, the panel id and
/// the panel's reactive open state.
#[derive(Clone)]
pub struct PanelScope {
    pub api: AccordionApi,
    pub id: PanelId,
    pub open: RwSignal<bool>,
}

pub(crate) fn group_style(gap: &str) -> String {
    format!("display: flex; flex-direction: column; gap: {};", gap)
}

/// Vertical group of collapsible panels sharing one controller.
#[component]
pub fn AccordionGroup(
    api: AccordionApi,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("accordion {}", extra)
    } else {
        "accordion".to_string()
    };

    let style = group_style(&api.config().gap);

    view! {
        <div class=full_class style=style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accordion_shared::IconStyle;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_group_style() {
        assert_eq!(
            group_style("8px"),
            "display: flex; flex-direction: column; gap: 8px;"
        );
    }

    #[wasm_bindgen_test]
    fn test_unmounted_details_handle_is_unresolved() {
        let runtime = create_runtime();

        let handle = DetailsHandle::new(create_node_ref::<html::Details>());
        assert_eq!(handle.is_open(), None);
        assert_eq!(handle.force_close(), Err(HandleError::Unresolved));

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_invalid_config_falls_back_to_default_styling() {
        let runtime = create_runtime();

        let api = AccordionApi::new(
            AccordionConfig::exclusive()
                .with_gap("wide")
                .with_icon(IconStyle::trailing(180)),
        );
        let config = api.config();

        assert!(config.exclusive_open);
        assert_eq!(config.gap, "0");
        assert_eq!(config.icon, IconStyle::default());

        let valid = AccordionApi::new(AccordionConfig::exclusive().with_gap("8px"));
        assert_eq!(valid.config().gap, "8px");

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_panel_ids_are_unique() {
        let runtime = create_runtime();

        let first = AccordionApi::new(AccordionConfig::exclusive());
        let second = AccordionApi::new(AccordionConfig::exclusive());
        let a = first.next_panel_id();
        let b = first.next_panel_id();
        let c = second.next_panel_id();

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert!(a.as_str().ends_with("-panel-0"));
        assert!(b.as_str().ends_with("-panel-1"));

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_unmounted_panels_are_skipped() {
        let runtime = create_runtime();

        let api = AccordionApi::new(AccordionConfig::exclusive());
        let a = api.panel_with_id("a");
        let b = api.panel_with_id("b");
        api.register_element(&a.id, DetailsHandle::new(create_node_ref()));
        api.register_element(&b.id, DetailsHandle::new(create_node_ref()));
        api.register_summary(&b.id, SummaryHandle::new(create_node_ref()));

        let outcome = api.notify_toggled(&a.id);
        assert!(outcome.closed.is_empty());
        assert_eq!(outcome.skipped, vec![b.id.clone()]);

        api.unregister(&b.id);
        assert!(api.notify_toggled(&a.id).is_noop());

        runtime.dispose();
    }
}
