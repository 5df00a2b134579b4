use accordion_shared::{CollapsibleHandle, PanelState};
use leptos::*;

use super::accordion::{DetailsHandle, PanelScope};

pub(crate) const PANEL_STYLE: &str =
    "--padding: 8px; --arrow: 16px; --arrow-color: dodgerblue; display: flex; flex-direction: column;";

/// One collapsible section backed by a native `<details>` element.
///
/// Registers its element with the accordion once mounted and reports
/// every native toggle back to it.
#[component]
pub fn Panel(
    panel: PanelScope,
    #[prop(optional)] open: bool,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("accordion-panel {}", extra)
    } else {
        "accordion-panel".to_string()
    };

    let details_ref = create_node_ref::<html::Details>();
    let handle = DetailsHandle::new(details_ref);
    panel.open.set(open);

    let PanelScope { api, id, open: open_state } = panel;
    let id = store_value(id);

    details_ref.on_load(move |_| {
        id.with_value(|id| api.register_element(id, handle));
    });

    on_cleanup(move || {
        id.try_with_value(|id| api.unregister(id));
    });

    let on_toggle = move |_: ev::Event| {
        if let Some(is_open) = handle.is_open() {
            open_state.set(is_open);
        }
        id.with_value(|id| api.notify_toggled(id));
    };

    let state = move || PanelState::from_open(open_state.get()).to_string();

    view! {
        <details
            node_ref=details_ref
            id=id.with_value(|id| id.to_string())
            class=full_class
            style=PANEL_STYLE
            open=open
            data-state=state
            on:toggle=on_toggle
        >
            {children()}
        </details>
    }
}
