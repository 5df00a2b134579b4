use accordion_shared::IconPosition;
use leptos::*;

use super::accordion::{PanelScope, SummaryHandle};
use super::icon::CaretIcon;

const SUMMARY_STYLE: &str = "padding: 8px 0; text-align: left; border: 1px solid var(--arrow-color); display: flex; align-items: center; border-radius: 8px; cursor: pointer; user-select: none;";

/// Clickable header of a panel, with the caret on the configured side.
#[component]
pub fn Summary(panel: PanelScope, children: Children) -> impl IntoView {
    let summary_ref = create_node_ref::<html::Summary>();
    let PanelScope { api, id, open } = panel;

    summary_ref.on_load(move |_| {
        api.register_summary(&id, SummaryHandle::new(summary_ref));
    });

    let icon_style = api.config().icon;
    let icon = move || view! { <CaretIcon open=open style=icon_style /> };
    let label = view! { <span class="accordion-summary-label">{children()}</span> };

    let content = match icon_style.position {
        IconPosition::Leading => view! { {icon()} {label} }.into_view(),
        IconPosition::Trailing => view! {
            {label}
            <span style="margin-left: auto; display: flex;">{icon()}</span>
        }
        .into_view(),
    };

    view! {
        <summary node_ref=summary_ref class="accordion-summary" style=SUMMARY_STYLE>
            {content}
        </summary>
    }
}
