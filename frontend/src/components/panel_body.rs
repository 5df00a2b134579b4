use leptos::*;

fn body_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("accordion-body {}", extra),
        _ => "accordion-body".to_string(),
    }
}

/// Hideable body of a panel, indented past the caret.
#[component]
pub fn PanelBody(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = body_class(class.as_deref());

    view! {
        <div
            class=full_class
            style="display: flex; flex-direction: column; align-items: flex-start; padding: var(--padding) calc(var(--padding) + var(--arrow));"
        >
            {children()}
        </div>
    }
}
