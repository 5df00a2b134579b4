use accordion_shared::{IconStyle, PanelState};
use leptos::*;

const CARET_PATH: &str = "m12.14 8.753-5.482 4.796c-.646.566-1.658.106-1.658-.753V3.204a1 1 0 0 1 1.659-.753l5.48 4.796a1 1 0 0 1 0 1.506z";

pub(crate) fn icon_style_attr(style: &IconStyle, state: PanelState) -> String {
    format!(
        "width: var(--arrow); height: auto; padding: 0 8px; transform: {};",
        style.transform(state)
    )
}

/// Caret that rotates while its panel is open. Purely presentational.
#[component]
pub fn CaretIcon(
    #[prop(into)] open: Signal<bool>,
    #[prop(optional)] style: IconStyle,
) -> impl IntoView {
    let style_attr = move || icon_style_attr(&style, PanelState::from_open(open.get()));

    view! {
        <svg
            class="accordion-icon"
            style=style_attr
            xmlns="http://www.w3.org/2000/svg"
            width="16"
            height="16"
            fill="var(--arrow-color)"
            viewBox="0 0 16 16"
        >
            <path d=CARET_PATH />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_icon_rotation() {
        let style = IconStyle::leading(90);
        assert!(icon_style_attr(&style, PanelState::Open).ends_with("transform: rotate(90deg);"));
        assert!(icon_style_attr(&style, PanelState::Closed).ends_with("transform: rotate(0deg);"));
    }

    #[wasm_bindgen_test]
    fn test_trailing_icon_rotation() {
        let style = IconStyle::trailing(180);
        assert!(icon_style_attr(&style, PanelState::Open).contains("rotate(180deg)"));
    }
}
