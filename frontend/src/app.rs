use accordion_shared::AccordionConfig;
use leptos::*;

use crate::components::{AccordionApi, AccordionGroup, Panel, PanelBody, Summary};

const TRAILING_VARIANT: &str = r#"{
    "exclusive_open": true,
    "gap": "16px",
    "icon": { "position": "trailing", "rotation_deg": 180 }
}"#;

fn trailing_variant() -> AccordionConfig {
    AccordionConfig::from_json(TRAILING_VARIANT).unwrap_or_else(|e| {
        log::warn!("falling back to default accordion config: {}", e);
        AccordionConfig::exclusive()
    })
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="App">
            <DemoAccordion config=AccordionConfig::exclusive().with_gap("8px") />
            <DemoAccordion config=trailing_variant() />
        </div>
    }
}

/// Three panels sharing one exclusive-open accordion.
#[component]
fn DemoAccordion(config: AccordionConfig) -> impl IntoView {
    let api = AccordionApi::new(config);

    let panels = (0..3)
        .map(|_| {
            let panel = api.panel();
            let summary_panel = panel.clone();
            view! {
                <Panel panel=panel>
                    <Summary panel=summary_panel>"hi"</Summary>
                    <PanelBody>"hello"</PanelBody>
                </Panel>
            }
        })
        .collect_view();

    view! {
        <AccordionGroup api=api>
            {panels}
        </AccordionGroup>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accordion_shared::IconStyle;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_trailing_variant_parses() {
        let config = trailing_variant();
        assert!(config.exclusive_open);
        assert_eq!(config.gap, "16px");
        assert_eq!(config.icon, IconStyle::trailing(180));
    }
}
