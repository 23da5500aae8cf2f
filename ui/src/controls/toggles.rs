use dioxus::prelude::*;

use crate::core::config::{ExplorerConfig, ToggleOption};
use crate::core::selection::SelectionState;
use crate::core::session::SelectionChange;

/// One rendered option button of an attribute's switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButton {
    pub label: String,
    pub token: String,
    pub code: u32,
    pub active: bool,
}

/// Buttons for one attribute; the one holding the selected code is active.
pub fn switcher_buttons(
    attribute: &str,
    selection: &SelectionState,
    options: &[ToggleOption],
) -> Vec<ToggleButton> {
    let current = selection.code(attribute);
    options
        .iter()
        .map(|opt| ToggleButton {
            label: opt.label.clone(),
            token: opt.token.clone(),
            code: opt.code,
            active: current == Some(opt.code),
        })
        .collect()
}

#[component]
pub fn AttributeToggles(
    config: ExplorerConfig,
    selection: SelectionState,
    on_select: EventHandler<SelectionChange>,
) -> Element {
    rsx! {
        for attribute in config.attributes.iter().cloned() {
            {render_attribute(
                switcher_buttons(&attribute, &selection, &config.options),
                attribute,
                on_select,
            )}
        }
    }
}

fn render_attribute(
    buttons: Vec<ToggleButton>,
    attribute: String,
    on_select: EventHandler<SelectionChange>,
) -> Element {
    rsx! {
        div { key: "{attribute}", class: "attribute",
            div { class: "attribute-label", "{attribute}" }
            div { class: "option-switcher", role: "group", aria_label: "{attribute}",
                for button in buttons.into_iter() {
                    {render_option(button, attribute.clone(), on_select)}
                }
            }
        }
    }
}

fn render_option(
    button: ToggleButton,
    attribute: String,
    on_select: EventHandler<SelectionChange>,
) -> Element {
    let ToggleButton {
        label,
        token,
        code,
        active,
    } = button;

    rsx! {
        button {
            r#type: "button",
            class: if active { "option option--active" } else { "option" },
            "data-value": "{token}",
            aria_pressed: "{active}",
            onclick: move |_| {
                on_select.call(SelectionChange {
                    attribute: attribute.clone(),
                    code,
                })
            },
            "{label}"
        }
    }
}
