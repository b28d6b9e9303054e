use yew::prelude::*;

use super::labeled_select::{LabeledSelect, SelectOption};
use super::modeless_dialog::{DialogButton, ModelessDialog};
use crate::hooks::use_dialog_manager;

pub const EXAMPLE_POPUP_ID: &str = "example-popup";

pub fn popup_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("Option1", 1),
        SelectOption::new("Option2", 2),
        SelectOption::new("Option3", 3),
    ]
}

#[function_component(ExamplePopupDialog)]
pub fn example_popup_dialog() -> Html {
    let manager = use_dialog_manager();
    // Lives as long as the dialog stays mounted
    let selected = use_state(|| None::<i32>);

    let close = Callback::from(move |_| {
        if let Some(manager) = &manager {
            manager.close_dialog(EXAMPLE_POPUP_ID);
        }
    });

    let on_change = {
        let selected = selected.clone();
        Callback::from(move |value: i32| {
            log::debug!("Popup selection: {}", value);
            selected.set(Some(value));
        })
    };

    html! {
        <ModelessDialog
            id={EXAMPLE_POPUP_ID}
            title="Popup Example"
            width={450}
            height={220}
            movable=true
            on_close={close.clone()}
            buttons={vec![DialogButton::ok(close)]}
        >
            <LabeledSelect
                label="Select label"
                options={popup_options()}
                value={*selected}
                {on_change}
            />
        </ModelessDialog>
    }
}

#[derive(Properties, PartialEq)]
pub struct OpenPopupButtonProps {
    #[prop_or(AttrValue::Static("Open Popup"))]
    pub label: AttrValue,
}

/// Opens the example popup. The popup closes when this button unmounts.
#[function_component(OpenPopupButton)]
pub fn open_popup_button(props: &OpenPopupButtonProps) -> Html {
    let manager = use_dialog_manager();

    {
        let manager = manager.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(manager) = manager {
                    manager.close_dialog(EXAMPLE_POPUP_ID);
                }
            }
        });
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(manager) = &manager {
            manager.open_dialog(EXAMPLE_POPUP_ID, html! { <ExamplePopupDialog /> });
        }
    });

    html! {
        <button class="btn-open-popup" {onclick}>
            <span>{props.label.clone()}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::labeled_select::option_value;

    #[test]
    fn popup_has_three_fixed_options() {
        let labels: Vec<_> = popup_options()
            .into_iter()
            .map(|option| (option.label.to_string(), option.value))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Option1".to_string(), 1),
                ("Option2".to_string(), 2),
                ("Option3".to_string(), 3),
            ]
        );
    }

    #[test]
    fn choosing_option2_selects_two() {
        let options = popup_options();
        let option2 = options
            .iter()
            .find(|option| option.label.as_str() == "Option2")
            .unwrap();
        assert_eq!(option_value(&options, &option2.value.to_string()), Some(2));
    }
}
