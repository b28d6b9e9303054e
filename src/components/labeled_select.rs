use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub label: AttrValue,
    pub value: i32,
}

impl SelectOption {
    pub fn new(label: impl Into<AttrValue>, value: i32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Maps the raw `<select>` value back to one of `options`
pub fn option_value(options: &[SelectOption], raw: &str) -> Option<i32> {
    let value = raw.trim().parse::<i32>().ok()?;
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.value)
}

#[derive(Properties, PartialEq)]
pub struct LabeledSelectProps {
    pub label: AttrValue,
    pub options: Vec<SelectOption>,
    /// `None` shows the placeholder
    pub value: Option<i32>,
    pub on_change: Callback<i32>,
    #[prop_or(AttrValue::Static("Select an option"))]
    pub placeholder: AttrValue,
}

#[function_component(LabeledSelect)]
pub fn labeled_select(props: &LabeledSelectProps) -> Html {
    let onchange = {
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                match option_value(&options, &select.value()) {
                    Some(value) => on_change.emit(value),
                    None => log::warn!("⚠️ Unknown select value '{}'", select.value()),
                }
            }
        })
    };

    html! {
        <label class="labeled-select">
            <span class="labeled-select-label">{props.label.clone()}</span>
            <select {onchange}>
                if props.value.is_none() {
                    <option value="" disabled=true selected=true>{props.placeholder.clone()}</option>
                }
                { for props.options.iter().map(|option| html! {
                    <option
                        key={option.value}
                        value={option.value.to_string()}
                        selected={props.value == Some(option.value)}
                    >
                        {option.label.clone()}
                    </option>
                }) }
            </select>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![SelectOption::new("One", 1), SelectOption::new("Two", 2)]
    }

    #[test]
    fn known_values_are_accepted() {
        assert_eq!(option_value(&options(), "2"), Some(2));
        assert_eq!(option_value(&options(), " 1 "), Some(1));
    }

    #[test]
    fn placeholder_and_foreign_values_are_rejected() {
        assert_eq!(option_value(&options(), ""), None);
        assert_eq!(option_value(&options(), "3"), None);
        assert_eq!(option_value(&options(), "Two"), None);
    }
}
