use yew::prelude::*;

use crate::hooks::DialogManager;
use crate::state::DialogStack;

#[derive(Properties, PartialEq)]
pub struct DialogLayerProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provides the DialogManager to `children` and renders the open dialogs
/// above them.
#[function_component(DialogLayer)]
pub fn dialog_layer(props: &DialogLayerProps) -> Html {
    let stack = use_reducer(DialogStack::<Html>::default);
    let manager = DialogManager::new(stack.clone());

    html! {
        <ContextProvider<DialogManager> context={manager}>
            { for props.children.iter() }
            <div class="modeless-dialogs">
                // Keyed so raising a dialog never remounts it
                { for stack.iter().map(|entry| html! {
                    <div key={entry.id.clone()} class="modeless-dialog-slot">
                        { entry.content.clone() }
                    </div>
                }) }
            </div>
        </ContextProvider<DialogManager>>
    }
}
