// ============================================================================
// USE AUTHORIZATION HOOK - session flags for the shell
// ============================================================================
// Delegates the async work to SessionViewModel
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::auth::AuthorizationClient;
use crate::state::{SessionAction, SessionState};
use crate::viewmodels::SessionViewModel;

#[derive(Clone)]
pub struct UseAuthorizationHandle {
    pub state: UseReducerHandle<SessionState>,
    pub login: Callback<()>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_authorization(client: Rc<AuthorizationClient>) -> UseAuthorizationHandle {
    let vm = use_memo((), move |_| SessionViewModel::new(client));
    let state = {
        let vm = vm.clone();
        use_reducer(move || vm.initial_state())
    };

    // Restore an existing session on mount
    {
        let state = state.clone();
        let vm = vm.clone();
        use_effect_with((), move |_| {
            let vm = (*vm).clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(action) = vm.restore_session().await {
                    state.dispatch(action);
                }
            });
            || ()
        });
    }

    let login = {
        let state = state.clone();
        let vm = vm.clone();
        Callback::from(move |_| {
            state.dispatch(SessionAction::LoginStarted);
            let state = state.clone();
            let vm = (*vm).clone();
            wasm_bindgen_futures::spawn_local(async move {
                state.dispatch(vm.login().await);
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            state.dispatch(SessionAction::LogoutStarted);
            let state = state.clone();
            let vm = (*vm).clone();
            wasm_bindgen_futures::spawn_local(async move {
                state.dispatch(vm.logout().await);
            });
        })
    };

    UseAuthorizationHandle {
        state,
        login,
        logout,
    }
}
