//! Global authentication context and provider

use crate::config::AppConfig;
use std::rc::Rc;
use web_sys::Storage;
use yew::prelude::*;

/// Authentication state shared across the tab
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthContextData {
    /// Session token, empty when unauthenticated
    pub token: String,
    /// True once the token has been read from storage in this page lifetime
    pub loaded: bool,
}

impl AuthContextData {
    /// Whether a session token is present
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Authentication context actions
pub enum AuthAction {
    /// Read the persisted token into memory, once
    Load,
    /// Set the token and write it through to storage
    SetToken(String),
    /// Clear the session
    Logout,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Load => {
                if self.loaded {
                    return self;
                }

                // Outside a browser context there is nothing to read from;
                // leave the state untouched instead of marking it loaded.
                let Some(storage) = local_storage() else {
                    return self;
                };

                let token = storage
                    .get_item(AppConfig::AUTH_TOKEN_KEY)
                    .ok()
                    .flatten()
                    .unwrap_or_default();

                Rc::new(Self {
                    token,
                    loaded: true,
                })
            }
            AuthAction::SetToken(token) => {
                // Keep storage in sync with memory: persist non-empty
                // tokens, delete the slot for empty ones.
                if let Some(storage) = local_storage() {
                    if token.is_empty() {
                        let _ = storage.remove_item(AppConfig::AUTH_TOKEN_KEY);
                    } else {
                        let _ = storage.set_item(AppConfig::AUTH_TOKEN_KEY, &token);
                    }
                }

                Rc::new(Self {
                    token,
                    loaded: self.loaded,
                })
            }
            AuthAction::Logout => self.reduce(AuthAction::SetToken(String::new())),
        }
    }
}

/// Get localStorage
fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Read the persisted token once on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            auth_state.dispatch(AuthAction::Load);
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}


// Storage-backed behavior needs a browser; run with `wasm-pack test --headless`
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trips_through_storage() {
        let state = Rc::new(AuthContextData::default());
        let state = state.reduce(AuthAction::SetToken("tok-1".into()));
        assert!(state.is_authenticated());

        // A fresh page load reads the persisted token back
        let reloaded = Rc::new(AuthContextData::default()).reduce(AuthAction::Load);
        assert_eq!(reloaded.token, "tok-1");
        assert!(reloaded.loaded);

        // Logout deletes the slot so the next load yields empty
        let state = state.reduce(AuthAction::Logout);
        assert!(!state.is_authenticated());

        let reloaded = Rc::new(AuthContextData::default()).reduce(AuthAction::Load);
        assert_eq!(reloaded.token, "");
        assert!(reloaded.loaded);
    }

    #[wasm_bindgen_test]
    fn load_is_idempotent() {
        let storage = local_storage().unwrap();
        let _ = storage.set_item(AppConfig::AUTH_TOKEN_KEY, "tok-2");

        let state = Rc::new(AuthContextData::default()).reduce(AuthAction::Load);
        assert_eq!(state.token, "tok-2");

        // A second load after the slot changed must not re-read
        let _ = storage.set_item(AppConfig::AUTH_TOKEN_KEY, "tok-3");
        let state = state.reduce(AuthAction::Load);
        assert_eq!(state.token, "tok-2");

        let _ = storage.remove_item(AppConfig::AUTH_TOKEN_KEY);
    }
}
