//! Login and registration page

use crate::auth::{AuthAction, use_auth};
use crate::router::Route;
use crate::services::AuthApiService;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let register_mode = use_state(|| false);
    let busy = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let notice = use_state(|| Option::<String>::None);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_toggle_mode = {
        let register_mode = register_mode.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            register_mode.set(!*register_mode);
            error.set(None);
            notice.set(None);
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let register_mode = register_mode.clone();
        let busy = busy.clone();
        let error = error.clone();
        let notice = notice.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *busy {
                return;
            }

            let email_value = (*email).clone();
            let password_value = (*password).clone();
            if email_value.is_empty() || password_value.is_empty() {
                return;
            }

            let auth = auth.clone();
            let navigator = navigator.clone();
            let register_mode = register_mode.clone();
            let busy = busy.clone();
            let error = error.clone();
            let notice = notice.clone();

            spawn_local(async move {
                busy.set(true);
                error.set(None);
                notice.set(None);

                let service = AuthApiService::new();

                if *register_mode {
                    match service.register(email_value, password_value).await {
                        Ok(()) => {
                            notice.set(Some("Account created. Sign in below.".to_string()));
                            register_mode.set(false);
                        }
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("Registration failed: {err}").into(),
                            );
                            error.set(Some(err.user_message("Registration failed")));
                        }
                    }
                } else {
                    match service.login(email_value, password_value).await {
                        Ok(token) => {
                            auth.dispatch(AuthAction::SetToken(token));
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Home);
                            }
                        }
                        Err(err) => {
                            web_sys::console::error_1(&format!("Login failed: {err}").into());
                            error.set(Some(err.user_message("Login failed")));
                        }
                    }
                }

                busy.set(false);
            });
        })
    };

    let submit_label = if *register_mode {
        "Create account"
    } else {
        "Sign in"
    };
    let toggle_label = if *register_mode {
        "Already have an account? Sign in"
    } else {
        "New here? Create an account"
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold bg-gradient-to-r from-emerald-600 to-teal-600 bg-clip-text text-transparent">
                        {"Lucrum"}
                    </h1>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{"Sign in to your bot dashboard"}</p>
                </div>
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8">
                    if let Some(notice) = &*notice {
                        <div class="mb-4 p-4 bg-emerald-50 dark:bg-emerald-900/20 rounded-lg">
                            <p class="text-sm text-emerald-800 dark:text-emerald-200">{notice}</p>
                        </div>
                    }
                    if let Some(error) = &*error {
                        <div class="mb-4 p-4 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg">
                            <p class="text-sm text-red-800 dark:text-red-200">{error}</p>
                        </div>
                    }
                    <form onsubmit={on_submit}>
                        <div class="mb-4">
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                {"Email"}
                            </label>
                            <input
                                type="email"
                                class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-emerald-500 focus:border-transparent"
                                placeholder="trader@example.com"
                                value={(*email).clone()}
                                oninput={on_email_input}
                                required=true
                            />
                        </div>
                        <div class="mb-6">
                            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                {"Password"}
                            </label>
                            <input
                                type="password"
                                class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-emerald-500 focus:border-transparent"
                                value={(*password).clone()}
                                oninput={on_password_input}
                                required=true
                            />
                        </div>
                        <button
                            type="submit"
                            class="w-full px-4 py-2 bg-gradient-to-r from-emerald-600 to-teal-600 hover:from-emerald-700 hover:to-teal-700 text-white rounded-lg font-medium transition-all disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled={*busy}
                        >
                            if *busy {
                                {"Working..."}
                            } else {
                                {submit_label}
                            }
                        </button>
                    </form>
                    <div class="mt-6 text-center">
                        <button
                            onclick={on_toggle_mode}
                            class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100"
                        >
                            {toggle_label}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
