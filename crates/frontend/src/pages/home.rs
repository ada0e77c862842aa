//! Authenticated dashboard landing page

use crate::auth::{AuthAction, use_auth};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| {
            auth.dispatch(AuthAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800">
            <nav class="bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between h-16 items-center">
                        <div class="flex items-center">
                            <h1 class="text-2xl font-bold bg-gradient-to-r from-emerald-600 to-teal-600 bg-clip-text text-transparent">
                                {"Lucrum"}
                            </h1>
                            <span class="ml-3 text-sm text-gray-500 dark:text-gray-400">{"Bot Dashboard"}</span>
                        </div>
                        <div class="flex items-center gap-4">
                            <button
                                onclick={on_logout}
                                class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100"
                            >
                                {"Sign Out"}
                            </button>
                        </div>
                    </div>
                </div>
            </nav>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-8">
                    <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">
                        {"Welcome back"}
                    </h2>
                    <p class="text-gray-600 dark:text-gray-400">
                        {"Your session is active. Bot activity and spread monitoring will appear here."}
                    </p>
                </div>
            </main>
        </div>
    }
}
