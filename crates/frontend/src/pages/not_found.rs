//! 404 page

use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50 dark:bg-gray-900">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white mb-2">{"404"}</h1>
            <p class="text-gray-600 dark:text-gray-400 mb-6">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="text-emerald-600 dark:text-emerald-400 hover:underline">
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
