use crate::auth::{AuthProvider, RouteGuard};
use crate::pages::{Home, Login, NotFound};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <Switch<Route> render={switch} />
            </AuthProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    let page = match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::NotFound => html! { <NotFound /> },
    };

    html! { <RouteGuard route={route}>{page}</RouteGuard> }
}
