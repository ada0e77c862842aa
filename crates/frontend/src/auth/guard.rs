//! Route guard for authenticated pages

use super::context::{AuthAction, use_auth};
use crate::components::LoadingSpinner;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the navigation through
    Allow,
    /// Send the visitor to the login page
    RedirectToLogin,
}

/// Decide whether `route` may be shown with the current session
///
/// The login route is always allowed; everything else needs a token.
pub fn guard_outcome(route: &Route, authenticated: bool) -> GuardOutcome {
    if matches!(route, Route::Login) || authenticated {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Route guard props
#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    /// Destination being navigated to
    pub route: Route,
    pub children: Children,
}

/// Guard wrapper that redirects unauthenticated visitors to `/login`
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let is_client = navigator.is_some();

    // Make sure the persisted token has been read before judging the session
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            auth.dispatch(AuthAction::Load);
        });
    }

    let outcome = guard_outcome(&props.route, auth.is_authenticated());

    // Redirect outside of render
    {
        let loaded = auth.loaded;
        use_effect_with((outcome, loaded), move |(outcome, loaded)| {
            if *loaded && *outcome == GuardOutcome::RedirectToLogin {
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Login);
                }
            }
        });
    }

    // Without client-side navigation there is nothing to guard here
    if !is_client {
        return html! { <>{ props.children.clone() }</> };
    }

    if !auth.loaded {
        return html! {
            <div class="min-h-screen flex items-center justify-center">
                <LoadingSpinner text={Some("Checking authentication...".to_string())} />
            </div>
        };
    }

    match outcome {
        GuardOutcome::Allow => html! { <>{ props.children.clone() }</> },
        // The redirect effect is about to fire
        GuardOutcome::RedirectToLogin => html! {
            <div class="min-h-screen flex items-center justify-center">
                <LoadingSpinner />
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_route_is_always_allowed() {
        assert_eq!(guard_outcome(&Route::Login, false), GuardOutcome::Allow);
        assert_eq!(guard_outcome(&Route::Login, true), GuardOutcome::Allow);
    }

    #[test]
    fn unauthenticated_visitors_are_redirected() {
        assert_eq!(
            guard_outcome(&Route::Home, false),
            GuardOutcome::RedirectToLogin
        );
        assert_eq!(
            guard_outcome(&Route::NotFound, false),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn authenticated_visitors_pass_through() {
        assert_eq!(guard_outcome(&Route::Home, true), GuardOutcome::Allow);
        assert_eq!(guard_outcome(&Route::NotFound, true), GuardOutcome::Allow);
    }
}
