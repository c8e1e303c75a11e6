use crate::{
    router::AppRoute,
    state::session::{use_session, SessionState},
};
use leptos::*;
use leptos_router::use_navigate;

fn navigate_to(target: AppRoute) {
    let navigate = use_navigate();
    navigate(target.path(), Default::default());
}

fn route_guard(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let allowed = create_memo(move |_| should_render_route(&state.get(), route));
    create_effect(move |_| {
        if let Some(target) = state.with(|state| redirect_target(state, route)) {
            log::debug!("{} is not available in this session", route.path());
            navigate_to(target);
        }
    });
    view! {
        <Show when=move || allowed.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

fn should_render_route(state: &SessionState, route: AppRoute) -> bool {
    state.resolve_route(route) == route
}

fn redirect_target(state: &SessionState, route: AppRoute) -> Option<AppRoute> {
    let target = state.resolve_route(route);
    (target != route).then_some(target)
}

#[component]
pub fn RequireEmployee(children: ChildrenFn) -> impl IntoView {
    route_guard(AppRoute::Shifts, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    route_guard(AppRoute::Admin, children)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireEmployee};
    use crate::test_support::helpers::{provide_admin_session, provide_employee_session};
    use crate::test_support::ssr::render_to_string;
    use crate::state::session::{provide_session, Session};
    use leptos::*;

    #[test]
    fn require_employee_renders_children_for_signed_in_employee() {
        let html = render_to_string(move || {
            provide_employee_session("emp4");
            view! {
                <RequireEmployee>
                    {|| view! { <div>"shift-content"</div> }}
                </RequireEmployee>
            }
        });
        assert!(html.contains("shift-content"));
    }

    #[test]
    fn require_employee_hides_children_when_anonymous() {
        let html = render_to_string(move || {
            provide_session(Session::new());
            view! {
                <RequireEmployee>
                    {|| view! { <div>"shift-content"</div> }}
                </RequireEmployee>
            }
        });
        assert!(!html.contains("shift-content"));
    }

    #[test]
    fn require_admin_renders_children_for_admin() {
        let html = render_to_string(move || {
            provide_admin_session();
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_hides_children_for_employee() {
        let html = render_to_string(move || {
            provide_employee_session("emp4");
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
    }
}
