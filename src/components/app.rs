// ============================================================================
// APP - auth gate and top-level view switch
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth;
use crate::services::Session;

use super::{
    DashboardView, ForgotPasswordScreen, LoginScreen, PredictionsView, ProfileView, SignupScreen,
};

#[derive(Clone, Copy, PartialEq)]
enum AuthScreen {
    Login,
    Signup,
    ForgotPassword,
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Dashboard,
    Predictions,
    Profile,
}

#[function_component(App)]
pub fn app() -> Html {
    // One session context for the whole tree; every data-access call gets
    // its token from here instead of a hidden global read.
    html! {
        <ContextProvider<Session> context={Session::new()}>
            <Shell />
        </ContextProvider<Session>>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let auth = use_auth();
    let screen = use_state(|| AuthScreen::Login);
    let tab = use_state(|| Tab::Dashboard);

    if !auth.state.is_logged_in {
        let goto = |target: AuthScreen| {
            let screen = screen.clone();
            Callback::from(move |_: ()| screen.set(target))
        };

        return match *screen {
            AuthScreen::Login => html! {
                <LoginScreen
                    on_login={auth.login.clone()}
                    error={auth.state.error.clone()}
                    notice={auth.state.notice.clone()}
                    busy={auth.state.busy}
                    on_show_signup={goto(AuthScreen::Signup)}
                    on_show_reset={goto(AuthScreen::ForgotPassword)}
                />
            },
            AuthScreen::Signup => html! {
                <SignupScreen
                    on_signup={auth.signup.clone()}
                    error={auth.state.error.clone()}
                    notice={auth.state.notice.clone()}
                    busy={auth.state.busy}
                    on_back={goto(AuthScreen::Login)}
                />
            },
            AuthScreen::ForgotPassword => html! {
                <ForgotPasswordScreen
                    on_reset={auth.reset_password.clone()}
                    error={auth.state.error.clone()}
                    notice={auth.state.notice.clone()}
                    busy={auth.state.busy}
                    on_back={goto(AuthScreen::Login)}
                />
            },
        };
    }

    let nav_button = |target: Tab, label: &str| {
        let tab_handle = tab.clone();
        let active = *tab == target;
        let onclick = Callback::from(move |_| tab_handle.set(target));
        html! {
            <button class={classes!("nav-tab", active.then_some("active"))} {onclick}>
                { label }
            </button>
        }
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"NexGen Sales Analytics"}</h1>
                <nav class="app-nav">
                    { nav_button(Tab::Dashboard, "Dashboard") }
                    { nav_button(Tab::Predictions, "Predictions") }
                    { nav_button(Tab::Profile, "Profile") }
                </nav>
                <button class="btn-logout" onclick={auth.logout.reform(|_| ())}>
                    {"Log out"}
                </button>
            </header>
            <main class="app-main">
                {
                    match *tab {
                        Tab::Dashboard => html! { <DashboardView /> },
                        Tab::Predictions => html! { <PredictionsView /> },
                        Tab::Profile => html! { <ProfileView profile={auth.state.profile.clone()} /> },
                    }
                }
            </main>
        </div>
    }
}
