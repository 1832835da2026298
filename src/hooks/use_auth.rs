use yew::prelude::*;

use crate::models::SignupRequest;
use crate::services::{ApiClient, Session};
use crate::stores::AuthStore;

pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthStore>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub signup: Callback<SignupRequest>,
    pub reset_password: Callback<(String, String)>,
}

/// Auth gate: login/logout/signup/reset flows against the backend. The
/// presence of a stored token is what unlocks the dashboard; no expiry
/// check happens here.
#[hook]
pub fn use_auth() -> UseAuthHandle {
    let session = use_context::<Session>().unwrap_or_default();
    let state = use_state(|| {
        if session.is_authenticated() {
            AuthStore::logged_in()
        } else {
            AuthStore::logged_out()
        }
    });

    // Restore the profile on mount when a token is already stored.
    {
        let state = state.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            if session.is_authenticated() {
                let api = ApiClient::new(session.clone());
                wasm_bindgen_futures::spawn_local(async move {
                    // Resolves to None on 401 instead of an error; an
                    // expired token just means no profile to show.
                    let profile = api.current_user().await;
                    if profile.is_none() {
                        log::info!("ℹ️ Stored token did not resolve to a profile");
                    }
                    // A logout may have landed while /me was in flight.
                    if !session.is_authenticated() {
                        return;
                    }
                    let mut next = AuthStore::logged_in();
                    next.profile = profile;
                    state.set(next);
                });
            }
            || ()
        });
    }

    let login = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            let session = session.clone();

            let mut next = (*state).clone();
            next.busy = true;
            next.error = None;
            next.notice = None;
            state.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new(session.clone());
                match api.login(&email, &password).await {
                    Ok(response) => {
                        session.set_token(&response.access_token);
                        log::info!("✅ Login successful: {}", email);

                        let mut next = AuthStore::logged_in();
                        next.profile = api.current_user().await;
                        state.set(next);
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        // Built from scratch rather than from the handle:
                        // the handle derefs to the spawning render's value.
                        state.set(AuthStore {
                            error: Some(e),
                            ..AuthStore::logged_out()
                        });
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |_| {
            session.clear();
            log::info!("👋 Logged out");
            state.set(AuthStore::logged_out());
        })
    };

    let signup = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |request: SignupRequest| {
            let state = state.clone();
            let session = session.clone();

            let mut next = (*state).clone();
            next.busy = true;
            next.error = None;
            next.notice = None;
            state.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new(session);
                match api.signup(&request).await {
                    Ok(profile) => {
                        log::info!("✅ Account created: {}", profile.username);
                        state.set(AuthStore {
                            notice: Some(format!(
                                "Account created for {}, you can sign in now",
                                profile.username
                            )),
                            ..AuthStore::logged_out()
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Signup failed: {}", e);
                        state.set(AuthStore {
                            error: Some(e),
                            ..AuthStore::logged_out()
                        });
                    }
                }
            });
        })
    };

    let reset_password = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |(email, new_password): (String, String)| {
            let state = state.clone();
            let session = session.clone();

            let mut next = (*state).clone();
            next.busy = true;
            next.error = None;
            next.notice = None;
            state.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new(session);
                match api.reset_password(&email, &new_password).await {
                    Ok(response) => {
                        state.set(AuthStore {
                            notice: Some(response.message.unwrap_or_else(|| {
                                "Password updated, you can sign in now".to_string()
                            })),
                            ..AuthStore::logged_out()
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Password reset failed: {}", e);
                        state.set(AuthStore {
                            error: Some(e),
                            ..AuthStore::logged_out()
                        });
                    }
                }
            });
        })
    };

    UseAuthHandle {
        state,
        login,
        logout,
        signup,
        reset_password,
    }
}
