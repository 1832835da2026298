use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::SignupRequest;

#[derive(Properties, PartialEq)]
pub struct SignupScreenProps {
    pub on_signup: Callback<SignupRequest>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub busy: bool,
    pub on_back: Callback<()>,
}

#[function_component(SignupScreen)]
pub fn signup_screen(props: &SignupScreenProps) -> Html {
    let email_ref = use_node_ref();
    let username_ref = use_node_ref();
    let full_name_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let username_ref = username_ref.clone();
        let full_name_ref = full_name_ref.clone();
        let password_ref = password_ref.clone();
        let on_signup = props.on_signup.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };

            let email = value(&email_ref);
            let username = value(&username_ref);
            let password = value(&password_ref);
            if email.is_empty() || username.is_empty() || password.is_empty() {
                return;
            }

            let full_name = value(&full_name_ref);
            on_signup.emit(SignupRequest {
                email,
                username,
                full_name: (!full_name.is_empty()).then_some(full_name),
                password,
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1>{"Create your account"}</h1>
                    <p>{"Start analyzing your sales in minutes"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="signup-email">{"Email Address"}</label>
                        <input type="email" id="signup-email" ref={email_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="signup-username">{"Username"}</label>
                        <input type="text" id="signup-username" ref={username_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="signup-full-name">{"Full Name (optional)"}</label>
                        <input type="text" id="signup-full-name" ref={full_name_ref} />
                    </div>
                    <div class="form-group">
                        <label for="signup-password">{"Password"}</label>
                        <input type="password" id="signup-password" ref={password_ref} required=true />
                    </div>

                    if let Some(error) = &props.error {
                        <p class="form-error">{ error }</p>
                    }
                    if let Some(notice) = &props.notice {
                        <p class="form-notice">{ notice }</p>
                    }

                    <button type="submit" class="btn-primary" disabled={props.busy}>
                        { if props.busy { "Creating account..." } else { "Sign Up" } }
                    </button>

                    <div class="auth-footer">
                        <button type="button" class="btn-link" onclick={props.on_back.reform(|_| ())}>
                            {"Back to sign in"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
