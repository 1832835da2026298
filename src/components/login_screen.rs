use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<(String, String)>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub busy: bool,
    pub on_show_signup: Callback<()>,
    pub on_show_reset: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    return;
                }

                on_login.emit((email, password));
            }
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <div class="auth-logo">{"📊"}</div>
                    <h1>{"Welcome to NexGen"}</h1>
                    <p>{"Sales Analytics & Forecasting Platform"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email Address"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="Enter your email"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    if let Some(error) = &props.error {
                        <p class="form-error">{ error }</p>
                    }
                    if let Some(notice) = &props.notice {
                        <p class="form-notice">{ notice }</p>
                    }

                    <button type="submit" class="btn-primary" disabled={props.busy}>
                        { if props.busy { "Signing in..." } else { "Sign In" } }
                    </button>

                    <div class="auth-footer">
                        <button
                            type="button"
                            class="btn-link"
                            onclick={props.on_show_reset.reform(|_| ())}
                        >
                            {"Forgot password?"}
                        </button>
                        <button
                            type="button"
                            class="btn-link"
                            onclick={props.on_show_signup.reform(|_| ())}
                        >
                            {"Create an account"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
