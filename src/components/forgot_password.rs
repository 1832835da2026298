use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ForgotPasswordProps {
    pub on_reset: Callback<(String, String)>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub busy: bool,
    pub on_back: Callback<()>,
}

#[function_component(ForgotPasswordScreen)]
pub fn forgot_password_screen(props: &ForgotPasswordProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_reset = props.on_reset.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let new_password = password_input.value();
                if email.is_empty() || new_password.is_empty() {
                    return;
                }
                on_reset.emit((email, new_password));
            }
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1>{"Reset your password"}</h1>
                    <p>{"Enter your email and a new password"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="reset-email">{"Email Address"}</label>
                        <input type="email" id="reset-email" ref={email_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="reset-password">{"New Password"}</label>
                        <input type="password" id="reset-password" ref={password_ref} required=true />
                    </div>

                    if let Some(error) = &props.error {
                        <p class="form-error">{ error }</p>
                    }
                    if let Some(notice) = &props.notice {
                        <p class="form-notice">{ notice }</p>
                    }

                    <button type="submit" class="btn-primary" disabled={props.busy}>
                        { if props.busy { "Updating..." } else { "Reset Password" } }
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
