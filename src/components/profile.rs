use yew::prelude::*;

use crate::models::UserProfile;

#[derive(Properties, PartialEq)]
pub struct ProfileViewProps {
    pub profile: Option<UserProfile>,
}

#[function_component(ProfileView)]
pub fn profile_view(props: &ProfileViewProps) -> Html {
    let Some(profile) = &props.profile else {
        return html! {
            <div class="profile-view">
                <p class="profile-empty">{"Profile details are not available right now."}</p>
            </div>
        };
    };

    let row = |label: &str, value: Html| {
        html! {
            <div class="profile-row">
                <span class="profile-label">{ label }</span>
                <span class="profile-value">{ value }</span>
            </div>
        }
    };

    html! {
        <div class="profile-view">
            <h2>{"Your Profile"}</h2>
            <div class="profile-card">
                { row("Username", html! { &profile.username }) }
                { row("Email", html! { &profile.email }) }
                {
                    match &profile.full_name {
                        Some(name) => row("Full Name", html! { name }),
                        None => html! {},
                    }
                }
                {
                    match &profile.created_at {
                        Some(created) => row("Member Since", html! { created }),
                        None => html! {},
                    }
                }
                { row("Status", html! { { status_label(profile.is_active) } }) }
            </div>
        </div>
    }
}

fn status_label(is_active: bool) -> &'static str {
    if is_active {
        "Active"
    } else {
        "Inactive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_reflects_the_active_flag() {
        assert_eq!(status_label(true), "Active");
        assert_eq!(status_label(false), "Inactive");
    }
}
