//! Sign-in page. Local validation first, then dispatch into the session
//! store; server-side credential errors are mapped back onto the fields.

use std::collections::BTreeMap;

use regex::Regex;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::session::{AuthResult, SessionHandle};
use crate::toast::show_toast;

const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

/// Local validation for the login form. One message per offending field.
pub fn validate_login(email: &str, password: &str) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();
    if email.trim().is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !Regex::new(EMAIL_PATTERN).unwrap().is_match(email) {
        errors.insert("email", "Please enter a valid email".to_string());
    }
    if password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    } else if password.len() < 8 {
        errors.insert("password", "Password must be at least 8 characters".to_string());
    }
    errors
}

pub enum Msg {
    SessionChanged(SessionHandle),
    UpdateEmail(String),
    UpdatePassword(String),
    Submit,
    Settled(AuthResult),
}

pub struct LoginPage {
    session: SessionHandle,
    _listener: ContextHandle<SessionHandle>,
    email: String,
    password: String,
    errors: BTreeMap<&'static str, String>,
    submitting: bool,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, listener) = ctx
            .link()
            .context(ctx.link().callback(Msg::SessionChanged))
            .expect("LoginPage must be rendered inside an AuthProvider");
        Self {
            session,
            _listener: listener,
            email: String::new(),
            password: String::new(),
            errors: BTreeMap::new(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(session) => {
                self.session = session;
                true
            }
            Msg::UpdateEmail(value) => {
                self.email = value;
                self.errors.remove("email");
                true
            }
            Msg::UpdatePassword(value) => {
                self.password = value;
                self.errors.remove("password");
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let errors = validate_login(&self.email, &self.password);
                if !errors.is_empty() {
                    self.errors = errors;
                    return true;
                }
                self.submitting = true;
                self.errors.clear();
                self.session.login(
                    self.email.clone(),
                    self.password.clone(),
                    ctx.link().callback(Msg::Settled),
                );
                true
            }
            Msg::Settled(Ok(_)) => {
                self.submitting = false;
                self.email.clear();
                self.password.clear();
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                true
            }
            Msg::Settled(Err(error)) => {
                self.submitting = false;
                let lowered = error.to_lowercase();
                if lowered.contains("invalid email or password") {
                    self.errors
                        .insert("email", "Invalid email or password".to_string());
                    self.errors
                        .insert("password", "Invalid email or password".to_string());
                } else if lowered.contains("all fields are required") {
                    self.errors.insert("email", "Email is required".to_string());
                    self.errors
                        .insert("password", "Password is required".to_string());
                } else {
                    show_toast(&format!("Login failed: {error}"));
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput_email = link.callback(|e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateEmail(input.value())
        });
        let oninput_password = link.callback(|e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            Msg::UpdatePassword(input.value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="auth-page">
                <div class="auth-card">
                    <h1>{"Welcome Back"}</h1>
                    <p class="auth-subtitle">{"Sign in to your account"}</p>
                    <form {onsubmit}>
                        <div class="field">
                            <label for="email">{"Email Address"}</label>
                            <input
                                type="email"
                                id="email"
                                value={self.email.clone()}
                                oninput={oninput_email}
                                placeholder="Enter your email"
                                disabled={self.submitting}
                            />
                            { field_error(&self.errors, "email") }
                        </div>
                        <div class="field">
                            <label for="password">{"Password"}</label>
                            <input
                                type="password"
                                id="password"
                                value={self.password.clone()}
                                oninput={oninput_password}
                                placeholder="Enter your password"
                                disabled={self.submitting}
                            />
                            { field_error(&self.errors, "password") }
                        </div>
                        <button type="submit" disabled={self.submitting}>
                            { if self.submitting { "Signing In..." } else { "Sign In" } }
                        </button>
                    </form>
                    <p class="auth-switch">
                        {"Don't have an account? "}
                        <Link<Route> to={Route::Signup}>{"Sign up"}</Link<Route>>
                    </p>
                </div>
            </div>
        }
    }
}

pub(crate) fn field_error(errors: &BTreeMap<&'static str, String>, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_credentials() {
        assert!(validate_login("a@b.com", "password123").is_empty());
    }

    #[test]
    fn rejects_missing_fields() {
        let errors = validate_login("", "");
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password is required")
        );
    }

    #[test]
    fn rejects_malformed_email_and_short_password() {
        let errors = validate_login("not-an-email", "short");
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Please enter a valid email")
        );
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password must be at least 8 characters")
        );
    }
}
