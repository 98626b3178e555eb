//! Account creation page. Mirrors the login page's validation flow with an
//! extra username field and already-exists error mapping.

use std::collections::BTreeMap;

use regex::Regex;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::pages::login::field_error;
use crate::session::{AuthResult, SessionHandle};
use crate::toast::show_toast;

const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();
    if username.trim().is_empty() {
        errors.insert("username", "Username is required".to_string());
    } else if username.len() < 3 {
        errors.insert(
            "username",
            "Username must be at least 3 characters".to_string(),
        );
    }
    if email.trim().is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !Regex::new(EMAIL_PATTERN).unwrap().is_match(email) {
        errors.insert("email", "Please enter a valid email".to_string());
    }
    if password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    } else if password.len() < 8 {
        errors.insert(
            "password",
            "Password must be at least 8 characters".to_string(),
        );
    }
    errors
}

pub enum Msg {
    SessionChanged(SessionHandle),
    UpdateUsername(String),
    UpdateEmail(String),
    UpdatePassword(String),
    Submit,
    Settled(AuthResult),
}

pub struct SignupPage {
    session: SessionHandle,
    _listener: ContextHandle<SessionHandle>,
    username: String,
    email: String,
    password: String,
    errors: BTreeMap<&'static str, String>,
    submitting: bool,
}

impl Component for SignupPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, listener) = ctx
            .link()
            .context(ctx.link().callback(Msg::SessionChanged))
            .expect("SignupPage must be rendered inside an AuthProvider");
        Self {
            session,
            _listener: listener,
            username: String::new(),
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
            Msg::UpdateUsername(value) => {
                self.username = value;
                self.errors.remove("username");
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
                let errors = validate_signup(&self.username, &self.email, &self.password);
                if !errors.is_empty() {
                    self.errors = errors;
                    return true;
                }
                self.submitting = true;
                self.errors.clear();
                self.session.signup(
                    self.email.clone(),
                    self.username.clone(),
                    self.password.clone(),
                    ctx.link().callback(Msg::Settled),
                );
                true
            }
            Msg::Settled(Ok(_)) => {
                self.submitting = false;
                self.username.clear();
                self.email.clear();
                self.password.clear();
                show_toast("Account created successfully!");
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                true
            }
            Msg::Settled(Err(error)) => {
                self.submitting = false;
                if error.contains("already exists") {
                    self.errors.insert(
                        "email",
                        "User with this email already exists".to_string(),
                    );
                } else if error.contains("Password must be at least 8 characters") {
                    self.errors.insert(
                        "password",
                        "Password must be at least 8 characters long".to_string(),
                    );
                } else if error.contains("All fields are required") {
                    self.errors
                        .insert("username", "Username is required".to_string());
                    self.errors.insert("email", "Email is required".to_string());
                    self.errors
                        .insert("password", "Password is required".to_string());
                } else {
                    show_toast(&format!("Signup failed: {error}"));
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput_username = link.callback(|e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateUsername(input.value())
        });
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
                    <h1>{"Create Account"}</h1>
                    <p class="auth-subtitle">{"Join us today and get started"}</p>
                    <form {onsubmit}>
                        <div class="field">
                            <label for="username">{"Username"}</label>
                            <input
                                type="text"
                                id="username"
                                value={self.username.clone()}
                                oninput={oninput_username}
                                placeholder="Choose a username"
                                disabled={self.submitting}
                            />
                            { field_error(&self.errors, "username") }
                        </div>
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
                                placeholder="Create a password"
                                disabled={self.submitting}
                            />
                            { field_error(&self.errors, "password") }
                        </div>
                        <button type="submit" disabled={self.submitting}>
                            { if self.submitting { "Creating Account..." } else { "Sign Up" } }
                        </button>
                    </form>
                    <p class="auth-switch">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
                    </p>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_signup() {
        assert!(validate_signup("viraj", "viraj@gmail.com", "password123").is_empty());
    }

    #[test]
    fn rejects_short_username() {
        let errors = validate_signup("ab", "a@b.com", "password123");
        assert_eq!(
            errors.get("username").map(String::as_str),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(errors.len(), 1);
    }
}
