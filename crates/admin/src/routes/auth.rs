//! Sign-in and sign-out route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Sign-in form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Sign-in page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Display the sign-in page. An already-signed-in session is bounced
/// straight to the customer list.
pub async fn login_page(OptionalAuth(user): OptionalAuth) -> Response {
    if user.is_some() {
        return Redirect::to("/customers").into_response();
    }
    LoginTemplate { error: None }.into_response()
}

/// Handle sign-in form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let auth = AuthService::new(state.config());

    match auth.login_with_password(&form.email, &form.password) {
        Ok(user) => {
            set_current_user(&session, &user).await?;
            set_sentry_user(user.email.as_str());
            tracing::info!(email = %user.email, "admin signed in");
            Ok(Redirect::to("/customers").into_response())
        }
        Err(AuthError::InvalidCredentials | AuthError::InvalidEmail(_)) => {
            Ok(LoginTemplate {
                error: Some("Invalid email or password".to_string()),
            }
            .into_response())
        }
        Err(other) => Err(other.into()),
    }
}

/// Handle sign-out.
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    clear_sentry_user();
    tracing::info!("admin signed out");
    Ok(Redirect::to("/login"))
}
