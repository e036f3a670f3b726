//! The Basic Auth challenge responder.
//!
//! Every request lands here: no presented identity gets a `401` challenge,
//! a presented identity gets an HTML acknowledgment whose hidden form
//! round-trips the identity back. When the client echoes the same identity
//! it already saw (`SeenBefore=1`, matching `OldAuth`), the responder
//! demands the credential be re-asserted with another `401`. The handler is
//! stateless; the only state is what the client carries in the form.

use askama::Template;
use axum::{
    http::{
        header::{AUTHORIZATION, WWW_AUTHENTICATE},
        HeaderMap, StatusCode, Uri,
    },
    response::{Html, IntoResponse, Response},
    Form,
};
use base64ct::{Base64, Encoding};
use serde::Deserialize;
use tracing::{debug, instrument};

pub const REALM: &str = "Test Authentication System";

pub const CHALLENGE_BODY: &str =
    "You must enter a valid login ID and password to access this resource\n";

/// Hidden fields round-tripped through the acknowledgment page.
#[derive(Deserialize, Debug, Default, utoipa::ToSchema)]
pub struct ReauthForm {
    #[serde(rename = "SeenBefore")]
    pub seen_before: Option<String>,
    #[serde(rename = "OldAuth")]
    pub old_auth: Option<String>,
}

// Askama escapes interpolations by default, which closes the reflected-XSS
// hole the raw-interpolation original had.
#[derive(Template)]
#[template(path = "welcome.html")]
struct WelcomeTemplate {
    user: String,
    old_auth: String,
    self_url: String,
}

#[utoipa::path(
    get,
    path= "/",
    responses (
        (status = 200, description = "Acknowledgment page for the presented identity"),
        (status = 401, description = "Basic Auth challenge"),
    ),
    tag = "login",
)]
#[instrument(skip(headers, payload))]
pub async fn login(uri: Uri, headers: HeaderMap, payload: Option<Form<ReauthForm>>) -> Response {
    let Some(user) = auth_user(&headers) else {
        return challenge();
    };

    let form = payload.map(|Form(form)| form).unwrap_or_default();
    let old_auth = form.old_auth.unwrap_or_default();

    // The client proved it already saw this exact identity once, demand a
    // fresh credential assertion.
    if form.seen_before.as_deref() == Some("1") && old_auth == user {
        debug!("identity seen before, forcing re-authentication");
        return challenge();
    }

    let page = WelcomeTemplate {
        self_url: uri.path().to_string(),
        old_auth,
        user,
    };

    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render template: {err}"),
        )
            .into_response(),
    }
}

/// Terminal `401` response prompting the user agent for credentials.
fn challenge() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(WWW_AUTHENTICATE, format!("Basic realm=\"{REALM}\""))],
        CHALLENGE_BODY,
    )
        .into_response()
}

/// Username from a well-formed `Authorization: Basic` header, `None` otherwise.
///
/// An empty username inside a well-formed header still counts as a presented
/// identity.
fn auth_user(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = Base64::decode_vec(encoded.trim()).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;
    let (user, _password) = credentials.split_once(':')?;

    Some(user.to_string())
}
