//! REST API helpers for communicating with the backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always credentialed so
//! cookie-borne sessions ride along. Native builds (tests): stubs returning
//! `None`/error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Reads return `Option` and mutations `Result<_, String>` instead of
//! panicking, so fetch failures degrade page behavior without crashing the
//! app. Failure messages are built by small testable helpers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Conversation, Message, Project, Subscription, UserProfile};
#[cfg(feature = "csr")]
use super::types::{CheckoutResponse, LoginResponse};

#[cfg(any(test, feature = "csr"))]
fn project_endpoint(project_id: &str) -> String {
    format!("/projects/{project_id}")
}

#[cfg(any(test, feature = "csr"))]
fn conversation_messages_endpoint(conversation_id: &str) -> String {
    format!("/conversations/{conversation_id}/messages")
}

#[cfg(any(test, feature = "csr"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn register_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn update_profile_failed_message(status: u16) -> String {
    format!("profile update failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn create_project_failed_message(status: u16) -> String {
    format!("create project failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn delete_project_failed_message(status: u16) -> String {
    format!("delete project failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn send_message_failed_message(status: u16) -> String {
    format!("send message failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn checkout_failed_message(status: u16) -> String {
    format!("checkout failed: {status}")
}

#[cfg(feature = "csr")]
fn get(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::get(&crate::config::endpoint(path))
        .credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "csr")]
fn post(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::post(&crate::config::endpoint(path))
        .credentials(web_sys::RequestCredentials::Include)
}

/// Probe the backend for a cookie-borne session via `POST /auth/heartbeat`.
///
/// Only the status class matters: any 2xx means the session is valid. A
/// non-2xx status or a network failure both read as "no session".
pub async fn heartbeat() -> bool {
    #[cfg(feature = "csr")]
    {
        match post("/auth/heartbeat").json(&serde_json::json!({})) {
            Ok(req) => req.send().await.map_or(false, |resp| resp.ok()),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Fetch the signed-in viewer from `GET /auth/me`, sending a bearer header
/// when a local token exists. Returns `None` if not authenticated.
pub async fn fetch_me(token: Option<&str>) -> Option<UserProfile> {
    #[cfg(feature = "csr")]
    {
        let mut req = get("/auth/me");
        if let Some(token) = token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        None
    }
}

/// Sign in via `POST /auth/login`, returning the session token.
///
/// # Errors
///
/// Returns an error string if the request fails or the credentials are
/// rejected.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = post("/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects the
/// registration.
pub async fn register(payload: &serde_json::Value) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = post("/auth/register")
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(register_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err("not available outside the browser".to_owned())
    }
}

/// End the backend session via `POST /auth/logout`. Best-effort; local
/// token removal is the part that must not fail.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        if let Ok(req) = post("/auth/logout").json(&serde_json::json!({})) {
            let _ = req.send().await;
        }
    }
}

/// Update the viewer's profile via `PUT /users/me`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn update_profile(payload: &serde_json::Value) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::put(&crate::config::endpoint("/users/me"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(update_profile_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the viewer's projects from `GET /projects`.
pub async fn fetch_projects() -> Option<Vec<Project>> {
    #[cfg(feature = "csr")]
    {
        let resp = get("/projects").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Project>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Create a project via `POST /projects`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn create_project(payload: &serde_json::Value) -> Result<Project, String> {
    #[cfg(feature = "csr")]
    {
        let resp = post("/projects")
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(create_project_failed_message(resp.status()));
        }
        resp.json::<Project>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err("not available outside the browser".to_owned())
    }
}

/// Delete a project via `DELETE /projects/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn delete_project(project_id: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = crate::config::endpoint(&project_endpoint(project_id));
        let resp = gloo_net::http::Request::delete(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(delete_project_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = project_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the viewer's conversations from `GET /conversations`.
pub async fn fetch_conversations() -> Option<Vec<Conversation>> {
    #[cfg(feature = "csr")]
    {
        let resp = get("/conversations").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Conversation>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch a conversation's messages from `GET /conversations/{id}/messages`.
pub async fn fetch_messages(conversation_id: &str) -> Option<Vec<Message>> {
    #[cfg(feature = "csr")]
    {
        let resp = get(&conversation_messages_endpoint(conversation_id))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Message>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = conversation_id;
        None
    }
}

/// Post a message via `POST /conversations/{id}/messages`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn send_message(conversation_id: &str, body: &str) -> Result<Message, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "body": body });
        let resp = post(&conversation_messages_endpoint(conversation_id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(send_message_failed_message(resp.status()));
        }
        resp.json::<Message>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (conversation_id, body);
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the current subscription from `GET /billing/subscription`.
/// Returns `None` for viewers on the free tier or on any failure.
pub async fn fetch_subscription() -> Option<Subscription> {
    #[cfg(feature = "csr")]
    {
        let resp = get("/billing/subscription").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Subscription>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Start a checkout via `POST /billing/checkout`, returning the hosted
/// checkout URL to navigate to.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn create_checkout(plan_id: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "plan": plan_id });
        let resp = post("/billing/checkout")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(checkout_failed_message(resp.status()));
        }
        let body: CheckoutResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.checkout_url)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = plan_id;
        Err("not available outside the browser".to_owned())
    }
}
