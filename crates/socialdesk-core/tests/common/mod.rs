#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use socialdesk_core::auth::MemoryTokenStore;
use socialdesk_core::{ApiClient, Session};
use wiremock::MockServer;

/// Routes handed to the session navigator, in call order
pub type Routes = Arc<Mutex<Vec<String>>>;

pub fn client_with_tokens(server: &MockServer, access: Option<&str>, refresh: Option<&str>) -> (ApiClient, Routes) {
    client_for(&server.uri(), access, refresh)
}

pub fn client_for(base_url: &str, access: Option<&str>, refresh: Option<&str>) -> (ApiClient, Routes) {
    let routes: Routes = Arc::new(Mutex::new(Vec::new()));
    let seen = routes.clone();
    let session = Session::new(Arc::new(MemoryTokenStore::with_tokens(access, refresh)))
        .with_navigator(Arc::new(move |route: &str| seen.lock().unwrap().push(route.to_string())));
    let client = ApiClient::new(base_url, Arc::new(session)).unwrap();
    (client, routes)
}

pub fn tokens(client: &ApiClient) -> (Option<String>, Option<String>) {
    let creds = client.session().credentials();
    (creds.access_token().unwrap(), creds.refresh_token().unwrap())
}

pub fn pair(access: &str, refresh: &str) -> Value {
    json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer"
    })
}

pub fn user_json() -> Value {
    json!({
        "id": "u-1",
        "email": "qa@example.com",
        "full_name": "QA Tester",
        "plan": "pro",
        "is_active": true,
        "created_at": "2025-01-01T00:00:00Z"
    })
}

pub fn post_list_json() -> Value {
    json!({
        "items": [{
            "id": "p-1",
            "caption": "Spring launch\nsee link in bio",
            "hashtags": ["launch"],
            "status": "scheduled",
            "post_type": "text",
            "ai_generated": false,
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-01T10:00:00Z",
            "platforms": []
        }],
        "total": 1
    })
}
