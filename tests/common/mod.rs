#![allow(dead_code)]

use beeline_portal::Client;
use httpmock::MockServer;
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";
pub const AUTH_HEADER: &str = "X-MPBX-API-AUTH-TOKEN";

/// Client pointed at the mock server, with the portal path prefix.
pub fn client(server: &MockServer) -> Client {
    Client::builder(TOKEN)
        .base_url(server.url("/apis/portal/"))
        .build()
        .unwrap()
}

pub fn portal_path(path: &str) -> String {
    format!("/apis/portal/{path}")
}

pub fn abonent_json() -> Value {
    json!({
        "userId": "9379992@beeline.ru",
        "phone": "9379992",
        "firstName": "T",
        "lastName": "U",
        "extension": "2310"
    })
}
