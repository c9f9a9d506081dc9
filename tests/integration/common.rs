//! Shared setup for the integration tests.

use serde_json::{json, Value};
use sugarcrm_api::{Credentials, Session};
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const TOKEN: &str = "integration-session";

/// Log in to the instance named by `SUGARCRM_URL` / `SUGARCRM_USERNAME` /
/// `SUGARCRM_PASSWORD`.
///
/// Panics with a readable message when the variables are missing or the
/// login is rejected. Live tests should fail, not skip.
pub async fn live_session() -> Session {
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => panic!(
            "\n\nLive integration tests need a SugarCRM instance.\n\
             {e}\n\
             Export SUGARCRM_URL (…/service/v4_1/rest.php), SUGARCRM_USERNAME \
             and SUGARCRM_PASSWORD, then rerun with --ignored.\n\n"
        ),
    };

    match Session::login(&credentials).await {
        Ok(session) => session,
        Err(e) => panic!("\n\nLogin to {} failed: {e}\n\n", credentials.url()),
    }
}

/// A POST of the named RPC.
pub fn rpc(name: &str) -> MockBuilder {
    Mock::given(method("POST")).and(body_string_contains(format!("method={name}&")))
}

/// Mount a successful login and open a session against `server`.
pub async fn mock_session(server: &MockServer) -> Session {
    rpc("login")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": TOKEN,
            "module_name": "Users",
            "name_value_list": {
                "user_id": {"name": "user_id", "value": "1"},
                "user_name": {"name": "user_name", "value": "admin"}
            }
        })))
        .expect(1)
        .mount(server)
        .await;

    let credentials = Credentials::new(server.uri(), "admin", "password");
    Session::login(&credentials)
        .await
        .expect("mock login should succeed")
}

/// Argument arrays of every received call of `name`, oldest first.
pub async fn received_args(server: &MockServer, name: &str) -> Vec<Vec<Value>> {
    let needle = format!("method={name}&");
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .filter(|r| String::from_utf8_lossy(&r.body).contains(&needle))
        .map(|r| {
            let body = String::from_utf8_lossy(&r.body);
            let form: Vec<(String, String)> =
                serde_urlencoded::from_str(&body).expect("form-encoded body");
            let (_, data) = form
                .into_iter()
                .find(|(k, _)| k == "rest_data")
                .expect("rest_data field");
            serde_json::from_str(&data).expect("rest_data is JSON")
        })
        .collect()
}

pub fn wrap(name: &str, value: &str) -> Value {
    json!({"name": name, "value": value})
}
