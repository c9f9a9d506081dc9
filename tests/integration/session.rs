//! End-to-end session behavior against a mock SugarCRM endpoint.

use serde_json::json;
use sugarcrm_api::rest::ErrorKind;
use sugarcrm_api::{Credentials, EntryListOptions, Record, RecordKind, Session, SmartWrite};
use wiremock::{MockServer, ResponseTemplate};

use super::common::{mock_session, received_args, rpc, wrap, TOKEN};

#[tokio::test]
async fn test_every_call_is_a_four_field_form() {
    let server = MockServer::start().await;
    let session = mock_session(&server).await;
    rpc("get_entries_count")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result_count": 0})))
        .mount(&server)
        .await;

    session
        .get_entries_count(&Record::for_module("Leads"), false)
        .await
        .expect("count should succeed");

    for request in server.received_requests().await.unwrap() {
        let form: Vec<(String, String)> =
            serde_urlencoded::from_str(&String::from_utf8_lossy(&request.body)).unwrap();
        let keys: Vec<&str> = form.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["method", "input_type", "response_type", "rest_data"]);
        assert_eq!(form[1].1, "JSON");
        assert_eq!(form[2].1, "JSON");
    }
}

#[tokio::test]
async fn test_session_token_leads_every_authenticated_call() {
    let server = MockServer::start().await;
    let session = mock_session(&server).await;
    rpc("get_available_modules")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"modules": []})))
        .mount(&server)
        .await;
    rpc("get_module_fields")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"module_fields": {}})))
        .mount(&server)
        .await;

    session.get_available_modules("all").await.unwrap();
    session
        .get_module_fields(&Record::for_module("Notes"), &[])
        .await
        .unwrap();

    for name in ["get_available_modules", "get_module_fields"] {
        for args in received_args(&server, name).await {
            assert_eq!(args[0], json!(TOKEN), "{name} must lead with the token");
        }
    }
}

#[tokio::test]
async fn test_escaped_apostrophes_are_decoded() {
    let server = MockServer::start().await;
    let session = mock_session(&server).await;
    rpc("get_entry")
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"entry_list":[{"id":"C1","module_name":"Contacts","name_value_list":{"last_name":{"name":"last_name","value":"O&#039;Brien"}}}],"relationship_list":[]}"#,
        ))
        .mount(&server)
        .await;

    let contact = session
        .get_entry("Contacts", "C1", &[], false)
        .await
        .unwrap()
        .expect("contact exists");
    assert_eq!(contact.kind(), &RecordKind::Contact);
    assert_eq!(contact.text("last_name"), Some("O'Brien"));
}

#[tokio::test]
async fn test_rejected_login_yields_no_session() {
    let server = MockServer::start().await;
    rpc("login")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Invalid Login",
            "number": 10,
            "description": "Login attempt failed please check the username and password"
        })))
        .mount(&server)
        .await;

    let credentials = Credentials::new(server.uri(), "admin", "wrong");
    let err = Session::login(&credentials).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Auth(_)));
    assert!(err.to_string().contains("Invalid Login"));
}

#[tokio::test]
async fn test_create_then_find_by_example() {
    let server = MockServer::start().await;
    let session = mock_session(&server).await;
    rpc("set_entry")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "L-1"})))
        .mount(&server)
        .await;
    rpc("get_entry_list")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result_count": 1,
            "entry_list": [{"id": "L-1", "module_name": "Leads", "name_value_list": {
                "id": wrap("id", "L-1"),
                "last_name": wrap("last_name", "Lovelace")
            }}],
            "relationship_list": []
        })))
        .mount(&server)
        .await;

    let mut lead = Record::for_module("Leads").with("last_name", "Lovelace");
    session.set_entry(&mut lead).await.unwrap();
    assert_eq!(lead.id(), Some("L-1"));

    let probe = Record::for_module("Leads").with("last_name", "Love%");
    let found = session
        .get_entry_list(&probe, &EntryListOptions::default())
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), lead.id());

    let args = &received_args(&server, "get_entry_list").await[0];
    assert_eq!(args[2], json!("leads.last_name LIKE 'Love%' "));
}

#[tokio::test]
async fn test_smart_write_creates_unknown_ids() {
    let server = MockServer::start().await;
    let session = mock_session(&server).await;
    rpc("get_entries")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entry_list": [{"id": "P-9", "name_value_list": [
                {"name": "warning", "value": "Access to this object is denied"}
            ]}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    rpc("set_entries")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ids": ["P-9"]})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = session
        .set_entries_smart(vec![Record::for_module("Prospects").with("id", "P-9")])
        .await
        .unwrap();

    let SmartWrite::Written(written) = outcome else {
        panic!("expected the write to go through");
    };
    let prospect = written.get("P-9").expect("indexed by id");
    assert_eq!(prospect.kind(), &RecordKind::Prospect);
    assert_eq!(prospect.text("new_with_id"), Some("1"));
}

#[tokio::test]
async fn test_unimplemented_rpc_makes_no_request() {
    let server = MockServer::start().await;
    let session = mock_session(&server).await;
    let before = server.received_requests().await.unwrap().len();

    let err = session.logout().await.unwrap_err();
    assert!(err.is_not_implemented());
    assert_eq!(server.received_requests().await.unwrap().len(), before);
}
