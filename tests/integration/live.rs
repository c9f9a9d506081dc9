//! Live tests against a real SugarCRM instance. Run with `--ignored`.

use sugarcrm_api::{EntryListOptions, Record};

use super::common::live_session;

#[tokio::test]
#[ignore = "requires a live SugarCRM instance"]
async fn test_live_login_reports_user() {
    let session = live_session().await;
    assert!(!session.token().as_str().is_empty());
    assert!(session.login_result().user_id().is_some());
}

#[tokio::test]
#[ignore = "requires a live SugarCRM instance"]
async fn test_live_available_modules() {
    let session = live_session().await;
    let keys = session
        .get_available_module_keys("default")
        .await
        .expect("get_available_modules should succeed");
    assert!(keys.iter().any(|k| k == "Leads"), "Leads should be available");
}

#[tokio::test]
#[ignore = "requires a live SugarCRM instance"]
async fn test_live_lead_round_trip() {
    let session = live_session().await;
    let marker = format!("Integration {}", std::process::id());

    let mut lead = Record::for_module("Leads")
        .with("first_name", "Test")
        .with("last_name", marker.as_str());
    session.set_entry(&mut lead).await.expect("set_entry should succeed");
    let id = lead.id().expect("server assigns an id").to_string();

    let read = session
        .get_entry("Leads", &id, &[], false)
        .await
        .expect("get_entry should succeed")
        .expect("lead should exist");
    assert_eq!(read.text("last_name"), Some(marker.as_str()));

    let probe = Record::for_module("Leads").with("last_name", marker.as_str());
    let count = session
        .get_entries_count(&probe, false)
        .await
        .expect("get_entries_count should succeed");
    assert!(count >= 1);

    let listed = session
        .get_entry_list(&probe, &EntryListOptions::new().with_fields(["id"]))
        .await
        .expect("get_entry_list should succeed");
    assert!(listed.iter().any(|r| r.id() == Some(id.as_str())));

    // Soft-delete the lead again
    lead.set("deleted", "1");
    session.set_entry(&mut lead).await.expect("cleanup should succeed");
}

#[tokio::test]
#[ignore = "requires a live SugarCRM instance"]
async fn test_live_missing_entry_is_none() {
    let session = live_session().await;
    let missing = session
        .get_entry("Leads", "00000000-0000-0000-0000-000000000000", &[], false)
        .await
        .expect("get_entry should succeed");
    assert!(missing.is_none());
}
