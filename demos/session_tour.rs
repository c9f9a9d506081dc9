//! Session tour
//!
//! Walks through the main session operations against a real SugarCRM
//! instance:
//! - Listing available modules
//! - Creating a lead and reading it back
//! - Counting and listing by example record
//! - Smart writes with caller-chosen ids
//! - Relating records
//!
//! Run with:
//!   SUGARCRM_URL=https://crm.example.com/service/v4_1/rest.php \
//!   SUGARCRM_USERNAME=admin SUGARCRM_PASSWORD=... \
//!   cargo run --example session_tour

use sugarcrm_api::rest::{ErrorKind, SmartWrite};
use sugarcrm_api::{Credentials, EntryListOptions, LinkRequest, Record, Session};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=sugarcrm_rest=debug shows every RPC
    tracing_subscriber::fmt::init();

    println!("=== SugarCRM Session Tour ===\n");

    let credentials = Credentials::from_env()?;
    let session = Session::login(&credentials).await?;
    println!(
        "✓ Logged in as {}",
        session.login_result().user_name().unwrap_or("<unknown>")
    );

    example_modules(&session).await?;
    let lead_id = example_create_and_read(&session).await?;
    example_query_by_example(&session).await?;
    example_smart_write(&session).await?;
    example_relate(&session, &lead_id).await?;
    example_unimplemented(&session).await;

    println!("\n✓ Tour completed!");

    Ok(())
}

/// Example 1: Which modules can this user see?
async fn example_modules(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 1: Available Modules");
    println!("----------------------------");

    let keys = session.get_available_module_keys("default").await?;
    println!("✓ {} modules: {}", keys.len(), keys.join(", "));

    let fields = session
        .get_module_fields(&Record::for_module("Leads"), &[])
        .await?;
    println!("✓ Leads has {} fields", fields.len());
    println!();

    Ok(())
}

/// Example 2: Create a lead and fetch it back by id
async fn example_create_and_read(session: &Session) -> Result<String, Box<dyn std::error::Error>> {
    println!("Example 2: Create and Read");
    println!("--------------------------");

    let mut lead = Record::for_module("Leads")
        .with("first_name", "Ada")
        .with("last_name", "Lovelace")
        .with("status", "New");
    session.set_entry(&mut lead).await?;
    let id = lead.id().unwrap_or_default().to_string();
    println!("✓ Created lead {id}");

    match session.get_entry("Leads", &id, &[], false).await? {
        Some(read) => println!("✓ Read back: {:?} {:?}", read.text("first_name"), read.text("last_name")),
        None => println!("✗ Lead {id} not found"),
    }
    println!();

    Ok(id)
}

/// Example 3: Filter by example record
async fn example_query_by_example(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 3: Query by Example");
    println!("---------------------------");

    let probe = Record::for_module("Leads").with("last_name", "Love%");
    println!("  where: {}", probe.escaped_query());

    let count = session.get_entries_count(&probe, false).await?;
    println!("✓ {count} matching leads");

    let options = EntryListOptions::new()
        .with_fields(["id", "first_name", "last_name"])
        .with_link(LinkRequest::new("email_addresses", ["email_address"]))
        .with_max_results(5);
    for lead in session.get_entry_list(&probe, &options).await? {
        let emails = lead.records("email_addresses").map_or(0, <[Record]>::len);
        println!("  - {:?} ({emails} email addresses)", lead.id());
    }
    println!();

    Ok(())
}

/// Example 4: Write records under ids chosen by the caller
async fn example_smart_write(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 4: Smart Write");
    println!("----------------------");

    let records = vec![
        Record::for_module("Leads")
            .with("id", "tour-lead-0001")
            .with("last_name", "Babbage"),
        Record::for_module("Leads")
            .with("id", "tour-lead-0002")
            .with("last_name", "Menabrea"),
    ];

    match session.set_entries_smart(records).await? {
        SmartWrite::Written(written) => {
            for record in written.records() {
                let created = record.get(sugarcrm_api::rest::NEW_WITH_ID).is_some();
                println!("✓ {:?} (created: {created})", record.id());
            }
        }
        SmartWrite::CheckFailed { msg, reason } => {
            println!("✗ {msg}: {reason}");
        }
    }
    println!();

    Ok(())
}

/// Example 5: Relate a call to the lead
async fn example_relate(session: &Session, lead_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 5: Relationships");
    println!("------------------------");

    let mut call = Record::for_module("Calls")
        .with("name", "Intro call")
        .with("status", "Planned");
    session.set_entry(&mut call).await?;

    let lead = Record::for_module("Leads").with("id", lead_id);
    let counts = session.set_relationship(&lead, &call, false).await?;
    println!(
        "✓ created={} failed={} deleted={}",
        counts.created, counts.failed, counts.deleted
    );
    println!();

    Ok(())
}

/// Example 6: Named but unimplemented RPCs fail without a request
async fn example_unimplemented(session: &Session) {
    println!("Example 6: Unimplemented RPCs");
    println!("-----------------------------");

    match session.get_server_info().await {
        Err(e) if matches!(e.kind, ErrorKind::NotImplemented { .. }) => {
            println!("✓ {e}");
        }
        other => println!("✗ Unexpected: {other:?}"),
    }

    // The untyped escape hatch still reaches it
    match session.call("get_server_info", vec![]).await {
        Ok(info) => println!("✓ Server info: {info}"),
        Err(e) => println!("✗ {e}"),
    }
}
