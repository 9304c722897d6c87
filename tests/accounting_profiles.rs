
use anyhow::Result;
use lockstep_rs::{
    AccountingProfileContactResultModel, AccountingProfileModel, AccountingProfileRequest,
    FetchResult, Patch, QueryParameters,
    clients::{AccountingProfilesClient, accounting_profiles},
};
use reqwest::Method;
use serde_json::json;
use test_utils::RecordingConnection;
use uuid::Uuid;

const PROFILE_ID: &str = "9d3a1f7e-2b64-4c1a-8f0d-5e6a7b8c9d0e";

fn profile_id() -> Uuid {
    Uuid::parse_str(PROFILE_ID).unwrap()
}

#[tokio::test]
async fn retrieve_accounting_profile() -> Result<()> {
    test_utils::do_setup();
    let connection = RecordingConnection::ok(json!({
        "accountingProfileId": PROFILE_ID,
        "name": "Accounts Payable",
        "type": "AP",
        "created": "2022-04-01T09:30:00Z",
    }));

    let response = AccountingProfilesClient::new(&connection)
        .retrieve_accounting_profile(profile_id(), Some("Notes"))
        .await?;

    let request = connection.single_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, format!("/api/v1/profiles/accounting/{PROFILE_ID}"));
    assert_eq!(
        request.query,
        vec![("include".to_string(), "Notes".to_string())]
    );

    let profile: AccountingProfileModel = response.json()?;
    assert_eq!(profile.accounting_profile_id, Some(profile_id()));
    assert_eq!(profile.r#type.as_deref(), Some("AP"));
    assert_eq!(
        profile.created.map(|created| created.value()),
        Some(time::macros::datetime!(2022-04-01 09:30:00 UTC))
    );

    Ok(())
}

#[tokio::test]
async fn update_and_delete_accounting_profile() -> Result<()> {
    let connection = RecordingConnection::ok(json!({}));
    let client = AccountingProfilesClient::new(&connection);

    client
        .update_accounting_profile(profile_id(), &Patch::new().set("email_address", "ap@acme.example"))
        .await?;
    client.delete_accounting_profile(profile_id()).await?;

    let requests = connection.requests();
    assert_eq!(requests.len(), 2);

    assert_eq!(requests[0].method, Method::PATCH);
    assert_eq!(requests[0].path, format!("/api/v1/profiles/accounting/{PROFILE_ID}"));
    assert_eq!(requests[0].body, Some(json!({ "emailAddress": "ap@acme.example" })));

    assert_eq!(requests[1].method, Method::DELETE);
    assert_eq!(requests[1].path, format!("/api/v1/profiles/accounting/{PROFILE_ID}"));
    assert_eq!(requests[1].body, None);

    Ok(())
}

#[tokio::test]
async fn create_accounting_profiles() -> Result<()> {
    let connection = RecordingConnection::ok(json!([{ "accountingProfileId": PROFILE_ID }]));
    let company_id = Uuid::nil();
    let profiles = vec![AccountingProfileRequest {
        company_id: Some(company_id),
        name: Some("Accounts Receivable".to_string()),
        r#type: Some("AR".to_string()),
        address1: Some("1 Main St".to_string()),
        ..Default::default()
    }];

    let response = AccountingProfilesClient::new(&connection)
        .create_accounting_profiles(profiles.as_slice())
        .await?;

    let request = connection.single_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/v1/profiles/accounting");
    assert_eq!(
        request.body,
        Some(json!([{
            "companyId": "00000000-0000-0000-0000-000000000000",
            "name": "Accounts Receivable",
            "type": "AR",
            "address1": "1 Main St",
        }]))
    );

    let created: Vec<AccountingProfileModel> = response.json()?;
    assert_eq!(created[0].accounting_profile_id, Some(profile_id()));
    Ok(())
}

#[tokio::test]
async fn query_accounting_profiles() -> Result<()> {
    let connection = RecordingConnection::ok(json!({
        "records": [{ "accountingProfileId": PROFILE_ID }],
        "totalCount": 1,
        "pageSize": accounting_profiles::MAX_PAGE_SIZE,
        "pageNumber": 0,
    }));
    let parameters = QueryParameters::new()
        .filter("type eq 'AR'")
        .page_size(accounting_profiles::MAX_PAGE_SIZE);

    let response = AccountingProfilesClient::new(&connection)
        .query_accounting_profiles(&parameters)
        .await?;

    let request = connection.single_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/v1/profiles/accounting/query");
    assert_eq!(
        request.query,
        vec![
            ("filter".to_string(), "type eq 'AR'".to_string()),
            ("pageSize".to_string(), "500".to_string()),
        ]
    );

    let page: FetchResult<AccountingProfileModel> = response.json()?;
    assert_eq!(page.page_size, Some(500));
    Ok(())
}

#[tokio::test]
async fn retrieve_all_accounting_profile_contacts() -> Result<()> {
    let connection = RecordingConnection::ok(json!([
        { "contactId": "0f8fad5b-d9cb-469f-a165-70867728950e", "isPrimary": true, "contactName": "Grace" },
        { "contactId": "7c9e6679-7425-40de-944b-e07fc1f90ae7", "isPrimary": false },
    ]));

    let response = AccountingProfilesClient::new(&connection)
        .retrieve_all_accounting_profile_contacts(profile_id())
        .await?;

    let request = connection.single_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(
        request.path,
        format!("/api/v1/profiles/accounting/{PROFILE_ID}/contacts/models")
    );
    assert!(request.query.is_empty());

    let contacts: Vec<AccountingProfileContactResultModel> = response.json()?;
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].is_primary, Some(true));
    assert_eq!(contacts[0].contact_name.as_deref(), Some("Grace"));

    Ok(())
}
