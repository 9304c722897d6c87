#[macro_use]
extern crate tracing;

use anyhow::Result;
use lockstep_rs::{
    AccountingProfileContactResultModel, AccountingProfileModel, AccountingProfileRequest, Client,
    Credentials, Environment,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("LOCKSTEP_API_KEY")?;
    let company_id: Uuid = std::env::var("LOCKSTEP_COMPANY_ID")?.parse()?;
    let client = Client::new(Environment::Sandbox, Credentials::ApiKey(api_key))?;
    let profiles = client.accounting_profiles();

    let created: Vec<AccountingProfileModel> = profiles
        .create_accounting_profiles(&[AccountingProfileRequest {
            company_id: Some(company_id),
            name: Some("Accounts Receivable".to_string()),
            r#type: Some("AR".to_string()),
            email_address: Some("ar@example.com".to_string()),
            ..Default::default()
        }])
        .await?
        .json()?;
    info!("created accounting profiles: {:#?}", created);

    let Some(profile_id) = created.first().and_then(|profile| profile.accounting_profile_id) else {
        warn!("no accounting profile was created");
        return Ok(());
    };

    let contacts: Vec<AccountingProfileContactResultModel> = profiles
        .retrieve_all_accounting_profile_contacts(profile_id)
        .await?
        .json()?;
    info!("profile {profile_id} has {} contacts", contacts.len());

    let response = profiles.delete_accounting_profile(profile_id).await?;
    info!("deleted profile {profile_id}: {}", response.status);

    Ok(())
}
