//! Lists every active account number on the account named by
//! `INCREASE_ACCOUNT_ID`, or on all accounts if it is unset.
//!
//! ```text
//! INCREASE_API_KEY=... INCREASE_ENVIRONMENT=sandbox \
//!     cargo run --example list_account_numbers
//! ```

use increase::resources::{AccountNumberListParams, AccountNumberStatus, InFilter};
use increase::{Field, Increase};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> increase::Result<()> {
    let client = Increase::from_env()?;

    let mut params = AccountNumberListParams {
        limit: 100.into(),
        status: InFilter::any_of([AccountNumberStatus::Active]).into(),
        ..Default::default()
    };
    if let Ok(account_id) = std::env::var("INCREASE_ACCOUNT_ID") {
        params.account_id = Field::Value(account_id);
    }

    let mut numbers = client.account_numbers().list_auto_paging(&params).await?;
    let mut count = 0;
    while let Some(number) = numbers.next_item().await? {
        count += 1;
        println!(
            "{}\t{}\t{}",
            number.id.as_deref().unwrap_or("-"),
            number.name.as_deref().unwrap_or("-"),
            number.account_number.as_deref().unwrap_or("-"),
        );
    }
    tracing::info!("Listed {count} account numbers");

    Ok(())
}
