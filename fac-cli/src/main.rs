//! FAC CLI
//!
//! Builds First Atlantic Commerce requests, prints the XML that would be
//! posted and, with `--send`, posts it and prints the normalized reply.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fac_client::HttpTransport;
use fac_gateway::{
    AcquirerRequest, CardTransactionParams, Gateway, GatewayConfig, HostedPageParams,
    HostedPageResultParams, ModificationParams, TransactionStatusParams, codec,
};
use fac_types::{BillingAddress, Card, GatewayResponse, TransactionCode};

#[derive(Parser)]
#[command(name = "fac")]
#[command(author, version, about = "First Atlantic Commerce request tool", long_about = None)]
struct Cli {
    /// Merchant id (falls back to FAC_MERCHANT_ID)
    #[arg(long, global = true)]
    merchant_id: Option<String>,

    /// Processing password (falls back to FAC_MERCHANT_PASSWORD)
    #[arg(long, global = true)]
    merchant_password: Option<String>,

    /// Acquirer id (falls back to FAC_ACQUIRER_ID)
    #[arg(long, global = true)]
    acquirer_id: Option<String>,

    /// Use the test environment (or set FAC_TEST_MODE=true)
    #[arg(long, global = true)]
    test_mode: bool,

    /// Post the request instead of only printing it
    #[arg(long, global = true)]
    send: bool,

    /// Seconds to wait for the acquirer when sending
    #[arg(long, global = true, default_value = "60")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authorize a card without capturing funds
    Authorize(CardTransactionArgs),
    /// Authorize and capture in one step
    Purchase(CardTransactionArgs),
    /// Capture a previous authorization
    Capture(ModificationArgs),
    /// Void a previous transaction
    Void(ModificationArgs),
    /// Refund a captured transaction
    Refund(ModificationArgs),
    /// Set up a hosted payment page session
    HostedPage {
        #[command(flatten)]
        amount: AmountArgs,
        /// URL the card holder returns to afterwards
        #[arg(long)]
        response_url: String,
        /// Hosted page set (falls back to FAC_PAGE_SET)
        #[arg(long)]
        page_set: Option<String>,
        /// Hosted page name (falls back to FAC_PAGE_NAME)
        #[arg(long)]
        page_name: Option<String>,
        #[arg(long)]
        create_card: bool,
        /// Raw transaction code bits, e.g. 136
        #[arg(long)]
        transaction_code: Option<u32>,
    },
    /// Fetch the outcome of a hosted page session
    HostedPageResult {
        /// Security token returned by the preprocess call
        token: String,
    },
    /// Query the status of an order
    Status {
        /// Order number
        transaction_id: String,
    },
}

#[derive(Args)]
struct AmountArgs {
    /// Amount in major units, e.g. 10.00
    #[arg(long)]
    amount: String,
    #[arg(long, default_value = "USD")]
    currency: String,
    /// Merchant order number
    #[arg(long)]
    transaction_id: String,
}

#[derive(Args)]
struct CardTransactionArgs {
    #[command(flatten)]
    amount: AmountArgs,
    #[command(flatten)]
    card: CardArgs,
    /// Ask the acquirer to tokenize the card
    #[arg(long)]
    create_card: bool,
    /// Raw transaction code bits, overriding the default
    #[arg(long)]
    transaction_code: Option<u32>,
    #[arg(long)]
    client_ip: Option<String>,
}

#[derive(Args)]
struct CardArgs {
    #[arg(long)]
    number: String,
    #[arg(long)]
    expiry_month: u32,
    #[arg(long)]
    expiry_year: i32,
    #[arg(long)]
    cvv: Option<String>,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
}

#[derive(Args)]
struct ModificationArgs {
    #[arg(long)]
    amount: String,
    #[arg(long, default_value = "USD")]
    currency: String,
    /// Order number of the original transaction
    #[arg(long)]
    transaction_id: String,
}

impl CardArgs {
    fn into_card(self) -> Card {
        let mut card = Card::new(self.number, self.expiry_month, self.expiry_year);
        if let Some(cvv) = self.cvv {
            card = card.with_cvv(cvv);
        }
        card.first_name = self.first_name;
        card.last_name = self.last_name;
        if self.email.is_some() {
            card = card.with_billing(BillingAddress {
                email: self.email,
                ..Default::default()
            });
        }
        card
    }
}

impl CardTransactionArgs {
    fn into_params(self) -> Result<CardTransactionParams> {
        let mut params = CardTransactionParams::new(
            self.amount.amount,
            self.amount.currency,
            self.amount.transaction_id,
            self.card.into_card(),
        )
        .with_create_card(self.create_card);
        if let Some(bits) = self.transaction_code {
            params = params.with_transaction_code(TransactionCode::from_bits(bits)?);
        }
        params.client_ip = self.client_ip;
        Ok(params)
    }
}

impl ModificationArgs {
    fn into_params(self) -> ModificationParams {
        ModificationParams::new(self.amount, self.currency, self.transaction_id)
    }
}

fn load_config(cli: &Cli) -> GatewayConfig {
    let mut config = GatewayConfig::from_env();
    if let Some(id) = &cli.merchant_id {
        config = config.with_merchant_id(id);
    }
    if let Some(password) = &cli.merchant_password {
        config = config.with_merchant_password(password);
    }
    if let Some(id) = &cli.acquirer_id {
        config = config.with_acquirer_id(id);
    }
    if cli.test_mode {
        config = config.with_test_mode(true);
    }
    config
}

/// Prints the encoded request and, when asked, sends it.
async fn run<R: AcquirerRequest>(
    gateway: &Gateway,
    request: R,
    send: bool,
    timeout: Duration,
) -> Result<Option<GatewayResponse>> {
    let xml = codec::encode(R::ROOT, request.data())?;
    println!("POST {}", gateway.request_url::<R>());
    println!("{}", xml);

    if send {
        let transport = HttpTransport::new().with_timeout(timeout);
        let response = gateway
            .send(&transport, &request)
            .await
            .with_context(|| format!("{} request failed", R::OPERATION))?;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(Some(response));
    }
    Ok(None)
}

/// Redirect URL for a preprocessed session, or the bare token when no
/// hosted page is configured.
fn redirect_line(gateway: &Gateway, token: &str) -> String {
    match gateway.hosted_page_url(token) {
        Ok(url) => format!("Redirect: {}", url),
        Err(e) => {
            tracing::warn!(error = %e, "no redirect URL, set --page-set and --page-name");
            format!("Security token: {}", token)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fac_gateway=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli);
    let send = cli.send;
    let timeout = Duration::from_secs(cli.timeout);

    if let Commands::HostedPage {
        page_set, page_name, ..
    } = &cli.command
    {
        if let (Some(set), Some(name)) = (
            page_set.clone().or_else(|| config.page_set.clone()),
            page_name.clone().or_else(|| config.page_name.clone()),
        ) {
            config = config.with_hosted_page(set, name);
        }
    }

    tracing::debug!(?config, "loaded configuration");
    let gateway = Gateway::new(config).context("incomplete merchant configuration")?;

    match cli.command {
        Commands::Authorize(args) => {
            let request = gateway.authorize(args.into_params()?)?;
            run(&gateway, request, send, timeout).await?;
        }
        Commands::Purchase(args) => {
            let request = gateway.purchase(args.into_params()?)?;
            run(&gateway, request, send, timeout).await?;
        }
        Commands::Capture(args) => {
            let request = gateway.capture(args.into_params())?;
            run(&gateway, request, send, timeout).await?;
        }
        Commands::Void(args) => {
            let request = gateway.void(args.into_params())?;
            run(&gateway, request, send, timeout).await?;
        }
        Commands::Refund(args) => {
            let request = gateway.refund(args.into_params())?;
            run(&gateway, request, send, timeout).await?;
        }
        Commands::HostedPage {
            amount,
            response_url,
            create_card,
            transaction_code,
            ..
        } => {
            let mut params = HostedPageParams::new(
                amount.amount,
                amount.currency,
                amount.transaction_id,
                response_url,
            );
            params.create_card = create_card;
            if let Some(bits) = transaction_code {
                params = params.with_transaction_code(TransactionCode::from_bits(bits)?);
            }
            let request = gateway.hosted_page(params)?;
            let token = run(&gateway, request, send, timeout)
                .await?
                .and_then(|response| response.redirect_token);

            if let Some(token) = token {
                println!("{}", redirect_line(&gateway, &token));
            }
        }
        Commands::HostedPageResult { token } => {
            let request = gateway.hosted_page_result(HostedPageResultParams::new(token))?;
            run(&gateway, request, send, timeout).await?;
        }
        Commands::Status { transaction_id } => {
            let request = gateway.transaction_status(TransactionStatusParams::new(transaction_id))?;
            run(&gateway, request, send, timeout).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GatewayConfig {
        GatewayConfig::new()
            .with_merchant_id(123456)
            .with_merchant_password("abcdefg")
            .with_acquirer_id(12345)
            .with_test_mode(true)
    }

    #[test]
    fn test_redirect_line_with_hosted_page() {
        let gateway = Gateway::new(config().with_hosted_page("MyPageSet", "PaymentPage")).unwrap();
        assert_eq!(
            redirect_line(&gateway, "abc"),
            "Redirect: https://ecm.firstatlanticcommerce.com/MerchantPages/MyPageSet/PaymentPage/abc"
        );
    }

    #[test]
    fn test_redirect_line_without_hosted_page() {
        let gateway = Gateway::new(config()).unwrap();
        assert_eq!(redirect_line(&gateway, "abc"), "Security token: abc");
    }
}
