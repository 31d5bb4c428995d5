//! Subcommands

use clap::{Parser, Subcommand};
use serde_json::{Value, json};

use tuna_core::{Dispatcher, Operation};
use tuna_payments::model::{
    BindCvvRequest, DeleteCardTokenRequest, ListTokensRequest, OptionsRequest, StatusRequest,
    ValidateSessionRequest,
};
use tuna_payments::{GatewayConfig, PaymentAdapter};

#[derive(Debug, Parser)]
#[command(name = "tuna", version, about = "Call the Tuna tokenization and payment APIs")]
pub struct Cli {
    /// Override TUNA_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open a session for a customer and print its ID
    NewSession {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        email: String,
    },

    /// Validate an existing session
    ValidateSession {
        #[arg(long)]
        session_id: String,
    },

    /// List stored cards of a session's customer
    ListTokens {
        #[arg(long)]
        session_id: String,
    },

    /// Delete a stored card
    DeleteToken {
        #[arg(long)]
        session_id: String,
        #[arg(long)]
        token: String,
    },

    /// Bind a CVV to a stored card
    BindCvv {
        #[arg(long)]
        session_id: String,
        #[arg(long)]
        token: String,
        #[arg(long)]
        cvv: String,
    },

    /// Show the payment options of a partner
    Options {
        #[arg(long, default_value_t = 0)]
        partner_id: i64,
        #[arg(long, default_value = "")]
        account: String,
    },

    /// Query the status of a payment
    Status {
        #[arg(long)]
        partner_unique_id: String,
        #[arg(long)]
        payment_key: String,
        #[arg(long, default_value_t = 0)]
        partner_id: i64,
        #[arg(long, default_value = "")]
        account: String,
    },

    /// Print every endpoint resolved against the configured base URL
    Endpoints,
}

/// Execute a subcommand and return what should be printed
pub async fn run(
    adapter: &PaymentAdapter,
    dispatcher: &Dispatcher,
    config: &GatewayConfig,
    command: Command,
) -> anyhow::Result<Value> {
    let tokens = adapter.tokens();
    let payments = adapter.payments();

    let output = match command {
        Command::NewSession { user_id, email } => {
            let session_id = adapter.new_session(&user_id, &email).await?;
            json!({ "sessionId": session_id })
        }
        Command::ValidateSession { session_id } => {
            serde_json::to_value(tokens.validate_session(&ValidateSessionRequest { session_id }).await?)?
        }
        Command::ListTokens { session_id } => {
            serde_json::to_value(tokens.list_tokens(&ListTokensRequest::new(session_id)).await?)?
        }
        Command::DeleteToken { session_id, token } => serde_json::to_value(
            tokens
                .delete_card_token(&DeleteCardTokenRequest { token, session_id })
                .await?,
        )?,
        Command::BindCvv { session_id, token, cvv } => serde_json::to_value(
            tokens
                .bind_cvv(&BindCvvRequest { token, session_id, cvv })
                .await?,
        )?,
        Command::Options { partner_id, account } => serde_json::to_value(
            payments
                .options(&OptionsRequest {
                    partner_id,
                    app_token: config.app_token.clone(),
                    account,
                    extra_info: String::new(),
                })
                .await?,
        )?,
        Command::Status {
            partner_unique_id,
            payment_key,
            partner_id,
            account,
        } => serde_json::to_value(
            payments
                .status(&StatusRequest {
                    partner_unique_id,
                    payment_key,
                    partner_id,
                    app_token: config.app_token.clone(),
                    account,
                    ..Default::default()
                })
                .await?,
        )?,
        Command::Endpoints => endpoint_table(dispatcher)?,
    };

    Ok(output)
}

fn endpoint_table(dispatcher: &Dispatcher) -> anyhow::Result<Value> {
    let mut rows = Vec::with_capacity(Operation::ALL.len());
    for operation in Operation::ALL {
        rows.push(json!({
            "operation": operation.name(),
            "method": operation.endpoint().method.to_string(),
            "url": dispatcher.url_for(operation)?.to_string(),
        }));
    }
    Ok(Value::Array(rows))
}
