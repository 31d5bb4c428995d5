//! Tokenization API Schemas
//!
//! Sessions, card tokens and CVV binding. Response bodies carry their own
//! `code`/`message` outcome next to the payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::loose::LooseValue;
use super::shared::Customer;

// ============================================================================
// Value objects
// ============================================================================

/// Card bound to a session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCard {
    #[serde(default, alias = "PartnerId")]
    pub partner_id: Option<i64>,
    #[serde(default, alias = "CustomerId")]
    pub customer_id: Option<i64>,
    #[serde(default, alias = "SessionId")]
    pub session_id: Option<String>,
    #[serde(default, alias = "CardId")]
    pub card_id: Option<i64>,
}

/// Card data submitted for tokenization
///
/// Card fields pass through opaquely; no validation happens client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub card_holder_name: String,
    pub expiration_month: i64,
    pub expiration_year: i64,
    pub single_use: bool,
}

/// Stored card as listed by the gateway
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    #[serde(default, alias = "Token")]
    pub token: Option<String>,
    #[serde(default, alias = "Brand")]
    pub brand: Option<String>,
    #[serde(default, alias = "CardHolderName")]
    pub card_holder_name: Option<String>,
    #[serde(default, alias = "ExpirationMonth")]
    pub expiration_month: Option<LooseValue>,
    #[serde(default, alias = "ExpirationYear")]
    pub expiration_year: Option<LooseValue>,
    #[serde(default, alias = "MaskedNumber")]
    pub masked_number: Option<String>,
}

// ============================================================================
// Requests / responses
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSessionRequest {
    pub customer: Customer,
}

impl NewSessionRequest {
    pub fn for_customer(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            customer: Customer::new(id, email),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionResponse {
    /// Absent when the gateway refused to open a session
    #[serde(default, alias = "SessionId")]
    pub session_id: Option<String>,
    #[serde(alias = "Code")]
    pub code: i32,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSessionRequest {
    pub session_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSessionResponse {
    #[serde(default, alias = "PartnerId")]
    pub partner_id: Option<i64>,
    #[serde(default, alias = "CustomerId")]
    pub customer_id: Option<i64>,
    #[serde(default, alias = "SessionId")]
    pub session_id: Option<String>,
    #[serde(default, alias = "CreationDate")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, alias = "Customer")]
    pub customer: Option<Customer>,
    #[serde(default, rename = "sessionCard", alias = "SessionCard")]
    pub session_cards: Vec<SessionCard>,
    /// Present when the gateway reports a problem with the session
    #[serde(default, alias = "Code")]
    pub code: Option<i32>,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateCardTokenRequest {
    pub session_id: String,
    pub card: CardData,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCardTokenResponse {
    #[serde(default, alias = "Token")]
    pub token: Option<String>,
    #[serde(default, alias = "CardBrand")]
    pub card_brand: Option<String>,
    #[serde(alias = "Code")]
    pub code: i32,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTokensRequest {
    pub session_id: String,
}

impl ListTokensRequest {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTokensResponse {
    #[serde(default, alias = "Tokens")]
    pub tokens: Vec<TokenData>,
    #[serde(alias = "Code")]
    pub code: i32,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCardTokenRequest {
    pub token: String,
    pub session_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCardTokenResponse {
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(alias = "Code")]
    pub code: i32,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindCvvRequest {
    pub token: String,
    pub session_id: String,
    #[serde(rename = "CVV")]
    pub cvv: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindCvvResponse {
    #[serde(alias = "Code")]
    pub code: i32,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

/// Responses carrying a top-level `code`
pub trait TokenOutcome {
    fn code(&self) -> i32;

    /// Gateway-side success; positive codes mean success
    fn is_success(&self) -> bool {
        self.code() > 0
    }
}

macro_rules! impl_token_outcome {
    ($($ty:ty),* $(,)?) => {
        $(impl TokenOutcome for $ty {
            fn code(&self) -> i32 {
                self.code
            }
        })*
    };
}

impl_token_outcome!(
    NewSessionResponse,
    GenerateCardTokenResponse,
    ListTokensResponse,
    DeleteCardTokenResponse,
    BindCvvResponse,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_names() {
        let generate = GenerateCardTokenRequest {
            session_id: "sess".into(),
            card: CardData {
                card_holder_name: "Ana Silva".into(),
                expiration_month: 12,
                expiration_year: 2030,
                single_use: true,
            },
        };
        let json = serde_json::to_value(&generate).unwrap();
        assert_eq!(json["SessionId"], "sess");
        assert_eq!(json["Card"]["cardHolderName"], "Ana Silva");
        assert_eq!(json["Card"]["singleUse"], true);

        let bind = BindCvvRequest {
            token: "t".into(),
            session_id: "s".into(),
            cvv: "123".into(),
        };
        assert_eq!(
            serde_json::to_value(&bind).unwrap(),
            serde_json::json!({"token": "t", "sessionId": "s", "CVV": "123"})
        );
    }

    #[test]
    fn test_token_list_accepts_mixed_expirations() {
        let body = r#"{
            "tokens": [
                {"token": "a", "brand": "VISA", "expirationMonth": 12, "expirationYear": 2030, "maskedNumber": "411111******1111"},
                {"token": "b", "brand": "MASTER", "expirationMonth": "01", "expirationYear": "2031"}
            ],
            "code": 1,
            "message": "OK"
        }"#;
        let list: ListTokensResponse = serde_json::from_str(body).unwrap();

        assert_eq!(list.tokens.len(), 2);
        assert_eq!(list.tokens[0].expiration_month.as_ref().and_then(LooseValue::as_i64), Some(12));
        assert_eq!(list.tokens[1].expiration_month.as_ref().and_then(LooseValue::as_i64), Some(1));
        assert!(list.is_success());
    }

    #[test]
    fn test_validate_session_response() {
        let body = r#"{
            "partnerId": 10,
            "customerId": 77,
            "sessionId": "sess-1",
            "creationDate": "2024-05-01T10:00:00Z",
            "customer": {"id": "u1", "email": "ana@example.com"},
            "sessionCard": [{"partnerId": 10, "customerId": 77, "sessionId": "sess-1", "cardId": 3}]
        }"#;
        let response: ValidateSessionResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.session_id.as_deref(), Some("sess-1"));
        assert_eq!(response.session_cards[0].card_id, Some(3));
        assert_eq!(response.customer, Some(Customer::new("u1", "ana@example.com")));
        assert!(response.creation_date.is_some());
    }

    #[test]
    fn test_token_list_tolerates_pascal_case_and_missing_token() {
        let body = r#"{
            "Tokens": [{"Brand": "VISA", "ExpirationMonth": 3}, {"token": null, "brand": "MASTER"}],
            "Code": 1
        }"#;
        let list: ListTokensResponse = serde_json::from_str(body).unwrap();

        assert_eq!(list.code, 1);
        assert_eq!(list.tokens.len(), 2);
        assert!(list.tokens.iter().all(|t| t.token.is_none()));
        assert_eq!(list.tokens[0].brand.as_deref(), Some("VISA"));
    }

    #[test]
    fn test_validate_session_with_partial_customer() {
        let body = r#"{"sessionId": "sess-1", "customer": {"id": "u1", "email": null}, "SessionCard": [{"CardId": 4}]}"#;
        let response: ValidateSessionResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.customer, Some(Customer::new("u1", "")));
        assert_eq!(response.session_cards[0].card_id, Some(4));
    }

    #[test]
    fn test_negative_code_is_not_success() {
        let response: BindCvvResponse =
            serde_json::from_str(r#"{"code":-1,"message":"Session object is invalid"}"#).unwrap();
        assert!(!response.is_success());
    }
}
