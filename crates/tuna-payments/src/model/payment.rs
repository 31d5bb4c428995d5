//! Payment API Schemas
//!
//! Field names follow the gateway exactly, which mixes PascalCase and
//! camelCase between (and sometimes within) operations. Response records
//! also accept the other casing of each key, since the gateway is not
//! consistent about which one it writes.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tuna_core::{GatewayError, Result};

use super::loose::LooseValue;
use super::shared::{AdditionalInfo, Address, Customer, DeliveryAddress, Message};

// ============================================================================
// Value objects
// ============================================================================

/// Browser-side context of the payer
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FrontData {
    #[serde(rename = "SessionID")]
    pub session_id: String,
    pub origin: String,
    pub ip_address: String,
    pub cookies_accepted: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingInfo {
    pub document: String,
    pub document_type: String,
    pub address: Address,
}

/// Card used by a payment method, either raw or tokenized
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CardInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<LooseValue>,
    pub card_holder_name: String,
    pub brand_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<LooseValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<LooseValue>,
    pub token: String,
    pub token_single_use: i32,
    pub save_card: bool,
    pub billing_info: BillingInfo,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentMethod {
    pub payment_method_type: String,
    pub amount: i64,
    pub installments: i32,
    pub card_info: CardInfo,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AntiFraud {
    pub delivery_addressee: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentData {
    pub payment_methods: Vec<PaymentMethod>,
    #[serde(rename = "Countrycode")]
    pub country_code: String,
    pub anti_fraud: AntiFraud,
    pub delivery_address: DeliveryAddress,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentItem {
    pub amount: i64,
    pub product_description: String,
    pub item_quantity: i32,
    pub category_name: String,
    pub ean: String,
    pub anti_fraud: AntiFraud,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectInfo {
    #[serde(default, alias = "Url")]
    pub url: Option<String>,
}

/// Per-method result reported by payment operations
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    #[serde(default, alias = "Message")]
    pub message: Option<Message>,
    #[serde(default, alias = "AdditionalInfo")]
    pub additional_info: Option<AdditionalInfo>,
    #[serde(default, alias = "MethodType")]
    pub method_type: Option<String>,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, alias = "MethodId")]
    pub method_id: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetailData {
    #[serde(rename = "cardNumber")]
    pub card_number: String,
}

/// Amount to capture or cancel on one payment method
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CardDetail {
    pub method_id: i64,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CardDetailData>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemDetail {
    pub item_quantity: i32,
    #[serde(rename = "DetailUniqueID")]
    pub detail_unique_id: String,
}

/// Per-item result of an item cancellation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, alias = "Message")]
    pub message: Option<Message>,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, alias = "PartnerUniqueId")]
    pub partner_unique_id: Option<String>,
    #[serde(default, alias = "MethodType")]
    pub method_type: Option<String>,
}

/// Payment option offered to a partner
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "DisplayName")]
    pub display_name: Option<String>,
    #[serde(default, alias = "AcceptedBrands")]
    pub accepted_brands: Vec<String>,
    #[serde(default, alias = "PaymentBehavior")]
    pub payment_behavior: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GiftCard {
    pub card_number: String,
    pub organization: String,
}

/// Arguments of a generic function call
///
/// Only the gift card argument has a known shape; anything else is passed
/// through as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Arguments {
    #[serde(rename = "GiftCard", default, skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<GiftCard>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ============================================================================
// Requests / responses
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InitRequest {
    #[serde(rename = "PartnerUniqueID")]
    pub partner_unique_id: String,
    pub customer: Customer,
    pub payment_items: Vec<PaymentItem>,
    pub payment_data: PaymentData,
    pub front_data: FrontData,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitResponse {
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, alias = "Methods")]
    pub methods: Vec<Method>,
    #[serde(default, alias = "PaymentKey")]
    pub payment_key: Option<String>,
    #[serde(default, alias = "PartnerUniqueId")]
    pub partner_unique_id: Option<String>,
    #[serde(default, alias = "Message")]
    pub message: Option<Message>,
    #[serde(default, alias = "RedirectInfo")]
    pub redirect_info: Option<RedirectInfo>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelRequest {
    #[serde(rename = "PartnerUniqueID")]
    pub partner_unique_id: String,
    pub payment_date: String,
    pub cancel_all: bool,
    pub cards_detail: Vec<CardDetail>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResponse {
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, alias = "Methods")]
    pub methods: Vec<Method>,
    #[serde(default, alias = "Message")]
    pub message: Option<Message>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelItemRequest {
    #[serde(rename = "PartnerUniqueID")]
    pub partner_unique_id: String,
    pub payment_date: String,
    pub items_detail: Vec<ItemDetail>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelItemResponse {
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, rename = "Items", alias = "items")]
    pub items: Vec<Item>,
    #[serde(default, alias = "Message")]
    pub message: Option<Message>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRequest {
    pub amount: i64,
    pub cards_detail: Vec<CardDetail>,
    pub payment_key: String,
    #[serde(rename = "partnerUniqueID")]
    pub partner_unique_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    pub app_token: String,
    pub account: String,
    pub extra_info: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResponse {
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, alias = "Methods")]
    pub methods: Vec<Method>,
    #[serde(default, alias = "Message")]
    pub message: Option<Message>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueRequest {
    pub amount: i64,
    pub additional_info: AdditionalInfo,
    pub payment_key: String,
    #[serde(rename = "partnerUniqueID")]
    pub partner_unique_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    pub app_token: String,
    pub account: String,
    pub extra_info: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueResponse {
    #[serde(default, alias = "Message")]
    pub message: Option<Message>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    #[serde(rename = "partnerUniqueID")]
    pub partner_unique_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    pub payment_key: String,
    #[serde(rename = "partnerID")]
    pub partner_id: i64,
    pub app_token: String,
    pub account: String,
    pub extra_info: String,
}

/// Payment status
///
/// The gateway's status document is open-ended; known fields are typed and
/// everything else is kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, alias = "Methods")]
    pub methods: Vec<Method>,
    #[serde(default, alias = "Message")]
    pub message: Option<Message>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsRequest {
    #[serde(rename = "partnerID")]
    pub partner_id: i64,
    pub app_token: String,
    pub account: String,
    pub extra_info: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    #[serde(default, alias = "PaymentOptions")]
    pub payment_options: Vec<PaymentOption>,
    #[serde(default, alias = "Message")]
    pub message: Option<Message>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionRequest {
    #[serde(rename = "PartnerUniqueID")]
    pub partner_unique_id: String,
    pub function_name: String,
    pub arguments: Arguments,
}

/// Result of a generic function call
///
/// `response` is schema-less; use [`FunctionResponse::response_as`] to
/// coerce it into a concrete type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(default, alias = "Response")]
    pub response: serde_json::Value,
    #[serde(default, alias = "Message")]
    pub message: Option<Message>,
}

impl FunctionResponse {
    /// Decode the open payload into `T`
    pub fn response_as<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.response).map_err(GatewayError::Decode)
    }
}

/// Responses carrying an embedded [`Message`]
pub trait PaymentOutcome {
    fn outcome(&self) -> Option<&Message>;

    /// Gateway-side success; false when no outcome was reported
    fn is_success(&self) -> bool {
        self.outcome().is_some_and(Message::is_success)
    }
}

macro_rules! impl_payment_outcome {
    ($($ty:ty),* $(,)?) => {
        $(impl PaymentOutcome for $ty {
            fn outcome(&self) -> Option<&Message> {
                self.message.as_ref()
            }
        })*
    };
}

impl_payment_outcome!(
    InitResponse,
    CancelResponse,
    CancelItemResponse,
    CaptureResponse,
    ContinueResponse,
    StatusResponse,
    OptionsResponse,
    FunctionResponse,
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_init_request_wire_names() {
        let request = InitRequest {
            partner_unique_id: "order-42".into(),
            customer: Customer::new("u1", "ana@example.com"),
            payment_items: vec![PaymentItem {
                amount: 1500,
                product_description: "Mate".into(),
                item_quantity: 1,
                ..Default::default()
            }],
            payment_data: PaymentData {
                country_code: "UY".into(),
                payment_methods: vec![PaymentMethod {
                    payment_method_type: "1".into(),
                    amount: 1500,
                    installments: 1,
                    card_info: CardInfo {
                        token: "tok_1".into(),
                        ..Default::default()
                    },
                }],
                ..Default::default()
            },
            front_data: FrontData {
                session_id: "sess".into(),
                ip_address: "10.0.0.1".into(),
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["PartnerUniqueID"], "order-42");
        assert_eq!(json["Customer"]["email"], "ana@example.com");
        assert_eq!(json["PaymentItems"][0]["ProductDescription"], "Mate");
        assert_eq!(json["PaymentData"]["Countrycode"], "UY");
        assert_eq!(json["PaymentData"]["PaymentMethods"][0]["CardInfo"]["Token"], "tok_1");
        assert!(json["PaymentData"]["PaymentMethods"][0]["CardInfo"].get("CardNumber").is_none());
        assert_eq!(json["FrontData"]["SessionID"], "sess");
        assert_eq!(json["FrontData"]["IpAddress"], "10.0.0.1");
    }

    #[test]
    fn test_card_info_accepts_numeric_card_fields() {
        let body = r#"{
            "CardNumber": 4111111111111111,
            "CardHolderName": "Ana Silva",
            "BrandName": "VISA",
            "ExpirationMonth": "12",
            "ExpirationYear": 2030,
            "Token": "",
            "TokenSingleUse": 0,
            "SaveCard": false,
            "BillingInfo": {"Document": "1", "DocumentType": "CI", "Address": {
                "Street": "", "Number": "", "Complement": "", "Neighborhood": "", "City": "",
                "State": "", "Country": "", "PostalCode": "", "Phone": ""
            }}
        }"#;
        let card: CardInfo = serde_json::from_str(body).unwrap();

        assert_eq!(card.card_number.unwrap().as_text(), "4111111111111111");
        assert_eq!(card.expiration_month.unwrap().as_i64(), Some(12));
        assert_eq!(card.expiration_year.unwrap().as_i64(), Some(2030));
    }

    #[test]
    fn test_status_request_wire_names() {
        let request = StatusRequest {
            partner_unique_id: "order-42".into(),
            payment_date: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
            payment_key: "pk".into(),
            partner_id: 9,
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["partnerUniqueID"], "order-42");
        assert_eq!(json["partnerID"], 9);
        assert_eq!(json["paymentDate"], "2024-05-01T12:00:00Z");
        assert_eq!(json["extraInfo"], "");
    }

    #[test]
    fn test_status_response_keeps_unknown_fields() {
        let body = r#"{"status":"2","paymentStatusCode":"A","message":{"code":1}}"#;
        let status: StatusResponse = serde_json::from_str(body).unwrap();

        assert_eq!(status.status.as_deref(), Some("2"));
        assert_eq!(status.extra["paymentStatusCode"], "A");
        assert!(status.is_success());
    }

    #[test]
    fn test_function_response_accepts_any_payload() {
        for payload in [r#"{"balance": 150}"#, "[1,2,3]", r#""done""#, "42", "null"] {
            let body = format!(r#"{{"response": {payload}, "message": {{"code": 1}}}}"#);
            let parsed: FunctionResponse = serde_json::from_str(&body).unwrap();
            assert!(parsed.is_success(), "{payload}");
        }
    }

    #[test]
    fn test_function_response_coercion() {
        #[derive(Deserialize)]
        struct Balance {
            balance: i64,
        }

        let parsed: FunctionResponse =
            serde_json::from_str(r#"{"response": {"balance": 150}, "message": {"code": 1}}"#).unwrap();
        assert_eq!(parsed.response_as::<Balance>().unwrap().balance, 150);

        let err = parsed.response_as::<Vec<i64>>().unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn test_function_arguments_pass_through() {
        let mut arguments = Arguments {
            gift_card: Some(GiftCard {
                card_number: "6000".into(),
                organization: "ACME".into(),
            }),
            ..Default::default()
        };
        arguments.extra.insert("Pin".into(), serde_json::json!("1234"));

        let json = serde_json::to_value(&arguments).unwrap();
        assert_eq!(json["GiftCard"]["Organization"], "ACME");
        assert_eq!(json["Pin"], "1234");
    }

    #[test]
    fn test_cancel_item_response_accepts_both_casings() {
        let gateway = r#"{
            "status": "1",
            "Items": [{"message": {"code": 1}, "Status": "C", "PartnerUniqueId": "item-1", "MethodType": "1"}],
            "message": {"code": 1}
        }"#;
        let camel = r#"{
            "status": "1",
            "items": [{"message": {"code": 1}, "status": "C", "partnerUniqueId": "item-1", "methodType": "1"}],
            "message": {"code": 1}
        }"#;

        for body in [gateway, camel] {
            let response: CancelItemResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.items.len(), 1, "{body}");

            let item = &response.items[0];
            assert_eq!(item.status.as_deref(), Some("C"));
            assert_eq!(item.partner_unique_id.as_deref(), Some("item-1"));
            assert_eq!(item.method_type.as_deref(), Some("1"));
            assert!(item.message.as_ref().is_some_and(Message::is_success));
        }
    }

    #[test]
    fn test_pascal_case_init_response() {
        let body = r#"{
            "Status": "2",
            "PaymentKey": "pk-1",
            "PartnerUniqueId": "order-42",
            "Methods": [{"MethodId": 7, "Status": "A", "Message": {"Code": 1}}],
            "Message": {"Code": 1, "Message": "OK"}
        }"#;
        let response: InitResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.payment_key.as_deref(), Some("pk-1"));
        assert_eq!(response.methods[0].method_id, Some(7));
        assert!(response.is_success());
    }

    #[test]
    fn test_payment_option_without_name() {
        let body = r#"{"paymentOptions": [{"displayName": "Card", "acceptedBrands": ["VISA"]}], "message": {"code": 1}}"#;
        let response: OptionsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.payment_options[0].name, None);
        assert_eq!(response.payment_options[0].display_name.as_deref(), Some("Card"));
    }

    #[test]
    fn test_missing_message_is_not_success() {
        let response: CaptureResponse = serde_json::from_str(r#"{"status":"3"}"#).unwrap();
        assert!(!response.is_success());
    }
}
