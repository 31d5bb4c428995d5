//! Value Objects Shared by Both APIs

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Customer identity attached to sessions and payments
///
/// Echoed back by session validation, where either field may be absent or
/// `null`; both then decode as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Merchant-side customer identifier
    #[serde(default, deserialize_with = "null_as_default", alias = "Id", alias = "ID")]
    pub id: String,

    /// Customer email
    #[serde(default, deserialize_with = "null_as_default", alias = "Email")]
    pub email: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

/// Gateway outcome embedded in a response body
///
/// This is the business-outcome signal. It is independent of the HTTP
/// status: a 200 response may still carry a rejection here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Component that produced the outcome
    #[serde(default, alias = "Source")]
    pub source: Option<i32>,

    /// Outcome code; positive values mean success
    #[serde(alias = "Code")]
    pub code: i32,

    /// Human-readable description
    #[serde(default, alias = "Message")]
    pub message: Option<String>,

    /// Additional detail
    #[serde(default, alias = "Info")]
    pub info: Option<String>,
}

impl Message {
    pub fn is_success(&self) -> bool {
        self.code > 0
    }

    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

/// Free-form method information
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    #[serde(default, alias = "Property1")]
    pub property1: Option<String>,

    #[serde(default, alias = "Property2")]
    pub property2: Option<String>,
}

/// Postal address (billing and delivery)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub phone: String,
}

/// Delivery address has the same shape as a billing address
pub type DeliveryAddress = Address;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_outcome() {
        let ok: Message = serde_json::from_str(r#"{"source":1,"code":1,"message":"OK","info":""}"#).unwrap();
        let rejected: Message = serde_json::from_str(r#"{"code":-1,"message":"Session object is invalid"}"#).unwrap();

        assert!(ok.is_success());
        assert!(!rejected.is_success());
        assert_eq!(rejected.text(), "Session object is invalid");
        assert_eq!(rejected.source, None);
    }

    #[test]
    fn test_message_requires_code() {
        assert!(serde_json::from_str::<Message>(r#"{"message":"no code"}"#).is_err());
    }

    #[test]
    fn test_customer_tolerates_missing_and_null_fields() {
        let partial: Customer = serde_json::from_str(r#"{"id": "u1"}"#).unwrap();
        let nulled: Customer = serde_json::from_str(r#"{"ID": "u2", "email": null}"#).unwrap();

        assert_eq!(partial, Customer::new("u1", ""));
        assert_eq!(nulled, Customer::new("u2", ""));
    }

    #[test]
    fn test_message_accepts_pascal_case() {
        let message: Message = serde_json::from_str(r#"{"Source": 2, "Code": -3, "Message": "Denied"}"#).unwrap();

        assert_eq!(message.source, Some(2));
        assert_eq!(message.code, -3);
        assert_eq!(message.text(), "Denied");
    }

    #[test]
    fn test_address_wire_names() {
        let address = Address {
            postal_code: "11300".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["PostalCode"], "11300");
        assert!(json.get("Street").is_some());
    }
}
