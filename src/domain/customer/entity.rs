//! Customer entity

use crate::domain::shared::CustomerId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Customer record as stored in the dataset.
///
/// Only `id` is interpreted. Every other attribute is opaque and kept in
/// `attributes` exactly as read, including its position and JSON type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Customer {
    pub fn new(id: i64, name: &str, phone: &str, order_status: &str) -> Self {
        let mut attributes = Map::new();
        attributes.insert("name".to_string(), Value::from(name));
        attributes.insert("phone".to_string(), Value::from(phone));
        attributes.insert("order_status".to_string(), Value::from(order_status));

        Self {
            id: CustomerId::new(id),
            attributes,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_attributes_survive_serialization() {
        let raw = json!({
            "id": 3,
            "name": "Carol",
            "phone": "+15550003",
            "order_status": "shipped",
            "order_id": "ORD-1003"
        });

        let customer: Customer = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(customer.id, CustomerId::new(3));
        assert_eq!(customer.attribute("order_id"), Some(&json!("ORD-1003")));
        assert_eq!(serde_json::to_value(&customer).unwrap(), raw);
    }

    #[test]
    fn test_untyped_attributes_round_trip() {
        let raw = r#"{"id":1,"phone":919876543210,"name":null,"order_status":"pending","tags":["vip"]}"#;

        let customer: Customer = serde_json::from_str(raw).unwrap();
        assert_eq!(customer.attribute("phone"), Some(&json!(919876543210_u64)));
        assert_eq!(customer.attribute("name"), Some(&Value::Null));
        assert_eq!(serde_json::to_string(&customer).unwrap(), raw);
    }

    #[test]
    fn test_id_only_record() {
        let customer: Customer = serde_json::from_value(json!({ "id": 9 })).unwrap();
        assert!(customer.attributes.is_empty());
        assert_eq!(serde_json::to_value(&customer).unwrap(), json!({ "id": 9 }));
    }
}
