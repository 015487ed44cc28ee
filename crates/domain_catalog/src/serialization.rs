//! Transport mapping
//!
//! Products cross process boundaries as a flat JSON object:
//!
//! ```text
//! {
//!   "id": integer | null,
//!   "name": string,
//!   "description": string | null,
//!   "price": string,          // exact decimal text, e.g. "12.50"
//!   "available": boolean,
//!   "category": string        // Category member name, e.g. "CLOTHS"
//! }
//! ```
//!
//! `deserialize` validates the whole payload before mutating the target, so a
//! rejected payload leaves the product exactly as it was.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::category::Category;
use crate::error::DataValidationError;
use crate::product::{check_description, check_name, check_price, Product};

/// Keys every transport mapping carries
pub const TRANSPORT_KEYS: [&str; 6] = ["id", "name", "description", "price", "available", "category"];

/// Parses a price received as text
///
/// Surrounding whitespace and quote characters are discarded, so `"12.50"`,
/// `" 12.50 "` and `"\"12.50\""` all yield the same amount. The amount must
/// fit the store exactly: at most 2 significant decimal places and a
/// magnitude below 10^12.
pub fn parse_price(raw: &str) -> Result<Decimal, DataValidationError> {
    let cleaned = raw.trim_matches(|c: char| c.is_whitespace() || c == '"' || c == '\'');
    if cleaned.is_empty() {
        return Err(DataValidationError::InvalidPrice(raw.to_string()));
    }
    let price = Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .map_err(|_| DataValidationError::InvalidPrice(raw.to_string()))?;
    check_price(price, raw)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn required<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<&'a Value, DataValidationError> {
    fields.get(key).ok_or_else(|| DataValidationError::missing(key))
}

fn read_name(value: &Value) -> Result<String, DataValidationError> {
    match value {
        Value::String(name) => {
            check_name(name)?;
            Ok(name.clone())
        }
        other => Err(DataValidationError::wrong_type("name", "string", json_type_name(other))),
    }
}

fn read_description(value: &Value) -> Result<Option<String>, DataValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(description) => {
            check_description(Some(description))?;
            Ok(Some(description.clone()))
        }
        other => Err(DataValidationError::wrong_type(
            "description",
            "string",
            json_type_name(other),
        )),
    }
}

fn read_price(value: &Value) -> Result<Decimal, DataValidationError> {
    match value {
        Value::String(text) => parse_price(text),
        Value::Number(number) => parse_price(&number.to_string()),
        other => Err(DataValidationError::wrong_type("price", "decimal", json_type_name(other))),
    }
}

fn read_available(value: &Value) -> Result<bool, DataValidationError> {
    match value {
        Value::Bool(available) => Ok(*available),
        other => Err(DataValidationError::wrong_type(
            "available",
            "boolean",
            json_type_name(other),
        )),
    }
}

fn read_category(value: &Value) -> Result<Category, DataValidationError> {
    match value {
        Value::String(name) => name.parse(),
        other => Err(DataValidationError::InvalidCategory(other.to_string())),
    }
}

impl Product {
    /// Renders the product as a transport mapping
    pub fn serialize(&self) -> Map<String, Value> {
        let mut fields = Map::with_capacity(TRANSPORT_KEYS.len());
        fields.insert(
            "id".to_string(),
            self.id.map_or(Value::Null, |id| Value::from(id.value())),
        );
        fields.insert("name".to_string(), Value::String(self.name.clone()));
        fields.insert(
            "description".to_string(),
            self.description.clone().map_or(Value::Null, Value::String),
        );
        fields.insert("price".to_string(), Value::String(self.price.to_string()));
        fields.insert("available".to_string(), Value::Bool(self.available));
        fields.insert(
            "category".to_string(),
            Value::String(self.category.name().to_string()),
        );
        fields
    }

    /// Same as [`Product::serialize`], wrapped as a JSON value
    pub fn to_json(&self) -> Value {
        Value::Object(self.serialize())
    }

    /// Populates this product from a transport mapping
    ///
    /// The `id` key, when present, is ignored: ids are assigned by the store
    /// and the handle keeps its own.
    ///
    /// # Errors
    ///
    /// Returns a `DataValidationError` naming the offending attribute when the
    /// payload is not an object, a key is missing, or a value is malformed.
    pub fn deserialize(&mut self, data: &Value) -> Result<&mut Self, DataValidationError> {
        let fields = data.as_object().ok_or(DataValidationError::EmptyBody)?;

        let name = read_name(required(fields, "name")?)?;
        let description = read_description(required(fields, "description")?)?;
        let price = read_price(required(fields, "price")?)?;
        let available = read_available(required(fields, "available")?)?;
        let category = read_category(required(fields, "category")?)?;

        self.name = name;
        self.description = description;
        self.price = price;
        self.available = available;
        self.category = category;
        Ok(self)
    }

    /// Builds a new, unpersisted product from a transport mapping
    pub fn from_json(data: &Value) -> Result<Product, DataValidationError> {
        let mut product = Product::default();
        product.deserialize(data)?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn fedora() -> Product {
        Product::new(
            "Fedora",
            Some("A red hat".to_string()),
            dec!(12.50),
            true,
            Category::Cloths,
        )
    }

    #[test]
    fn test_parse_price_normalizes_text() {
        assert_eq!(parse_price("12.50").unwrap(), dec!(12.50));
        assert_eq!(parse_price(" 12.50 ").unwrap(), dec!(12.50));
        assert_eq!(parse_price("\"12.50\"").unwrap(), dec!(12.50));
        assert_eq!(parse_price("' 7 '").unwrap(), dec!(7));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert!(parse_price("").is_err());
        assert!(parse_price("  \"\" ").is_err());
        assert!(parse_price("twelve").is_err());
    }

    #[test]
    fn test_parse_price_rejects_amounts_the_store_would_change() {
        assert_eq!(
            parse_price("12.345"),
            Err(DataValidationError::InvalidPrice("12.345".to_string()))
        );
        assert!(parse_price("1e13").is_err());
        assert!(parse_price("1000000000000").is_err());
        assert_eq!(parse_price("999999999999.99").unwrap(), dec!(999999999999.99));
        assert_eq!(parse_price("12.500").unwrap(), dec!(12.5));
    }

    #[test]
    fn test_serialize_shape() {
        let data = fedora().serialize();

        assert_eq!(data.len(), TRANSPORT_KEYS.len());
        assert_eq!(data["id"], Value::Null);
        assert_eq!(data["price"], json!("12.50"));
        assert_eq!(data["category"], json!("CLOTHS"));
        assert_eq!(data["available"], json!(true));
    }

    #[test]
    fn test_deserialize_accepts_numeric_price() {
        let mut product = Product::default();
        product
            .deserialize(&json!({
                "name": "Apple",
                "description": null,
                "price": 0.75,
                "available": false,
                "category": "FOOD",
            }))
            .unwrap();

        assert_eq!(product.price, dec!(0.75));
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_failed_deserialize_leaves_product_untouched() {
        let mut product = fedora();
        let mut data = product.serialize();
        data.insert("name".into(), json!("Bowler"));
        data.insert("category".into(), json!("HATS"));

        assert!(product.deserialize(&Value::Object(data)).is_err());
        assert_eq!(product, fedora());
    }
}
