//! Field-level serde codecs for driver-native scalar types.
//!
//! These replace process-wide codec registration with explicit conversions
//! at the model boundary; apply them with `#[serde(with = "...")]` on the
//! field that needs them.

/// Stores a [`rust_decimal::Decimal`] as a BSON `Decimal128`.
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Invoice {
///     #[serde(with = "docmap_core::codec::decimal")]
///     total: rust_decimal::Decimal,
/// }
/// ```
pub mod decimal {
    use bson::Decimal128;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
    use std::str::FromStr;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Decimal128::from_str(&value.to_string())
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }

    /// Values outside `Decimal`'s representable range surface as errors.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Decimal128::deserialize(deserializer)?;
        Decimal::from_str(&raw.to_string()).map_err(de::Error::custom)
    }
}

/// Deserializes an `ObjectId` from either its native representation or a
/// 24-character hex string, validating the string form.
pub mod object_id {
    use bson::{Bson, oid::ObjectId};
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    pub fn serialize<S>(value: &ObjectId, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ObjectId, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Bson::deserialize(deserializer)? {
            Bson::ObjectId(oid) => Ok(oid),
            Bson::String(hex) => ObjectId::parse_str(&hex).map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected an ObjectId or hex string, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use bson::{Bson, doc, oid::ObjectId};
    use bson::{de::deserialize_from_document, ser::serialize_to_document};
    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};
    use std::str::FromStr;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Invoice {
        #[serde(with = "crate::codec::decimal")]
        total: Decimal,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Ref {
        #[serde(with = "crate::codec::object_id")]
        owner: ObjectId,
    }

    #[test]
    fn decimal_round_trips_through_decimal128() {
        let invoice = Invoice {
            total: Decimal::from_str("19.99").unwrap(),
        };
        let doc = serialize_to_document(&invoice).unwrap();
        assert!(matches!(doc.get("total"), Some(Bson::Decimal128(_))));

        let back: Invoice = deserialize_from_document(doc).unwrap();
        assert_eq!(back, invoice);
    }

    #[test]
    fn object_id_accepts_native_form() {
        let oid = ObjectId::new();
        let back: Ref = deserialize_from_document(doc! { "owner": oid }).unwrap();
        assert_eq!(back.owner, oid);
    }

    #[test]
    fn object_id_accepts_valid_hex_string() {
        let oid = ObjectId::new();
        let back: Ref = deserialize_from_document(doc! { "owner": oid.to_hex() }).unwrap();
        assert_eq!(back.owner, oid);
    }

    #[test]
    fn object_id_rejects_invalid_hex_string() {
        let result: Result<Ref, _> = deserialize_from_document(doc! { "owner": "not-an-oid" });
        assert!(result.is_err());
    }
}
