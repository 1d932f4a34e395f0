use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VendorId(pub String);

impl VendorId {
    pub fn generate() -> Self {
        Self(nanoid::nanoid!())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored vendor. The `id` is assigned by the storage backend on first
/// save and is never touched by a partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Vendor {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Requested field updates for a PATCH. A field left out of the body and a
/// field sent as `null` both decode to `None` and mean "leave as is".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VendorPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl From<Vendor> for VendorPatch {
    fn from(vendor: Vendor) -> Self {
        Self {
            first_name: vendor.first_name,
            last_name: vendor.last_name,
        }
    }
}

/// Body of a create request: the endpoint takes either a single vendor or
/// an array of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum VendorBatch {
    Many(Vec<Vendor>),
    One(Vendor),
}

impl VendorBatch {
    pub fn into_vec(self) -> Vec<Vendor> {
        match self {
            VendorBatch::Many(vendors) => vendors,
            VendorBatch::One(vendor) => vec![vendor],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_uses_camel_case_and_skips_absent_fields() {
        let vendor = Vendor {
            id: None,
            first_name: Some("Fred".into()),
            last_name: None,
        };
        let json = serde_json::to_value(&vendor).unwrap();
        assert_eq!(json, serde_json::json!({ "firstName": "Fred" }));
    }

    #[test]
    fn patch_ignores_id_and_treats_null_as_absent() {
        let patch: VendorPatch = serde_json::from_str(
            r#"{"id":"abc","firstName":"Barney","lastName":null}"#,
        )
        .unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("Barney"));
        assert_eq!(patch.last_name, None);
    }

    #[test]
    fn batch_accepts_object_or_array() {
        let one: VendorBatch =
            serde_json::from_str(r#"{"firstName":"Jimmy"}"#).unwrap();
        assert_eq!(one.into_vec().len(), 1);

        let many: VendorBatch = serde_json::from_str(
            r#"[{"firstName":"Fred"},{"firstName":"Barney"}]"#,
        )
        .unwrap();
        assert_eq!(many.into_vec().len(), 2);
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(VendorId::generate(), VendorId::generate());
    }
}
