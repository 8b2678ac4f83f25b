//! Blob store save request
//!
//! The host merges the exported properties with the fields every blob
//! store shares (name, type) and submits the result to the create/update
//! endpoint. Backend properties live under the lower-cased type name in
//! `attributes`.

use azblob_panel_core::PropertyPayload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Blob store type handled by this panel
pub const AZURE_BLOBSTORE_TYPE: &str = "Azure Cloud Storage";

/// Attribute section the Azure backend reads its properties from
pub fn attributes_key(blobstore_type: &str) -> String {
    blobstore_type.to_lowercase()
}

/// Body of a create/update blob store call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobStoreRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub blobstore_type: String,
    pub attributes: BTreeMap<String, PropertyPayload>,
}

impl BlobStoreRequest {
    /// Build a request for the given store, nesting `properties` under the
    /// type's attribute section
    pub fn new(name: &str, blobstore_type: &str, properties: PropertyPayload) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(attributes_key(blobstore_type), properties);
        Self {
            name: name.to_string(),
            blobstore_type: blobstore_type.to_string(),
            attributes,
        }
    }

    /// Request for an Azure Cloud Storage blob store
    pub fn azure(name: &str, properties: PropertyPayload) -> Self {
        Self::new(name, AZURE_BLOBSTORE_TYPE, properties)
    }

    /// Backend properties of this request's own type
    pub fn properties(&self) -> Option<&PropertyPayload> {
        self.attributes.get(&attributes_key(&self.blobstore_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_azure_request_shape() {
        let mut props = PropertyPayload::new();
        props.insert("accountName".to_string(), "acct1".to_string());
        props.insert("clientType".to_string(), "Sync".to_string());

        let request = BlobStoreRequest::azure("azure-main", props.clone());
        assert_eq!(request.properties(), Some(&props));

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "azure-main",
                "type": "Azure Cloud Storage",
                "attributes": {
                    "azure cloud storage": {
                        "accountName": "acct1",
                        "clientType": "Sync"
                    }
                }
            })
        );
    }

    #[test]
    fn test_attributes_key() {
        assert_eq!(attributes_key(AZURE_BLOBSTORE_TYPE), "azure cloud storage");
    }
}
