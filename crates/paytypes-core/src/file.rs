//! Uploaded files and the shareable links that point at them.

use crate::expandable::Expandable;
use crate::ids::{FileId, FileLinkId};
use crate::list::List;
use crate::object::{Metadata, Tag, Timestamp};
use crate::presence::MaybeNull;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct File {
    pub id: FileId,
    pub object: Tag<File>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub expires_at: MaybeNull<Timestamp>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub filename: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub links: MaybeNull<List<FileLink>>,
    pub purpose: FilePurpose,
    pub size: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub title: MaybeNull<String>,
    #[serde(rename = "type", default, skip_serializing_if = "MaybeNull::is_absent")]
    pub type_: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub url: MaybeNull<String>,
}

crate::impl_object!(File, "file", id);

literal_enum! {
    pub enum FilePurpose {
        AccountRequirement = "account_requirement",
        AdditionalVerification = "additional_verification",
        BusinessIcon = "business_icon",
        BusinessLogo = "business_logo",
        CustomerSignature = "customer_signature",
        DisputeEvidence = "dispute_evidence",
        DocumentProviderIdentityDocument = "document_provider_identity_document",
        FinanceReportRun = "finance_report_run",
        IdentityDocument = "identity_document",
        IdentityDocumentDownloadable = "identity_document_downloadable",
        PciDocument = "pci_document",
        Selfie = "selfie",
        SigmaScheduledQuery = "sigma_scheduled_query",
        TaxDocumentUserUpload = "tax_document_user_upload",
        TerminalReaderSplashscreen = "terminal_reader_splashscreen",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FileLink {
    pub id: FileLinkId,
    pub object: Tag<FileLink>,
    pub created: Timestamp,
    pub expired: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub expires_at: MaybeNull<Timestamp>,
    pub file: Expandable<File>,
    pub livemode: bool,
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub url: MaybeNull<String>,
}

crate::impl_object!(FileLink, "file_link", id);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_type_field_renamed() {
        let file: File = serde_json::from_value(json!({
            "id": "file_1",
            "object": "file",
            "created": 1700000000,
            "expires_at": null,
            "filename": "evidence.pdf",
            "purpose": "dispute_evidence",
            "size": 9863,
            "title": null,
            "type": "pdf",
            "url": null
        }))
        .unwrap();
        assert_eq!(file.type_.as_option().map(String::as_str), Some("pdf"));
        assert_eq!(file.purpose, FilePurpose::DisputeEvidence);
        assert!(file.links.is_absent());
    }
}
