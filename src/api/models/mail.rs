//
//  graph-client
//  api/models/mail.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Mail records: folders, messages, rules, attachments, extensions,
//! mailbox settings and the action bodies (`copy`, `reply`, `sendMail`, ...).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::{Document, FollowupFlag, Importance, InternetMessageHeader, ItemBody, Recipient};

/// `@odata.type` of a file attachment.
pub const FILE_ATTACHMENT_TYPE: &str = "#microsoft.graph.fileAttachment";
/// `@odata.type` of an item attachment.
pub const ITEM_ATTACHMENT_TYPE: &str = "#microsoft.graph.itemAttachment";
/// `@odata.type` of a reference attachment.
pub const REFERENCE_ATTACHMENT_TYPE: &str = "#microsoft.graph.referenceAttachment";

/// A mail folder.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailFolder {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub parent_folder_id: Option<String>,
    /// Can only be set at creation.
    pub is_hidden: Option<bool>,
    pub child_folder_count: Option<i32>,
    pub total_item_count: Option<i32>,
    pub unread_item_count: Option<i32>,
    #[serde(flatten)]
    pub additional: Document,
}

impl MailFolder {
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InferenceClassificationType {
    Focused,
    Other,
}

/// A message. Used for drafts, updates and as the `message` of action bodies.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Option<String>,
    pub subject: Option<String>,
    pub body: Option<ItemBody>,
    pub body_preview: Option<String>,
    pub from: Option<Recipient>,
    pub sender: Option<Recipient>,
    pub to_recipients: Option<Vec<Recipient>>,
    pub cc_recipients: Option<Vec<Recipient>>,
    pub bcc_recipients: Option<Vec<Recipient>>,
    pub reply_to: Option<Vec<Recipient>>,
    pub importance: Option<Importance>,
    pub inference_classification: Option<InferenceClassificationType>,
    pub is_read: Option<bool>,
    pub is_draft: Option<bool>,
    pub is_delivery_receipt_requested: Option<bool>,
    pub is_read_receipt_requested: Option<bool>,
    pub categories: Option<Vec<String>>,
    pub flag: Option<FollowupFlag>,
    pub internet_message_headers: Option<Vec<InternetMessageHeader>>,
    pub internet_message_id: Option<String>,
    pub conversation_id: Option<String>,
    pub parent_folder_id: Option<String>,
    pub received_date_time: Option<String>,
    pub sent_date_time: Option<String>,
    pub has_attachments: Option<bool>,
    pub attachments: Option<Vec<Attachment>>,
    #[serde(flatten)]
    pub additional: Document,
}

/// Target folder of a `copy` or `move` action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyMove {
    /// Folder id or well-known name (`inbox`, `deleteditems`, ...).
    pub destination_id: String,
}

impl CopyMove {
    pub fn to(destination_id: impl Into<String>) -> Self {
        Self {
            destination_id: destination_id.into(),
        }
    }
}

/// Body of `forward`, `reply`, `replyAll` and their `create*` draft forms.
///
/// Supply either `comment` or a `message` with a body, not both.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageComment {
    pub comment: Option<String>,
    pub to_recipients: Option<Vec<Recipient>>,
    pub message: Option<Message>,
}

/// Body of `/users/{id}/sendMail`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMail {
    pub message: Option<Message>,
    /// Defaults to `true` on the service.
    pub save_to_sent_items: Option<bool>,
}

/// An inbox rule. Predicates and actions are open documents; their schema
/// has dozens of optional members.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRule {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub sequence: Option<i32>,
    pub is_enabled: Option<bool>,
    pub has_error: Option<bool>,
    pub is_read_only: Option<bool>,
    pub conditions: Option<Document>,
    pub actions: Option<Document>,
    pub exceptions: Option<Document>,
    #[serde(flatten)]
    pub additional: Document,
}

/// A file, item or reference attachment.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub content_type: Option<String>,
    pub size: Option<i32>,
    pub is_inline: Option<bool>,
    pub last_modified_date_time: Option<String>,
    /// Base64 content of a file attachment.
    pub content_bytes: Option<String>,
    pub content_id: Option<String>,
    pub content_location: Option<String>,
    /// Embedded message, event or contact of an item attachment.
    pub item: Option<Document>,
    #[serde(flatten)]
    pub additional: Document,
}

impl Attachment {
    /// A file attachment, base64-encoding `data`.
    ///
    /// ```rust
    /// use graph_client::api::models::mail::Attachment;
    ///
    /// let attachment = Attachment::file("notes.txt", "text/plain", b"hello");
    /// assert_eq!(attachment.content_bytes.as_deref(), Some("aGVsbG8="));
    /// ```
    pub fn file(name: impl Into<String>, content_type: impl Into<String>, data: &[u8]) -> Self {
        Self {
            odata_type: Some(FILE_ATTACHMENT_TYPE.to_string()),
            name: Some(name.into()),
            content_type: Some(content_type.into()),
            content_bytes: Some(STANDARD.encode(data)),
            ..Default::default()
        }
    }

    /// A reference attachment pointing at a file in cloud storage.
    pub fn reference(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            odata_type: Some(REFERENCE_ATTACHMENT_TYPE.to_string()),
            name: Some(name.into()),
            content_location: Some(location.into()),
            ..Default::default()
        }
    }

    /// Decodes `content_bytes`, if present and valid base64.
    pub fn decode_content(&self) -> Option<Vec<u8>> {
        self.content_bytes
            .as_deref()
            .and_then(|b64| STANDARD.decode(b64).ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttachmentType {
    File,
    Item,
    Reference,
}

/// Describes a large file before an upload session is created.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentItem {
    pub attachment_type: Option<AttachmentType>,
    pub name: Option<String>,
    pub size: Option<i64>,
    pub content_type: Option<String>,
    pub content_id: Option<String>,
    pub is_inline: Option<bool>,
}

/// Body of `createUploadSession`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSessionRequest {
    pub attachment_item: Option<AttachmentItem>,
}

/// An upload session as returned by `createUploadSession`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSession {
    pub upload_url: Option<String>,
    pub expiration_date_time: Option<String>,
    pub next_expected_ranges: Option<Vec<String>>,
}

/// An open extension on a message.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Usually `#microsoft.graph.openTypeExtension`.
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    pub id: Option<String>,
    pub extension_name: Option<String>,
    /// Custom properties of the extension.
    #[serde(flatten)]
    pub additional: Document,
}

impl Extension {
    pub fn open(extension_name: impl Into<String>, data: Document) -> Self {
        Self {
            odata_type: Some("#microsoft.graph.openTypeExtension".to_string()),
            extension_name: Some(extension_name.into()),
            additional: data,
            ..Default::default()
        }
    }
}

/// Mailbox settings. Sub-objects are open documents.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailboxSettings {
    pub archive_folder: Option<String>,
    pub automatic_replies_setting: Option<Document>,
    pub date_format: Option<String>,
    pub time_format: Option<String>,
    pub time_zone: Option<String>,
    pub delegate_meeting_message_delivery_options: Option<String>,
    pub language: Option<Document>,
    pub working_hours: Option<Document>,
    pub user_purpose: Option<String>,
    #[serde(flatten)]
    pub additional: Document,
}

/// An override that pins a sender to Focused or Other.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceClassificationOverride {
    pub id: Option<String>,
    pub classify_as: Option<InferenceClassificationType>,
    pub sender_email_address: Option<super::EmailAddress>,
    #[serde(flatten)]
    pub additional: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_draft_body_is_exact_subset() {
        let draft = Message {
            subject: Some("Quarterly numbers".into()),
            to_recipients: Some(vec![Recipient::address("adele@contoso.com")]),
            importance: Some(Importance::High),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(draft).unwrap(),
            json!({
                "subject": "Quarterly numbers",
                "toRecipients": [{"emailAddress": {"address": "adele@contoso.com"}}],
                "importance": "high"
            })
        );
    }

    #[test]
    fn test_copy_move_wire_name() {
        assert_eq!(
            serde_json::to_value(CopyMove::to("deleteditems")).unwrap(),
            json!({"destinationId": "deleteditems"})
        );
    }

    #[test]
    fn test_file_attachment_round_trip() {
        let attachment = Attachment::file("a.bin", "application/octet-stream", &[1, 2, 3]);
        let value = serde_json::to_value(&attachment).unwrap();
        assert_eq!(value["@odata.type"], json!(FILE_ATTACHMENT_TYPE));
        assert_eq!(attachment.decode_content(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_open_extension_flattens_data() {
        let mut data = Document::new();
        data.insert("companyName".into(), json!("Contoso"));
        let ext = Extension::open("Com.Contoso.Referral", data);
        assert_eq!(
            serde_json::to_value(ext).unwrap(),
            json!({
                "@odata.type": "#microsoft.graph.openTypeExtension",
                "extensionName": "Com.Contoso.Referral",
                "companyName": "Contoso"
            })
        );
    }

    #[test]
    fn test_send_mail_omits_unset_flag() {
        let body = SendMail {
            message: Some(Message {
                subject: Some("Hi".into()),
                ..Default::default()
            }),
            save_to_sent_items: None,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"message": {"subject": "Hi"}})
        );
    }
}
