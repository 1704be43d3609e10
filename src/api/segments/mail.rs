//
//  graph-client
//  api/segments/mail.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Mail endpoints under `/users/{user_id}`.
//!
//! Covers mail folders and child folders, folder messages, inbox rules,
//! messages with their MIME content, attachments and open extensions,
//! `sendMail`, mailbox settings and Focused Inbox overrides.
//!
//! `user_id` accepts an object id or a user principal name. Folder ids also
//! accept well-known names such as `inbox`, `drafts` or `sentitems`.

use super::{action, read, upload, write};
use crate::api::common::{ApiResult, Payload};
use crate::api::endpoint::{BodyMode, Endpoint, ResponseShape::*, Segment};
use crate::api::models::mail::{
    Attachment, CopyMove, Extension, InferenceClassificationOverride, MailFolder, MailboxSettings,
    Message, MessageComment, MessageRule, SendMail, UploadSessionRequest,
};
use crate::api::query::{self, QueryOptions};
use crate::api::transport::Transport;

const S: Segment = Segment::UserMail;

endpoint_table! {
    // mail folders
    LIST_FOLDERS = Endpoint::get(S, "list_folders", "/users/{user_id}/mailFolders")
        .query(query::FOLDER_LIST).returns(Collection).summary("List mail folders");
    CREATE_FOLDER = Endpoint::post(S, "create_folder", "/users/{user_id}/mailFolders")
        .summary("Create a mail folder");
    GET_FOLDER_COUNT = Endpoint::get(S, "get_folder_count", "/users/{user_id}/mailFolders/$count")
        .query(query::COUNT).returns(Count).summary("Count mail folders");
    FOLDER_DELTA = Endpoint::get(S, "folder_delta", "/users/{user_id}/mailFolders/microsoft.graph.delta()")
        .query(query::DELTA).returns(Collection).summary("Track mail folder changes");
    GET_FOLDER = Endpoint::get(S, "get_folder", "/users/{user_id}/mailFolders/{mail_folder_id}")
        .query(query::FOLDER_GET).summary("Get a mail folder");
    UPDATE_FOLDER = Endpoint::patch(S, "update_folder", "/users/{user_id}/mailFolders/{mail_folder_id}")
        .summary("Update a mail folder");
    DELETE_FOLDER = Endpoint::delete(S, "delete_folder", "/users/{user_id}/mailFolders/{mail_folder_id}")
        .summary("Delete a mail folder");
    COPY_FOLDER = Endpoint::post(S, "copy_folder", "/users/{user_id}/mailFolders/{mail_folder_id}/microsoft.graph.copy")
        .summary("Copy a mail folder into another folder");
    MOVE_FOLDER = Endpoint::post(S, "move_folder", "/users/{user_id}/mailFolders/{mail_folder_id}/microsoft.graph.move")
        .summary("Move a mail folder into another folder");
    PERMANENT_DELETE_FOLDER = Endpoint::post(S, "permanent_delete_folder", "/users/{user_id}/mailFolders/{mail_folder_id}/microsoft.graph.permanentDelete")
        .body(BodyMode::None).returns(Empty).summary("Permanently delete a mail folder");

    // child folders
    LIST_CHILD_FOLDERS = Endpoint::get(S, "list_child_folders", "/users/{user_id}/mailFolders/{mail_folder_id}/childFolders")
        .query(query::FOLDER_LIST).returns(Collection).summary("List child folders");
    CREATE_CHILD_FOLDER = Endpoint::post(S, "create_child_folder", "/users/{user_id}/mailFolders/{mail_folder_id}/childFolders")
        .summary("Create a child folder");
    GET_CHILD_FOLDER_COUNT = Endpoint::get(S, "get_child_folder_count", "/users/{user_id}/mailFolders/{mail_folder_id}/childFolders/$count")
        .query(query::COUNT).returns(Count).summary("Count child folders");
    CHILD_FOLDER_DELTA = Endpoint::get(S, "child_folder_delta", "/users/{user_id}/mailFolders/{mail_folder_id}/childFolders/microsoft.graph.delta()")
        .query(query::DELTA).returns(Collection).summary("Track child folder changes");
    GET_CHILD_FOLDER = Endpoint::get(S, "get_child_folder", "/users/{user_id}/mailFolders/{mail_folder_id}/childFolders/{child_folder_id}")
        .query(query::FOLDER_GET).summary("Get a child folder");
    UPDATE_CHILD_FOLDER = Endpoint::patch(S, "update_child_folder", "/users/{user_id}/mailFolders/{mail_folder_id}/childFolders/{child_folder_id}")
        .summary("Update a child folder");
    DELETE_CHILD_FOLDER = Endpoint::delete(S, "delete_child_folder", "/users/{user_id}/mailFolders/{mail_folder_id}/childFolders/{child_folder_id}")
        .summary("Delete a child folder");
    COPY_CHILD_FOLDER = Endpoint::post(S, "copy_child_folder", "/users/{user_id}/mailFolders/{mail_folder_id}/childFolders/{child_folder_id}/microsoft.graph.copy")
        .summary("Copy a child folder into another folder");
    MOVE_CHILD_FOLDER = Endpoint::post(S, "move_child_folder", "/users/{user_id}/mailFolders/{mail_folder_id}/childFolders/{child_folder_id}/microsoft.graph.move")
        .summary("Move a child folder into another folder");
    PERMANENT_DELETE_CHILD_FOLDER = Endpoint::post(S, "permanent_delete_child_folder", "/users/{user_id}/mailFolders/{mail_folder_id}/childFolders/{child_folder_id}/microsoft.graph.permanentDelete")
        .body(BodyMode::None).returns(Empty).summary("Permanently delete a child folder");

    // messages in a folder
    LIST_FOLDER_MESSAGES = Endpoint::get(S, "list_folder_messages", "/users/{user_id}/mailFolders/{mail_folder_id}/messages")
        .query(query::MESSAGE_LIST).returns(Collection).summary("List the messages in a folder");
    CREATE_FOLDER_MESSAGE = Endpoint::post(S, "create_folder_message", "/users/{user_id}/mailFolders/{mail_folder_id}/messages")
        .summary("Create a draft in a folder");
    GET_FOLDER_MESSAGE_COUNT = Endpoint::get(S, "get_folder_message_count", "/users/{user_id}/mailFolders/{mail_folder_id}/messages/$count")
        .query(query::COUNT).returns(Count).summary("Count the messages in a folder");
    FOLDER_MESSAGE_DELTA = Endpoint::get(S, "folder_message_delta", "/users/{user_id}/mailFolders/{mail_folder_id}/messages/microsoft.graph.delta()")
        .query(query::DELTA).returns(Collection).summary("Track message changes in a folder");
    GET_FOLDER_MESSAGE = Endpoint::get(S, "get_folder_message", "/users/{user_id}/mailFolders/{mail_folder_id}/messages/{message_id}")
        .query(query::MESSAGE_GET).summary("Get a message in a folder");
    UPDATE_FOLDER_MESSAGE = Endpoint::patch(S, "update_folder_message", "/users/{user_id}/mailFolders/{mail_folder_id}/messages/{message_id}")
        .summary("Update a message in a folder");
    DELETE_FOLDER_MESSAGE = Endpoint::delete(S, "delete_folder_message", "/users/{user_id}/mailFolders/{mail_folder_id}/messages/{message_id}")
        .summary("Delete a message in a folder");
    GET_FOLDER_MESSAGE_CONTENT = Endpoint::get(S, "get_folder_message_content", "/users/{user_id}/mailFolders/{mail_folder_id}/messages/{message_id}/$value")
        .returns(Bytes).summary("Download the MIME content of a message in a folder");
    UPDATE_FOLDER_MESSAGE_CONTENT = Endpoint::put(S, "update_folder_message_content", "/users/{user_id}/mailFolders/{mail_folder_id}/messages/{message_id}/$value")
        .summary("Replace the MIME content of a message in a folder");
    DELETE_FOLDER_MESSAGE_CONTENT = Endpoint::delete(S, "delete_folder_message_content", "/users/{user_id}/mailFolders/{mail_folder_id}/messages/{message_id}/$value")
        .summary("Delete the MIME content of a message in a folder");
    COPY_FOLDER_MESSAGE = Endpoint::post(S, "copy_folder_message", "/users/{user_id}/mailFolders/{mail_folder_id}/messages/{message_id}/microsoft.graph.copy")
        .summary("Copy a message in a folder");
    MOVE_FOLDER_MESSAGE = Endpoint::post(S, "move_folder_message", "/users/{user_id}/mailFolders/{mail_folder_id}/messages/{message_id}/microsoft.graph.move")
        .summary("Move a message in a folder");

    // inbox rules
    LIST_MESSAGE_RULES = Endpoint::get(S, "list_message_rules", "/users/{user_id}/mailFolders/{mail_folder_id}/messageRules")
        .query(query::LIST).returns(Collection).summary("List message rules");
    CREATE_MESSAGE_RULE = Endpoint::post(S, "create_message_rule", "/users/{user_id}/mailFolders/{mail_folder_id}/messageRules")
        .summary("Create a message rule");
    GET_MESSAGE_RULE_COUNT = Endpoint::get(S, "get_message_rule_count", "/users/{user_id}/mailFolders/{mail_folder_id}/messageRules/$count")
        .query(query::COUNT).returns(Count).summary("Count message rules");
    GET_MESSAGE_RULE = Endpoint::get(S, "get_message_rule", "/users/{user_id}/mailFolders/{mail_folder_id}/messageRules/{message_rule_id}")
        .query(query::GET).summary("Get a message rule");
    UPDATE_MESSAGE_RULE = Endpoint::patch(S, "update_message_rule", "/users/{user_id}/mailFolders/{mail_folder_id}/messageRules/{message_rule_id}")
        .summary("Update a message rule");
    DELETE_MESSAGE_RULE = Endpoint::delete(S, "delete_message_rule", "/users/{user_id}/mailFolders/{mail_folder_id}/messageRules/{message_rule_id}")
        .summary("Delete a message rule");

    // messages
    LIST_MESSAGES = Endpoint::get(S, "list_messages", "/users/{user_id}/messages")
        .query(query::MESSAGE_LIST).returns(Collection).summary("List messages");
    CREATE_MESSAGE = Endpoint::post(S, "create_message", "/users/{user_id}/messages")
        .summary("Create a draft message");
    GET_MESSAGE_COUNT = Endpoint::get(S, "get_message_count", "/users/{user_id}/messages/$count")
        .query(query::COUNT).returns(Count).summary("Count messages");
    MESSAGE_DELTA = Endpoint::get(S, "message_delta", "/users/{user_id}/messages/microsoft.graph.delta()")
        .query(query::DELTA).returns(Collection).summary("Track message changes");
    GET_MESSAGE = Endpoint::get(S, "get_message", "/users/{user_id}/messages/{message_id}")
        .query(query::MESSAGE_GET).summary("Get a message");
    UPDATE_MESSAGE = Endpoint::patch(S, "update_message", "/users/{user_id}/messages/{message_id}")
        .summary("Update a message");
    DELETE_MESSAGE = Endpoint::delete(S, "delete_message", "/users/{user_id}/messages/{message_id}")
        .summary("Delete a message");
    GET_MESSAGE_CONTENT = Endpoint::get(S, "get_message_content", "/users/{user_id}/messages/{message_id}/$value")
        .returns(Bytes).summary("Download the MIME content of a message");
    UPDATE_MESSAGE_CONTENT = Endpoint::put(S, "update_message_content", "/users/{user_id}/messages/{message_id}/$value")
        .summary("Replace the MIME content of a message");
    DELETE_MESSAGE_CONTENT = Endpoint::delete(S, "delete_message_content", "/users/{user_id}/messages/{message_id}/$value")
        .summary("Delete the MIME content of a message");
    COPY_MESSAGE = Endpoint::post(S, "copy_message", "/users/{user_id}/messages/{message_id}/microsoft.graph.copy")
        .summary("Copy a message into a folder");
    MOVE_MESSAGE = Endpoint::post(S, "move_message", "/users/{user_id}/messages/{message_id}/microsoft.graph.move")
        .summary("Move a message into a folder");
    FORWARD_MESSAGE = Endpoint::post(S, "forward_message", "/users/{user_id}/messages/{message_id}/microsoft.graph.forward")
        .returns(Empty).summary("Forward a message");
    REPLY_MESSAGE = Endpoint::post(S, "reply_message", "/users/{user_id}/messages/{message_id}/microsoft.graph.reply")
        .returns(Empty).summary("Reply to the sender of a message");
    REPLY_ALL_MESSAGE = Endpoint::post(S, "reply_all_message", "/users/{user_id}/messages/{message_id}/microsoft.graph.replyAll")
        .returns(Empty).summary("Reply to all recipients of a message");
    CREATE_REPLY = Endpoint::post(S, "create_reply", "/users/{user_id}/messages/{message_id}/microsoft.graph.createReply")
        .summary("Create a reply draft");
    CREATE_REPLY_ALL = Endpoint::post(S, "create_reply_all", "/users/{user_id}/messages/{message_id}/microsoft.graph.createReplyAll")
        .summary("Create a reply-all draft");
    CREATE_FORWARD = Endpoint::post(S, "create_forward", "/users/{user_id}/messages/{message_id}/microsoft.graph.createForward")
        .summary("Create a forward draft");
    SEND_MESSAGE = Endpoint::post(S, "send_message", "/users/{user_id}/messages/{message_id}/microsoft.graph.send")
        .body(BodyMode::None).returns(Empty).summary("Send an existing draft");
    PERMANENT_DELETE_MESSAGE = Endpoint::post(S, "permanent_delete_message", "/users/{user_id}/messages/{message_id}/microsoft.graph.permanentDelete")
        .body(BodyMode::None).returns(Empty).summary("Permanently delete a message");

    // message attachments
    LIST_ATTACHMENTS = Endpoint::get(S, "list_attachments", "/users/{user_id}/messages/{message_id}/attachments")
        .query(query::LIST).returns(Collection).summary("List message attachments");
    CREATE_ATTACHMENT = Endpoint::post(S, "create_attachment", "/users/{user_id}/messages/{message_id}/attachments")
        .summary("Add an attachment to a message");
    GET_ATTACHMENT_COUNT = Endpoint::get(S, "get_attachment_count", "/users/{user_id}/messages/{message_id}/attachments/$count")
        .query(query::COUNT).returns(Count).summary("Count message attachments");
    GET_ATTACHMENT = Endpoint::get(S, "get_attachment", "/users/{user_id}/messages/{message_id}/attachments/{attachment_id}")
        .query(query::GET).summary("Get a message attachment");
    DELETE_ATTACHMENT = Endpoint::delete(S, "delete_attachment", "/users/{user_id}/messages/{message_id}/attachments/{attachment_id}")
        .summary("Delete a message attachment");
    CREATE_ATTACHMENT_UPLOAD_SESSION = Endpoint::post(S, "create_attachment_upload_session", "/users/{user_id}/messages/{message_id}/attachments/microsoft.graph.createUploadSession")
        .summary("Start an upload session for a large message attachment");

    // open extensions on messages
    LIST_EXTENSIONS = Endpoint::get(S, "list_extensions", "/users/{user_id}/messages/{message_id}/extensions")
        .query(query::LIST).returns(Collection).summary("List message extensions");
    CREATE_EXTENSION = Endpoint::post(S, "create_extension", "/users/{user_id}/messages/{message_id}/extensions")
        .summary("Create a message extension");
    GET_EXTENSION_COUNT = Endpoint::get(S, "get_extension_count", "/users/{user_id}/messages/{message_id}/extensions/$count")
        .query(query::COUNT).returns(Count).summary("Count message extensions");
    GET_EXTENSION = Endpoint::get(S, "get_extension", "/users/{user_id}/messages/{message_id}/extensions/{extension_id}")
        .query(query::GET).summary("Get a message extension");
    UPDATE_EXTENSION = Endpoint::patch(S, "update_extension", "/users/{user_id}/messages/{message_id}/extensions/{extension_id}")
        .summary("Update a message extension");
    DELETE_EXTENSION = Endpoint::delete(S, "delete_extension", "/users/{user_id}/messages/{message_id}/extensions/{extension_id}")
        .summary("Delete a message extension");

    // mailbox
    SEND_MAIL = Endpoint::post(S, "send_mail", "/users/{user_id}/microsoft.graph.sendMail")
        .returns(Empty).summary("Send a new message");
    GET_MAILBOX_SETTINGS = Endpoint::get(S, "get_mailbox_settings", "/users/{user_id}/mailboxSettings")
        .query(query::GET).summary("Get mailbox settings");
    UPDATE_MAILBOX_SETTINGS = Endpoint::patch(S, "update_mailbox_settings", "/users/{user_id}/mailboxSettings")
        .summary("Update mailbox settings");

    // focused inbox overrides
    LIST_CLASSIFICATION_OVERRIDES = Endpoint::get(S, "list_classification_overrides", "/users/{user_id}/inferenceClassification/overrides")
        .query(query::LIST).returns(Collection).summary("List Focused Inbox overrides");
    CREATE_CLASSIFICATION_OVERRIDE = Endpoint::post(S, "create_classification_override", "/users/{user_id}/inferenceClassification/overrides")
        .summary("Create a Focused Inbox override");
    GET_CLASSIFICATION_OVERRIDE_COUNT = Endpoint::get(S, "get_classification_override_count", "/users/{user_id}/inferenceClassification/overrides/$count")
        .query(query::COUNT).returns(Count).summary("Count Focused Inbox overrides");
    GET_CLASSIFICATION_OVERRIDE = Endpoint::get(S, "get_classification_override", "/users/{user_id}/inferenceClassification/overrides/{override_id}")
        .query(query::GET).summary("Get a Focused Inbox override");
    UPDATE_CLASSIFICATION_OVERRIDE = Endpoint::patch(S, "update_classification_override", "/users/{user_id}/inferenceClassification/overrides/{override_id}")
        .summary("Update a Focused Inbox override");
    DELETE_CLASSIFICATION_OVERRIDE = Endpoint::delete(S, "delete_classification_override", "/users/{user_id}/inferenceClassification/overrides/{override_id}")
        .summary("Delete a Focused Inbox override");
}

/// Mail endpoints for one transport.
///
/// # Example
///
/// ```rust,no_run
/// use graph_client::api::models::mail::CopyMove;
/// use graph_client::api::{GraphClient, QueryOptions};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = GraphClient::graph()?;
/// let mail = client.user_mail();
///
/// let page = mail
///     .list_messages("adele@contoso.com", &QueryOptions::new().top(10).select(["subject"]))
///     .await?;
/// mail.move_message("adele@contoso.com", "AAMkAD...", &CopyMove::to("archive")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct UserMail<'a> {
    transport: &'a dyn Transport,
}

impl<'a> UserMail<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    // ---- mail folders ----

    pub async fn list_folders(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &LIST_FOLDERS, &[user_id], query).await
    }

    pub async fn create_folder(&self, user_id: &str, body: &MailFolder) -> ApiResult<Payload> {
        write(self.transport, &CREATE_FOLDER, &[user_id], body).await
    }

    pub async fn get_folder_count(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &GET_FOLDER_COUNT, &[user_id], query).await
    }

    /// One round of a folder delta query. Pass the previous round's
    /// `$deltatoken` through `query.delta_token`.
    pub async fn folder_delta(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &FOLDER_DELTA, &[user_id], query).await
    }

    pub async fn get_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_FOLDER, &[user_id, mail_folder_id], query).await
    }

    pub async fn update_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        body: &MailFolder,
    ) -> ApiResult<Payload> {
        write(self.transport, &UPDATE_FOLDER, &[user_id, mail_folder_id], body).await
    }

    pub async fn delete_folder(&self, user_id: &str, mail_folder_id: &str) -> ApiResult<Payload> {
        action(self.transport, &DELETE_FOLDER, &[user_id, mail_folder_id]).await
    }

    pub async fn copy_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        body: &CopyMove,
    ) -> ApiResult<Payload> {
        write(self.transport, &COPY_FOLDER, &[user_id, mail_folder_id], body).await
    }

    pub async fn move_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        body: &CopyMove,
    ) -> ApiResult<Payload> {
        write(self.transport, &MOVE_FOLDER, &[user_id, mail_folder_id], body).await
    }

    pub async fn permanent_delete_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
    ) -> ApiResult<Payload> {
        action(self.transport, &PERMANENT_DELETE_FOLDER, &[user_id, mail_folder_id]).await
    }

    // ---- child folders ----

    pub async fn list_child_folders(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &LIST_CHILD_FOLDERS, &[user_id, mail_folder_id], query).await
    }

    pub async fn create_child_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        body: &MailFolder,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_CHILD_FOLDER, &[user_id, mail_folder_id], body).await
    }

    pub async fn get_child_folder_count(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_CHILD_FOLDER_COUNT, &[user_id, mail_folder_id], query).await
    }

    pub async fn child_folder_delta(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &CHILD_FOLDER_DELTA, &[user_id, mail_folder_id], query).await
    }

    pub async fn get_child_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        child_folder_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, child_folder_id];
        read(self.transport, &GET_CHILD_FOLDER, &ids, query).await
    }

    pub async fn update_child_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        child_folder_id: &str,
        body: &MailFolder,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, child_folder_id];
        write(self.transport, &UPDATE_CHILD_FOLDER, &ids, body).await
    }

    pub async fn delete_child_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        child_folder_id: &str,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, child_folder_id];
        action(self.transport, &DELETE_CHILD_FOLDER, &ids).await
    }

    pub async fn copy_child_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        child_folder_id: &str,
        body: &CopyMove,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, child_folder_id];
        write(self.transport, &COPY_CHILD_FOLDER, &ids, body).await
    }

    pub async fn move_child_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        child_folder_id: &str,
        body: &CopyMove,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, child_folder_id];
        write(self.transport, &MOVE_CHILD_FOLDER, &ids, body).await
    }

    pub async fn permanent_delete_child_folder(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        child_folder_id: &str,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, child_folder_id];
        action(self.transport, &PERMANENT_DELETE_CHILD_FOLDER, &ids).await
    }

    // ---- messages in a folder ----

    pub async fn list_folder_messages(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &LIST_FOLDER_MESSAGES, &[user_id, mail_folder_id], query).await
    }

    pub async fn create_folder_message(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        body: &Message,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_FOLDER_MESSAGE, &[user_id, mail_folder_id], body).await
    }

    pub async fn get_folder_message_count(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_FOLDER_MESSAGE_COUNT, &[user_id, mail_folder_id], query).await
    }

    pub async fn folder_message_delta(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &FOLDER_MESSAGE_DELTA, &[user_id, mail_folder_id], query).await
    }

    pub async fn get_folder_message(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        message_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, message_id];
        read(self.transport, &GET_FOLDER_MESSAGE, &ids, query).await
    }

    pub async fn update_folder_message(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        message_id: &str,
        body: &Message,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, message_id];
        write(self.transport, &UPDATE_FOLDER_MESSAGE, &ids, body).await
    }

    pub async fn delete_folder_message(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        message_id: &str,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, message_id];
        action(self.transport, &DELETE_FOLDER_MESSAGE, &ids).await
    }

    /// Returns the message's MIME content as [`Payload::Bytes`].
    pub async fn get_folder_message_content(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        message_id: &str,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, message_id];
        action(self.transport, &GET_FOLDER_MESSAGE_CONTENT, &ids).await
    }

    pub async fn update_folder_message_content(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        message_id: &str,
        content: Vec<u8>,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, message_id];
        upload(self.transport, &UPDATE_FOLDER_MESSAGE_CONTENT, &ids, content).await
    }

    pub async fn delete_folder_message_content(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        message_id: &str,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, message_id];
        action(self.transport, &DELETE_FOLDER_MESSAGE_CONTENT, &ids).await
    }

    pub async fn copy_folder_message(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        message_id: &str,
        body: &CopyMove,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, message_id];
        write(self.transport, &COPY_FOLDER_MESSAGE, &ids, body).await
    }

    pub async fn move_folder_message(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        message_id: &str,
        body: &CopyMove,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, message_id];
        write(self.transport, &MOVE_FOLDER_MESSAGE, &ids, body).await
    }

    // ---- message rules ----

    pub async fn list_message_rules(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &LIST_MESSAGE_RULES, &[user_id, mail_folder_id], query).await
    }

    pub async fn create_message_rule(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        body: &MessageRule,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_MESSAGE_RULE, &[user_id, mail_folder_id], body).await
    }

    pub async fn get_message_rule_count(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_MESSAGE_RULE_COUNT, &[user_id, mail_folder_id], query).await
    }

    pub async fn get_message_rule(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        message_rule_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, message_rule_id];
        read(self.transport, &GET_MESSAGE_RULE, &ids, query).await
    }

    pub async fn update_message_rule(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        message_rule_id: &str,
        body: &MessageRule,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, message_rule_id];
        write(self.transport, &UPDATE_MESSAGE_RULE, &ids, body).await
    }

    pub async fn delete_message_rule(
        &self,
        user_id: &str,
        mail_folder_id: &str,
        message_rule_id: &str,
    ) -> ApiResult<Payload> {
        let ids = [user_id, mail_folder_id, message_rule_id];
        action(self.transport, &DELETE_MESSAGE_RULE, &ids).await
    }

    // ---- messages ----

    pub async fn list_messages(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &LIST_MESSAGES, &[user_id], query).await
    }

    pub async fn create_message(&self, user_id: &str, body: &Message) -> ApiResult<Payload> {
        write(self.transport, &CREATE_MESSAGE, &[user_id], body).await
    }

    /// `GET /users/{user_id}/messages/$count`. Accepts `search` and `filter`.
    pub async fn get_message_count(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &GET_MESSAGE_COUNT, &[user_id], query).await
    }

    pub async fn message_delta(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &MESSAGE_DELTA, &[user_id], query).await
    }

    pub async fn get_message(
        &self,
        user_id: &str,
        message_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_MESSAGE, &[user_id, message_id], query).await
    }

    pub async fn update_message(
        &self,
        user_id: &str,
        message_id: &str,
        body: &Message,
    ) -> ApiResult<Payload> {
        write(self.transport, &UPDATE_MESSAGE, &[user_id, message_id], body).await
    }

    pub async fn delete_message(&self, user_id: &str, message_id: &str) -> ApiResult<Payload> {
        action(self.transport, &DELETE_MESSAGE, &[user_id, message_id]).await
    }

    /// Returns the message's MIME content as [`Payload::Bytes`].
    pub async fn get_message_content(&self, user_id: &str, message_id: &str) -> ApiResult<Payload> {
        action(self.transport, &GET_MESSAGE_CONTENT, &[user_id, message_id]).await
    }

    pub async fn update_message_content(
        &self,
        user_id: &str,
        message_id: &str,
        content: Vec<u8>,
    ) -> ApiResult<Payload> {
        upload(self.transport, &UPDATE_MESSAGE_CONTENT, &[user_id, message_id], content).await
    }

    pub async fn delete_message_content(&self, user_id: &str, message_id: &str) -> ApiResult<Payload> {
        action(self.transport, &DELETE_MESSAGE_CONTENT, &[user_id, message_id]).await
    }

    pub async fn copy_message(
        &self,
        user_id: &str,
        message_id: &str,
        body: &CopyMove,
    ) -> ApiResult<Payload> {
        write(self.transport, &COPY_MESSAGE, &[user_id, message_id], body).await
    }

    pub async fn move_message(
        &self,
        user_id: &str,
        message_id: &str,
        body: &CopyMove,
    ) -> ApiResult<Payload> {
        write(self.transport, &MOVE_MESSAGE, &[user_id, message_id], body).await
    }

    pub async fn forward_message(
        &self,
        user_id: &str,
        message_id: &str,
        body: &MessageComment,
    ) -> ApiResult<Payload> {
        write(self.transport, &FORWARD_MESSAGE, &[user_id, message_id], body).await
    }

    pub async fn reply_message(
        &self,
        user_id: &str,
        message_id: &str,
        body: &MessageComment,
    ) -> ApiResult<Payload> {
        write(self.transport, &REPLY_MESSAGE, &[user_id, message_id], body).await
    }

    pub async fn reply_all_message(
        &self,
        user_id: &str,
        message_id: &str,
        body: &MessageComment,
    ) -> ApiResult<Payload> {
        write(self.transport, &REPLY_ALL_MESSAGE, &[user_id, message_id], body).await
    }

    pub async fn create_reply(
        &self,
        user_id: &str,
        message_id: &str,
        body: &MessageComment,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_REPLY, &[user_id, message_id], body).await
    }

    pub async fn create_reply_all(
        &self,
        user_id: &str,
        message_id: &str,
        body: &MessageComment,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_REPLY_ALL, &[user_id, message_id], body).await
    }

    pub async fn create_forward(
        &self,
        user_id: &str,
        message_id: &str,
        body: &MessageComment,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_FORWARD, &[user_id, message_id], body).await
    }

    pub async fn send_message(&self, user_id: &str, message_id: &str) -> ApiResult<Payload> {
        action(self.transport, &SEND_MESSAGE, &[user_id, message_id]).await
    }

    pub async fn permanent_delete_message(
        &self,
        user_id: &str,
        message_id: &str,
    ) -> ApiResult<Payload> {
        action(self.transport, &PERMANENT_DELETE_MESSAGE, &[user_id, message_id]).await
    }

    // ---- attachments ----

    pub async fn list_attachments(
        &self,
        user_id: &str,
        message_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &LIST_ATTACHMENTS, &[user_id, message_id], query).await
    }

    /// Adds an attachment under 3 MB. Larger files need
    /// [`create_attachment_upload_session`](Self::create_attachment_upload_session).
    pub async fn create_attachment(
        &self,
        user_id: &str,
        message_id: &str,
        body: &Attachment,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_ATTACHMENT, &[user_id, message_id], body).await
    }

    pub async fn get_attachment_count(
        &self,
        user_id: &str,
        message_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_ATTACHMENT_COUNT, &[user_id, message_id], query).await
    }

    pub async fn get_attachment(
        &self,
        user_id: &str,
        message_id: &str,
        attachment_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        let ids = [user_id, message_id, attachment_id];
        read(self.transport, &GET_ATTACHMENT, &ids, query).await
    }

    pub async fn delete_attachment(
        &self,
        user_id: &str,
        message_id: &str,
        attachment_id: &str,
    ) -> ApiResult<Payload> {
        let ids = [user_id, message_id, attachment_id];
        action(self.transport, &DELETE_ATTACHMENT, &ids).await
    }

    pub async fn create_attachment_upload_session(
        &self,
        user_id: &str,
        message_id: &str,
        body: &UploadSessionRequest,
    ) -> ApiResult<Payload> {
        let ids = [user_id, message_id];
        write(self.transport, &CREATE_ATTACHMENT_UPLOAD_SESSION, &ids, body).await
    }

    // ---- extensions ----

    pub async fn list_extensions(
        &self,
        user_id: &str,
        message_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &LIST_EXTENSIONS, &[user_id, message_id], query).await
    }

    pub async fn create_extension(
        &self,
        user_id: &str,
        message_id: &str,
        body: &Extension,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_EXTENSION, &[user_id, message_id], body).await
    }

    pub async fn get_extension_count(
        &self,
        user_id: &str,
        message_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_EXTENSION_COUNT, &[user_id, message_id], query).await
    }

    pub async fn get_extension(
        &self,
        user_id: &str,
        message_id: &str,
        extension_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        let ids = [user_id, message_id, extension_id];
        read(self.transport, &GET_EXTENSION, &ids, query).await
    }

    pub async fn update_extension(
        &self,
        user_id: &str,
        message_id: &str,
        extension_id: &str,
        body: &Extension,
    ) -> ApiResult<Payload> {
        let ids = [user_id, message_id, extension_id];
        write(self.transport, &UPDATE_EXTENSION, &ids, body).await
    }

    pub async fn delete_extension(
        &self,
        user_id: &str,
        message_id: &str,
        extension_id: &str,
    ) -> ApiResult<Payload> {
        let ids = [user_id, message_id, extension_id];
        action(self.transport, &DELETE_EXTENSION, &ids).await
    }

    // ---- mailbox ----

    /// Sends a new message in one call. The service answers `202 Accepted`
    /// with no body, so success is [`Payload::Empty`].
    pub async fn send_mail(&self, user_id: &str, body: &SendMail) -> ApiResult<Payload> {
        write(self.transport, &SEND_MAIL, &[user_id], body).await
    }

    pub async fn get_mailbox_settings(&self, user_id: &str, query: &QueryOptions) -> ApiResult<Payload> {
        read(self.transport, &GET_MAILBOX_SETTINGS, &[user_id], query).await
    }

    pub async fn update_mailbox_settings(
        &self,
        user_id: &str,
        body: &MailboxSettings,
    ) -> ApiResult<Payload> {
        write(self.transport, &UPDATE_MAILBOX_SETTINGS, &[user_id], body).await
    }

    // ---- focused inbox overrides ----

    pub async fn list_classification_overrides(
        &self,
        user_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &LIST_CLASSIFICATION_OVERRIDES, &[user_id], query).await
    }

    pub async fn create_classification_override(
        &self,
        user_id: &str,
        body: &InferenceClassificationOverride,
    ) -> ApiResult<Payload> {
        write(self.transport, &CREATE_CLASSIFICATION_OVERRIDE, &[user_id], body).await
    }

    pub async fn get_classification_override_count(
        &self,
        user_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_CLASSIFICATION_OVERRIDE_COUNT, &[user_id], query).await
    }

    pub async fn get_classification_override(
        &self,
        user_id: &str,
        override_id: &str,
        query: &QueryOptions,
    ) -> ApiResult<Payload> {
        read(self.transport, &GET_CLASSIFICATION_OVERRIDE, &[user_id, override_id], query).await
    }

    pub async fn update_classification_override(
        &self,
        user_id: &str,
        override_id: &str,
        body: &InferenceClassificationOverride,
    ) -> ApiResult<Payload> {
        let ids = [user_id, override_id];
        write(self.transport, &UPDATE_CLASSIFICATION_OVERRIDE, &ids, body).await
    }

    pub async fn delete_classification_override(
        &self,
        user_id: &str,
        override_id: &str,
    ) -> ApiResult<Payload> {
        action(self.transport, &DELETE_CLASSIFICATION_OVERRIDE, &[user_id, override_id]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ApiError;
    use crate::api::models::Recipient;
    use crate::api::request::{QueryValue, RequestBody, Verb, OCTET_STREAM};
    use crate::api::transport::testing::Recorder;
    use crate::api::transport::RawResponse;
    use serde_json::json;

    #[tokio::test]
    async fn test_message_count_with_search() {
        let recorder = Recorder::new().respond(RawResponse::new(200).with_body("text/plain", "7"));
        let payload = UserMail::new(&recorder)
            .get_message_count("u1", &QueryOptions::new().search("foo"))
            .await
            .unwrap();

        let request = recorder.last();
        assert_eq!(request.method, Verb::Get);
        assert_eq!(request.path, "/users/u1/messages/$count");
        assert_eq!(request.query, vec![("$search".to_string(), QueryValue::Text("foo".into()))]);
        assert_eq!(payload.count().unwrap(), 7);
    }

    #[tokio::test]
    async fn test_message_count_propagates_remote_error() {
        let body = r#"{"error":{"code":"ErrorAccessDenied","message":"Access is denied."}}"#;
        let recorder = Recorder::new().respond(RawResponse::new(403).with_body("application/json", body));
        let err = UserMail::new(&recorder)
            .get_message_count("u1", &QueryOptions::new())
            .await
            .unwrap_err();
        match err {
            ApiError::HttpStatus { status, body: got } => {
                assert_eq!(status, 403);
                assert_eq!(got, body.as_bytes());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_first_missing_identifier_is_reported() {
        let recorder = Recorder::new();
        let mail = UserMail::new(&recorder);

        let err = mail.get_folder_message("", "", "m1", &QueryOptions::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter { ref name } if name == "user_id"));

        let err = mail.get_folder_message("u1", "", "m1", &QueryOptions::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter { ref name } if name == "mail_folder_id"));

        let err = mail.delete_attachment("u1", "m1", "").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter { ref name } if name == "attachment_id"));

        assert_eq!(recorder.calls(), 0);
    }

    #[tokio::test]
    async fn test_mime_content_upload_is_octet_stream() {
        let recorder = Recorder::new();
        UserMail::new(&recorder)
            .update_message_content("u1", "m1", b"Subject: hi\r\n\r\nbody".to_vec())
            .await
            .unwrap();
        let request = recorder.last();
        assert_eq!(request.method, Verb::Put);
        assert_eq!(request.path, "/users/u1/messages/m1/$value");
        assert_eq!(request.body.content_type(), Some(OCTET_STREAM));
    }

    #[tokio::test]
    async fn test_mime_content_download_is_bytes() {
        let recorder = Recorder::new()
            .respond(RawResponse::new(200).with_body("text/plain", "Subject: hi\r\n\r\nbody"));
        let payload = UserMail::new(&recorder)
            .get_folder_message_content("u1", "inbox", "m1")
            .await
            .unwrap();
        assert_eq!(payload.as_bytes(), Some(&b"Subject: hi\r\n\r\nbody"[..]));
        assert_eq!(recorder.last().path, "/users/u1/mailFolders/inbox/messages/m1/$value");
    }

    #[tokio::test]
    async fn test_actions_use_vendor_segments() {
        let recorder = Recorder::new();
        let mail = UserMail::new(&recorder);

        mail.move_message("u1", "m1", &CopyMove::to("archive")).await.unwrap();
        let request = recorder.last();
        assert_eq!(request.method, Verb::Post);
        assert_eq!(request.path, "/users/u1/messages/m1/microsoft.graph.move");
        assert_eq!(request.body, RequestBody::Json(json!({"destinationId": "archive"})));

        mail.send_message("u1", "m1").await.unwrap();
        let request = recorder.last();
        assert_eq!(request.path, "/users/u1/messages/m1/microsoft.graph.send");
        assert_eq!(request.body, RequestBody::Empty);

        mail.permanent_delete_folder("u1", "f1").await.unwrap();
        assert_eq!(
            recorder.last().path,
            "/users/u1/mailFolders/f1/microsoft.graph.permanentDelete"
        );
    }

    #[tokio::test]
    async fn test_reply_body_subset() {
        let recorder = Recorder::new();
        let body = MessageComment {
            comment: Some("Thanks!".into()),
            ..Default::default()
        };
        UserMail::new(&recorder).reply_message("u1", "m1", &body).await.unwrap();
        assert_eq!(recorder.last().body, RequestBody::Json(json!({"comment": "Thanks!"})));
    }

    #[tokio::test]
    async fn test_send_mail_is_empty_success() {
        let recorder = Recorder::new().respond(RawResponse::new(202));
        let body = SendMail {
            message: Some(Message {
                subject: Some("Lunch?".into()),
                to_recipients: Some(vec![Recipient::address("a@contoso.com")]),
                ..Default::default()
            }),
            save_to_sent_items: Some(false),
        };
        let payload = UserMail::new(&recorder).send_mail("u1", &body).await.unwrap();
        assert!(payload.is_empty());
        assert_eq!(recorder.last().path, "/users/u1/microsoft.graph.sendMail");
    }

    #[tokio::test]
    async fn test_folder_list_query_order() {
        let recorder = Recorder::new();
        let query = QueryOptions::new()
            .top(50)
            .include_hidden_folders("true")
            .select(["displayName", "totalItemCount"]);
        UserMail::new(&recorder).list_folders("u1", &query).await.unwrap();
        let keys: Vec<String> = recorder.last().query.into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["includeHiddenFolders", "$top", "$select"]);
    }

    #[tokio::test]
    async fn test_delta_passes_delta_token() {
        let recorder = Recorder::new();
        UserMail::new(&recorder)
            .message_delta("u1", &QueryOptions::new().delta_token("abc"))
            .await
            .unwrap();
        let request = recorder.last();
        assert_eq!(request.path, "/users/u1/messages/microsoft.graph.delta()");
        assert_eq!(
            request.query_value("$deltatoken"),
            Some(&QueryValue::Text("abc".into()))
        );
    }

    #[test]
    fn test_table_size() {
        assert_eq!(ENDPOINTS.len(), 79);
    }
}
