//! MCP tool handlers for the agenda server.
//!
//! Each tool maps to one user trigger on [`AgendaService`] and answers with a
//! JSON document holding the status message, the total contact count, and the
//! contacts the caller should display.

use crate::domain::ContactId;
use crate::models::{Contact, ContactFields};
use crate::search;
use crate::services::{AgendaService, StatusMessage};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The agenda MCP server.
///
/// The whole service sits behind one mutex, so every tool call is a single
/// indivisible step against the contact collection.
#[derive(Clone)]
pub struct AgendaMcpServer {
    agenda: Arc<Mutex<AgendaService>>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for AgendaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "agenda".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Personal contact book - add, edit, delete, search and clear contacts stored on the local machine.".into()),
        }
    }
}

/// Same keys as the `form` returned by `begin_edit`, so it can be sent back as is.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct SubmitContactParams {
    first_name: String,
    last_name: String,
    phone: String,
    email: String,
    address: String,
}

impl From<SubmitContactParams> for ContactFields {
    fn from(params: SubmitContactParams) -> Self {
        ContactFields::new(
            params.first_name,
            params.last_name,
            params.phone,
            params.email,
            params.address,
        )
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    contact_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContactsParams {
    #[serde(default)]
    query: String,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn parse_id(raw: &str) -> Result<ContactId, McpError> {
    ContactId::new(raw).map_err(invalid_params)
}

/// Response body shared by every tool.
pub(crate) fn view_json(status: &StatusMessage, agenda: &AgendaService) -> serde_json::Value {
    let query = agenda.query();
    serde_json::json!({
        "status": status,
        "total_count": agenda.total_count(),
        "query": query,
        "editing": agenda.session().editing_id().map(ContactId::as_str),
        "contacts": agenda.visible().into_iter().map(|c| contact_json(c, query)).collect::<Vec<_>>(),
    })
}

fn contact_json(contact: &Contact, query: &str) -> serde_json::Value {
    let mut value = serde_json::json!(contact);
    let matched: Vec<&str> = search::matched_fields(contact, query)
        .iter()
        .map(|f| f.display_name())
        .collect();
    if !matched.is_empty() {
        value["matched_fields"] = serde_json::json!(matched);
    }
    value
}

/// Pre-filled form for the contact under edit; `null` when there is none.
fn edit_form(contact: Option<&Contact>) -> serde_json::Value {
    serde_json::json!(contact.map(Contact::to_fields))
}

fn respond(body: serde_json::Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&body).map_err(to_mcp_error)?,
    )]))
}

#[tool_router]
impl AgendaMcpServer {
    /// Create a new agenda MCP server around `agenda`.
    pub fn new(agenda: AgendaService) -> Self {
        Self {
            agenda: Arc::new(Mutex::new(agenda)),
            tool_router: Self::tool_router(),
        }
    }

    /// Shared handle to the underlying service.
    pub fn agenda(&self) -> Arc<Mutex<AgendaService>> {
        self.agenda.clone()
    }

    /// Submit the contact form.
    #[tool(
        description = "Submit the contact form. Adds a new contact, or saves changes to the contact currently being edited (see begin_edit). Fields are trimmed; phone must be 6-20 characters of digits, spaces, ( ) + -, and email must look like user@domain.tld."
    )]
    async fn submit_contact(
        &self,
        params: Parameters<SubmitContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let fields = ContactFields::from(params.0);
        let mut agenda = self.agenda.lock().await;

        tracing::info!("MCP Handler: submit_contact called");
        let status = agenda.submit(&fields).map_err(|e| {
            tracing::error!("Failed to save contact: {:?}", e);
            to_mcp_error(e)
        })?;

        respond(view_json(&status, &agenda))
    }

    /// Start editing a contact.
    #[tool(
        description = "Start editing a contact. The next submit_contact call will update this contact instead of adding a new one. Returns the contact's current fields."
    )]
    async fn begin_edit(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = parse_id(&params.0.contact_id)?;
        let mut agenda = self.agenda.lock().await;

        let (status, contact) = agenda.request_edit(&id);
        let mut body = view_json(&status, &agenda);
        body["form"] = edit_form(contact.as_ref());

        respond(body)
    }

    /// Leave edit mode.
    #[tool(description = "Cancel the current edit so the next submit_contact adds a new contact")]
    async fn cancel_edit(&self) -> Result<CallToolResult, McpError> {
        let mut agenda = self.agenda.lock().await;
        let status = agenda.cancel_edit();
        respond(view_json(&status, &agenda))
    }

    /// Delete one contact.
    #[tool(description = "Delete a contact by ID")]
    async fn delete_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = parse_id(&params.0.contact_id)?;
        let mut agenda = self.agenda.lock().await;

        tracing::info!(id = %id, "MCP Handler: delete_contact called");
        let status = agenda.request_delete(&id).map_err(to_mcp_error)?;

        respond(view_json(&status, &agenda))
    }

    /// Delete every contact.
    #[tool(description = "Delete every contact in the agenda")]
    async fn clear_contacts(&self) -> Result<CallToolResult, McpError> {
        let mut agenda = self.agenda.lock().await;

        tracing::info!("MCP Handler: clear_contacts called");
        let status = agenda.request_clear_all().map_err(to_mcp_error)?;

        respond(view_json(&status, &agenda))
    }

    /// Set the search query.
    #[tool(
        description = "Filter contacts by a case-insensitive substring of first name, last name, phone or email. An empty query shows every contact. The query stays active for later calls."
    )]
    async fn search_contacts(
        &self,
        params: Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut agenda = self.agenda.lock().await;

        let count = agenda.set_search_query(params.0.query).len();
        let status = if count == 0 {
            StatusMessage::info("No contacts")
        } else {
            StatusMessage::info(format!("{} contact(s) found", count))
        };

        respond(view_json(&status, &agenda))
    }

    /// List contacts under the current query.
    #[tool(description = "List the contacts matching the current search query, in insertion order")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let agenda = self.agenda.lock().await;
        let status = if agenda.total_count() == 0 {
            StatusMessage::info("No contacts")
        } else {
            StatusMessage::info(format!("{} contact(s)", agenda.total_count()))
        };
        respond(view_json(&status, &agenda))
    }
}
