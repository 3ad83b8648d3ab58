//! MCP `ServerHandler` over the tool [`Dispatcher`].
//!
//! `tools/list` maps to [`Dispatcher::list`] and `tools/call` to
//! [`Dispatcher::invoke`]. Invalid input and classified remote failures are
//! returned as tool error results so the calling model can read them; an
//! unknown tool name is a protocol error.

use crate::tool::{DispatchError, Dispatcher, ToolInfo};
use log::error;
use rmcp::{RoleServer, ServerHandler, model::*, service::RequestContext};
use serde_json::Value;
use std::sync::Arc;

const INSTRUCTIONS: &str = "GitHub tools: repositories, files, branches, commits, issues, \
pull requests and search. Every tool takes a JSON argument object described by its input schema.";

#[derive(Debug, Clone)]
pub struct GitHubMcpServer {
    dispatcher: Arc<Dispatcher>,
}

impl GitHubMcpServer {
    #[must_use]
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

fn to_mcp_tool(info: ToolInfo) -> Tool {
    let schema = match info.input_schema {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    };
    let mut tool = Tool::new(info.name, info.description, Arc::new(schema));
    tool.annotations = Some(
        ToolAnnotations::new()
            .read_only(info.annotations.read_only)
            .destructive(info.annotations.destructive)
            .idempotent(info.annotations.idempotent)
            .open_world(info.annotations.open_world),
    );
    tool
}

impl ServerHandler for GitHubMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools = self.dispatcher.list().into_iter().map(to_mcp_tool).collect();
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request.arguments.map(Value::Object).unwrap_or(Value::Null);

        match self.dispatcher.invoke(&request.name, arguments).await {
            Ok(value) => {
                let text = serde_json::to_string_pretty(&value)
                    .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(err @ (DispatchError::InvalidInput(_) | DispatchError::Remote(_))) => {
                Ok(CallToolResult::error(vec![Content::text(err.to_string())]))
            }
            Err(err @ DispatchError::UnknownTool(_)) => {
                Err(ErrorData::invalid_params(err.to_string(), None))
            }
            Err(err) => {
                error!("{} failed unexpectedly: {err}", request.name);
                Err(ErrorData::internal_error(err.to_string(), None))
            }
        }
    }
}
