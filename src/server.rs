use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    handler::server::router::tool::ToolRouter,
    handler::server::tool::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};

use crate::interpreter::CommandInterpreter;
use crate::tools::HandleMessageParams;

#[derive(Clone)]
pub struct RedmineChatServer {
    interpreter: Arc<CommandInterpreter>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RedmineChatServer {
    pub fn new(interpreter: CommandInterpreter) -> Self {
        Self {
            interpreter: Arc::new(interpreter),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Handle a chat message addressed to the Redmine bot. Understands 'show my issues', 'close <id>', and '<id> ready to test assign <name>'. Returns the bot's reply.")]
    async fn handle_message(
        &self,
        Parameters(params): Parameters<HandleMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let reply = self
            .interpreter
            .handle(&params.message, &params.requester)
            .await;
        Ok(CallToolResult::success(vec![Content::text(reply)]))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for RedmineChatServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Redmine chat bot - list, close, and hand off Redmine issues from chat".into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
