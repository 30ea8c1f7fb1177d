use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct HandleMessageParams {
    /// The chat message addressed to the bot (e.g., 'close 1234')
    pub message: String,
    /// Display name of the person who sent the message (e.g., 'Jane')
    pub requester: String,
}
