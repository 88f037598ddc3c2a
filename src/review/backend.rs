//! Chat completion seam between the review chain and the model provider.
//!
//! [`ChatBackend`] is the single operation the chain needs: send one system
//! message plus one user message and wait for the full reply. [`GenaiBackend`]
//! implements it over `genai`, which routes `gpt-*` model names to OpenAI.

use std::fmt;
use std::future::Future;

use genai::chat::{ChatMessage, ChatRequest};
use genai::resolver::{AuthData, AuthResolver};
use genai::{Client, ModelIden};

/// One model reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Assistant text. Empty when the provider returned no text part.
    pub text: String,
    /// Reasoning text, when the provider exposes it.
    pub reasoning: Option<String>,
}

/// A single blocking-until-complete chat call.
pub trait ChatBackend {
    fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> impl Future<Output = anyhow::Result<Completion>> + Send;
}

/// [`ChatBackend`] backed by a `genai` client with a fixed API key.
pub struct GenaiBackend {
    client: Client,
}

impl fmt::Debug for GenaiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenaiBackend")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GenaiBackend {
    /// Build a client that authenticates every request with `api_key`,
    /// regardless of which environment variable it was read from.
    pub fn new(api_key: String) -> Self {
        let auth_resolver = AuthResolver::from_resolver_fn(
            move |_model_iden: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
                Ok(Some(AuthData::from_single(api_key.clone())))
            },
        );
        let client = Client::builder().with_auth_resolver(auth_resolver).build();
        Self { client }
    }
}

impl ChatBackend for GenaiBackend {
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> anyhow::Result<Completion> {
        let chat_req = ChatRequest::from_system(system).append_message(ChatMessage::user(user));

        let res = self.client.exec_chat(model, chat_req, None).await?;

        Ok(Completion {
            text: res.first_text().unwrap_or_default().to_string(),
            reasoning: res.reasoning_content.clone(),
        })
    }
}
