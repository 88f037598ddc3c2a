//! The junior → senior → manager review chain.
//!
//! Exactly three calls, strictly in order. Each call is awaited before the
//! next begins and its text is appended to every later prompt. The first
//! failure stops the chain.

use std::path::Path;

use super::backend::{ChatBackend, Completion};
use super::logging::RunLogger;
use super::prompt::{self, ReviewRequest};
use super::roles::{Role, RoleModels};
use crate::error::ReviewError;

/// The texts produced by one run of the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewNotes {
    pub junior: String,
    pub senior: String,
    pub manager: String,
    /// Reasoning text returned alongside any of the three calls, in call order.
    pub planning: Vec<String>,
}

impl ReviewNotes {
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::Junior => &self.junior,
            Role::Senior => &self.senior,
            Role::Manager => &self.manager,
        }
    }
}

/// Read the file under review into a [`ReviewRequest`].
pub async fn load_request(
    instruction: &str,
    file_path: &Path,
) -> Result<ReviewRequest, ReviewError> {
    let source = tokio::fs::read_to_string(file_path)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ReviewError::SourceNotFound {
                path: file_path.to_path_buf(),
            },
            _ => ReviewError::SourceUnreadable {
                path: file_path.to_path_buf(),
                source: e,
            },
        })?;

    Ok(ReviewRequest {
        instruction: instruction.to_string(),
        file_path: file_path.to_path_buf(),
        source,
    })
}

pub struct ReviewChain<'a, B> {
    backend: &'a B,
    models: RoleModels,
    logger: &'a mut RunLogger,
}

impl<'a, B: ChatBackend> ReviewChain<'a, B> {
    pub fn new(backend: &'a B, models: RoleModels, logger: &'a mut RunLogger) -> Self {
        Self {
            backend,
            models,
            logger,
        }
    }

    /// Run the three calls and collect their texts.
    pub async fn run(&mut self, request: &ReviewRequest) -> Result<ReviewNotes, ReviewError> {
        self.logger.log_run_start(&request.file_path, &request.instruction);

        let full_input = request.full_input();
        let mut planning = Vec::new();

        let junior = self
            .call(Role::Junior, &prompt::junior_prompt(&full_input), &mut planning)
            .await?;

        let senior = self
            .call(
                Role::Senior,
                &prompt::senior_prompt(&full_input, &junior),
                &mut planning,
            )
            .await?;

        let manager = self
            .call(
                Role::Manager,
                &prompt::manager_prompt(&full_input, &junior, &senior),
                &mut planning,
            )
            .await?;

        Ok(ReviewNotes {
            junior,
            senior,
            manager,
            planning,
        })
    }

    async fn call(
        &mut self,
        role: Role,
        user_prompt: &str,
        planning: &mut Vec<String>,
    ) -> Result<String, ReviewError> {
        let model = self.models.for_role(role).to_string();
        tracing::info!(
            role = %role,
            model = %model,
            prompt_chars = user_prompt.len(),
            "Calling agent"
        );
        self.logger.log_request(role.as_str(), &model, user_prompt);

        let completion = match self
            .backend
            .complete(&model, role.instructions(), user_prompt)
            .await
        {
            Ok(c) => c,
            Err(e) => {
                let message = format!("{e:#}");
                tracing::error!(role = %role, error = %message, "Agent call failed");
                self.logger.log_error(Some(role.as_str()), &message);
                self.logger.log_run_end("failed");
                return Err(ReviewError::Llm { role, message });
            }
        };

        let Completion { text, reasoning } = completion;
        self.logger.log_response(role.as_str(), &text, reasoning.as_deref());

        if text.trim().is_empty() {
            tracing::error!(role = %role, "Agent returned no text");
            self.logger.log_error(Some(role.as_str()), "empty response");
            self.logger.log_run_end("failed");
            return Err(ReviewError::EmptyResponse { role });
        }

        tracing::info!(role = %role, chars = text.len(), "Agent responded");
        if let Some(r) = reasoning.filter(|r| !r.trim().is_empty()) {
            planning.push(r);
        }
        Ok(text)
    }
}
