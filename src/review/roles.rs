//! The three reviewer roles of the chain.
//!
//! Each role is a fixed set of instructions (sent as the system message), a
//! heading used in its review file, and the file name it is persisted under.

use std::fmt;

use crate::config::AppConfig;

const JUNIOR_INSTRUCTIONS: &str = "\
You are a junior developer. Your job is to review the code as a junior developer. \
Focus on providing peer-to-peer feedback, and ask questions about specific parts of the code. \
Ask as many questions as possible. Format your response to Markdown Style.";

const SENIOR_INSTRUCTIONS: &str = "\
You are a senior developer. Your job is to review the code as a senior developer. \
Focus on the tech stack, and give insights as a senior developer to junior developer. \
Answer any questions asked by the junior. Be as critical as possible. \
Format your response to Markdown Style.";

const MANAGER_INSTRUCTIONS: &str = "\
You are the manager.
You are given the code under review, the junior developer's review with their questions, \
and the senior developer's response.
Produce a single unified review for the user that:
  - summarizes junior concerns,
  - includes senior answers,
  - gives next steps.
Format your response to Markdown Style.";

/// One step of the review chain, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Junior,
    Senior,
    Manager,
}

impl Role {
    /// All roles in the order the chain calls them.
    pub const ALL: [Role; 3] = [Role::Junior, Role::Senior, Role::Manager];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Junior => "junior",
            Role::Senior => "senior",
            Role::Manager => "manager",
        }
    }

    /// System message for this role's call.
    pub fn instructions(self) -> &'static str {
        match self {
            Role::Junior => JUNIOR_INSTRUCTIONS,
            Role::Senior => SENIOR_INSTRUCTIONS,
            Role::Manager => MANAGER_INSTRUCTIONS,
        }
    }

    /// Top-level heading of the review file.
    pub fn title(self) -> &'static str {
        match self {
            Role::Junior => "Junior Developer Review",
            Role::Senior => "Senior Developer Review",
            Role::Manager => "Manager Notes",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Role::Junior => "junior_review.md",
            Role::Senior => "senior_review.md",
            Role::Manager => "manager_review.md",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model identifier for each role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleModels {
    pub junior: String,
    pub senior: String,
    pub manager: String,
}

impl RoleModels {
    /// Same model for every role.
    pub fn uniform(model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            junior: model.clone(),
            senior: model.clone(),
            manager: model,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            junior: config.junior_model.clone(),
            senior: config.senior_model.clone(),
            manager: config.manager_model.clone(),
        }
    }

    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::Junior => &self.junior,
            Role::Senior => &self.senior,
            Role::Manager => &self.manager,
        }
    }
}
