//! Text generation collaborator.
//!
//! The IME hands composed text to an external generator as a prompt. The
//! generator itself (network client, model selection) lives outside this
//! crate behind the [`Generator`] trait. `Assistant::respond` never fails:
//! a missing backend, an empty reply or a backend error each degrade to a
//! fixed fallback message from [`AssistantConfig`].

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// A text generation backend.
pub trait Generator {
    /// Produce a reply to `prompt` under `system_instruction`.
    fn generate(&self, prompt: &str, system_instruction: &str) -> anyhow::Result<String>;
}

impl<F> Generator for F
where
    F: Fn(&str, &str) -> anyhow::Result<String>,
{
    fn generate(&self, prompt: &str, system_instruction: &str) -> anyhow::Result<String> {
        self(prompt, system_instruction)
    }
}

/// Settings passed to and around the generator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Sampling temperature forwarded to backends that support it
    pub temperature: f32,
    /// Reply when no backend is configured
    pub unavailable_message: String,
    /// Reply when the backend returns nothing
    pub empty_message: String,
    /// Reply when the backend fails
    pub error_message: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            unavailable_message: "현재 AI 서비스와 연결할 수 없습니다. (API 키 확인 필요)".to_string(),
            empty_message: "죄송해요, 다시 말씀해 주시겠어요?".to_string(),
            error_message: "연결에 문제가 발생했습니다. 잠시 후 다시 시도해 주세요.".to_string(),
        }
    }
}

/// Wraps an optional [`Generator`] with fallback replies.
pub struct Assistant<G> {
    generator: Option<G>,
    config: AssistantConfig,
}

impl<G: Generator> Assistant<G> {
    pub fn new(generator: G, config: AssistantConfig) -> Self {
        Self {
            generator: Some(generator),
            config,
        }
    }

    /// An assistant with no backend; every reply is the unavailable message.
    pub fn unavailable(config: AssistantConfig) -> Self {
        Self {
            generator: None,
            config,
        }
    }

    pub fn is_available(&self) -> bool {
        self.generator.is_some()
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Ask the backend for a reply. `instructions` are joined with blank
    /// lines into one system instruction.
    pub fn respond(&self, prompt: &str, instructions: &[&str]) -> String {
        let Some(generator) = &self.generator else {
            warn!("no text generation backend configured");
            return self.config.unavailable_message.clone();
        };

        let system_instruction = instructions.join("\n\n");
        match generator.generate(prompt, &system_instruction) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => self.config.empty_message.clone(),
            Err(e) => {
                error!(error = %e, "text generation failed");
                self.config.error_message.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    type GenFn = fn(&str, &str) -> anyhow::Result<String>;

    #[test]
    fn passes_prompt_and_joined_instructions() {
        let seen = RefCell::new(None);
        let backend = |prompt: &str, system: &str| -> anyhow::Result<String> {
            *seen.borrow_mut() = Some((prompt.to_string(), system.to_string()));
            Ok(format!("re: {}", prompt))
        };
        let assistant = Assistant::new(backend, AssistantConfig::default());
        let reply = assistant.respond("안녕", &["친절하게", "짧게"]);
        assert_eq!(reply, "re: 안녕");
        assert_eq!(
            seen.borrow().clone(),
            Some(("안녕".to_string(), "친절하게\n\n짧게".to_string()))
        );
    }

    #[test]
    fn missing_backend_uses_unavailable_message() {
        let assistant: Assistant<GenFn> = Assistant::unavailable(AssistantConfig::default());
        assert!(!assistant.is_available());
        assert_eq!(
            assistant.respond("hi", &[]),
            AssistantConfig::default().unavailable_message
        );
    }

    #[test]
    fn empty_reply_uses_empty_message() {
        let backend: GenFn = |_, _| Ok("  ".to_string());
        let assistant = Assistant::new(backend, AssistantConfig::default());
        assert_eq!(assistant.respond("hi", &[]), assistant.config().empty_message);
    }

    #[test]
    fn backend_error_uses_error_message() {
        let backend: GenFn = |_, _| Err(anyhow::anyhow!("401 unauthorized"));
        let mut config = AssistantConfig::default();
        config.error_message = "오류".to_string();
        let assistant = Assistant::new(backend, config);
        assert_eq!(assistant.respond("hi", &["x"]), "오류");
    }
}
