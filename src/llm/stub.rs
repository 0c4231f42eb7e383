use crate::llm::traits::TextGenerator;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Behavior {
    /// Same answer for every prompt.
    Fixed(String),
    /// Answers consumed in call order; the last one repeats once drained.
    Scripted(Mutex<VecDeque<Result<String, String>>>),
}

/// Deterministic in-process text generator for tests and credential-free
/// runs.
pub struct StubTextGenerator {
    behavior: Behavior,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubTextGenerator {
    pub fn fixed(text: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Fixed(text.into()))
    }

    /// Every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::scripted(vec![Err(message.into())])
    }

    pub fn scripted(responses: Vec<Result<String, String>>) -> Self {
        Self::with_behavior(Behavior::Scripted(Mutex::new(responses.into())))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }

    fn next_response(&self) -> Result<String, String> {
        match &self.behavior {
            Behavior::Fixed(text) => Ok(text.clone()),
            Behavior::Scripted(queue) => {
                let Ok(mut queue) = queue.lock() else {
                    return Err("stub script poisoned".to_string());
                };
                if queue.len() > 1 {
                    queue
                        .pop_front()
                        .unwrap_or_else(|| Err("stub script exhausted".to_string()))
                } else {
                    queue
                        .front()
                        .cloned()
                        .unwrap_or_else(|| Err("stub script exhausted".to_string()))
                }
            }
        }
    }
}

impl Default for StubTextGenerator {
    fn default() -> Self {
        Self::fixed("（スタブ応答）今日も一日お疲れさまでした🔥")
    }
}

impl TextGenerator for StubTextGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut prompts) = self.prompts.lock() {
                prompts.push(prompt.to_string());
            }
            let text = self.next_response().map_err(anyhow::Error::msg)?;
            if text.trim().is_empty() {
                anyhow::bail!("no content generated");
            }
            Ok(text)
        })
    }
}
