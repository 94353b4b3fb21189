//! Share action with capability fallbacks.
//!
//! Sharing tries an ordered chain of [`ShareStrategy`] values. Each one
//! either handles the request or falls through to the next:
//!
//! 1. [`NativeShare`]: the platform share sheet. Failures and user
//!    cancellation end the chain silently.
//! 2. [`ClipboardCopy`]: copy the URL and confirm with an alert. Falls
//!    through when the clipboard is unavailable or rejects the write.
//! 3. [`ManualPrompt`]: a prompt pre-filled with the URL.
//!
//! Platform calls go through [`ShareHost`] so the chain can be exercised
//! with a fake host.

use async_trait::async_trait;

use crate::{config::Messages, error::Result};

/// What is being shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    /// Document title.
    pub title: String,
    /// Full page URL, shared and copied verbatim.
    pub url: String,
}

impl SharePayload {
    /// Create a payload from a title and URL.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// How a share request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share sheet completed.
    Shared,
    /// The native share sheet was cancelled or failed.
    Dismissed,
    /// The URL was copied to the clipboard.
    Copied,
    /// The user was shown the URL in a prompt.
    Prompted,
    /// No strategy handled the request.
    Unhandled,
}

/// Result of a single strategy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareStep {
    /// The strategy ended the request.
    Handled(ShareOutcome),
    /// The strategy could not act; try the next one.
    FallThrough,
}

/// Platform capabilities used by the share strategies.
#[async_trait(?Send)]
pub trait ShareHost {
    /// Whether a native share capability exists.
    fn can_share_natively(&self) -> bool;

    /// Open the native share sheet.
    async fn share_natively(&self, payload: &SharePayload) -> Result<()>;

    /// Write `text` to the clipboard.
    async fn write_clipboard(&self, text: &str) -> Result<()>;

    /// Show a blocking notice.
    fn alert(&self, message: &str);

    /// Show a blocking prompt pre-filled with `default`.
    fn prompt(&self, message: &str, default: &str);
}

/// One link in the share chain.
#[async_trait(?Send)]
pub trait ShareStrategy {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Try to handle the request.
    async fn attempt(&self, host: &dyn ShareHost, payload: &SharePayload) -> ShareStep;
}

/// Native share sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeShare;

#[async_trait(?Send)]
impl ShareStrategy for NativeShare {
    fn name(&self) -> &'static str {
        "native"
    }

    async fn attempt(&self, host: &dyn ShareHost, payload: &SharePayload) -> ShareStep {
        if !host.can_share_natively() {
            return ShareStep::FallThrough;
        }

        match host.share_natively(payload).await {
            Ok(()) => ShareStep::Handled(ShareOutcome::Shared),
            Err(err) => {
                log::debug!("native share dismissed: {err}");
                ShareStep::Handled(ShareOutcome::Dismissed)
            }
        }
    }
}

/// Clipboard copy with a confirmation alert.
#[derive(Debug, Clone)]
pub struct ClipboardCopy {
    confirmation: String,
}

impl ClipboardCopy {
    /// Create the strategy with the alert text shown after a copy.
    pub fn new(confirmation: impl Into<String>) -> Self {
        Self {
            confirmation: confirmation.into(),
        }
    }
}

#[async_trait(?Send)]
impl ShareStrategy for ClipboardCopy {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    async fn attempt(&self, host: &dyn ShareHost, payload: &SharePayload) -> ShareStep {
        match host.write_clipboard(&payload.url).await {
            Ok(()) => {
                host.alert(&self.confirmation);
                ShareStep::Handled(ShareOutcome::Copied)
            }
            Err(err) => {
                log::debug!("clipboard copy failed: {err}");
                ShareStep::FallThrough
            }
        }
    }
}

/// Manual-copy prompt.
#[derive(Debug, Clone)]
pub struct ManualPrompt {
    message: String,
}

impl ManualPrompt {
    /// Create the strategy with the prompt message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait(?Send)]
impl ShareStrategy for ManualPrompt {
    fn name(&self) -> &'static str {
        "prompt"
    }

    async fn attempt(&self, host: &dyn ShareHost, payload: &SharePayload) -> ShareStep {
        host.prompt(&self.message, &payload.url);
        ShareStep::Handled(ShareOutcome::Prompted)
    }
}

/// Ordered list of share strategies.
#[derive(Default)]
pub struct ShareChain {
    strategies: Vec<Box<dyn ShareStrategy>>,
}

impl ShareChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Native share, then clipboard, then manual prompt.
    pub fn standard(messages: &Messages) -> Self {
        Self::new()
            .with(NativeShare)
            .with(ClipboardCopy::new(&messages.share_copied))
            .with(ManualPrompt::new(&messages.share_prompt))
    }

    /// Append a strategy.
    pub fn with(mut self, strategy: impl ShareStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Number of strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the chain has no strategies.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Run the strategies in order until one handles the request.
    pub async fn run(&self, host: &dyn ShareHost, payload: &SharePayload) -> ShareOutcome {
        for strategy in &self.strategies {
            if let ShareStep::Handled(outcome) = strategy.attempt(host, payload).await {
                log::debug!("share handled by {} strategy: {outcome:?}", strategy.name());
                return outcome;
            }
        }
        ShareOutcome::Unhandled
    }
}
