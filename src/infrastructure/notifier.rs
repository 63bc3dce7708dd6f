use crate::domain::account::AccountId;
use crate::domain::ports::Notifier;
use crate::error::NotificationError;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Delivers account notifications to the log.
///
/// Stands in for an email or push channel; it never fails.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, account_id: &AccountId, message: &str) -> Result<(), NotificationError> {
        tracing::info!(account = %account_id, "{message}");
        Ok(())
    }
}

/// A notification handed over to a downstream consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub account_id: AccountId,
    pub message: String,
}

/// Queues notifications on a bounded channel for another task to deliver.
///
/// Enqueueing never waits: a full or closed queue is reported as a delivery
/// failure.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::Sender<Notification>,
}

impl ChannelNotifier {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Notification>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn notify(&self, account_id: &AccountId, message: &str) -> Result<(), NotificationError> {
        self.sender
            .try_send(Notification {
                account_id: account_id.clone(),
                message: message.to_string(),
            })
            .map_err(|e| NotificationError::Delivery(e.to_string()))
    }
}
