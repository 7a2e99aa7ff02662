//! Wallet event subscriptions.
//!
//! Account and chain changes are published on a broadcast hub. Consumers
//! hold a [`Subscription`] and call [`Subscription::unsubscribe`] on teardown.

use alloy_primitives::Address;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;

/// Something changed on the wallet side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// The exposed account list changed. Empty means disconnected.
    AccountsChanged(Vec<Address>),
    /// The wallet switched to another chain.
    ChainChanged(u64),
}

/// Broadcast hub for [`WalletEvent`]s.
#[derive(Debug, Clone)]
pub struct WalletEvents {
    sender: broadcast::Sender<WalletEvent>,
}

impl Default for WalletEvents {
    fn default() -> Self {
        Self::new(16)
    }
}

impl WalletEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event. Returns how many subscribers received it.
    pub fn publish(&self, event: WalletEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// A live subscription to wallet events.
#[derive(Debug)]
pub struct Subscription {
    receiver: broadcast::Receiver<WalletEvent>,
}

impl Subscription {
    /// Wait for the next event. `None` once the hub is gone.
    pub async fn next(&mut self) -> Option<WalletEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Wallet event subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Stop receiving events.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_events() {
        let hub = WalletEvents::default();
        let mut sub = hub.subscribe();

        assert_eq!(hub.publish(WalletEvent::ChainChanged(80002)), 1);
        assert_eq!(sub.next().await, Some(WalletEvent::ChainChanged(80002)));
    }

    #[tokio::test]
    async fn test_unsubscribe_detaches() {
        let hub = WalletEvents::default();
        let sub = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 1);

        sub.unsubscribe();

        assert_eq!(hub.subscriber_count(), 0);
        assert_eq!(hub.publish(WalletEvent::AccountsChanged(vec![])), 0);
    }

    #[tokio::test]
    async fn test_closed_hub_ends_subscription() {
        let hub = WalletEvents::default();
        let mut sub = hub.subscribe();
        drop(hub);

        assert_eq!(sub.next().await, None);
    }
}
