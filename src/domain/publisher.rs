use std::sync::mpsc::{self, Receiver, Sender};

pub type SubscriberCallback<T> = Box<dyn FnMut(&T)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Subscriber<T> {
    Callback(SubscriberCallback<T>),
    Channel(Sender<T>),
}

/// Synchronous publish/subscribe for committed selections.
///
/// Subscribers are notified in registration order. `publish` takes the
/// payload by value and needs `&mut self`, so a subscriber can never reach
/// back into the publisher (or the engine owning it) while being notified.
pub struct Publisher<T> {
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T: Clone> Publisher<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        self.register(Subscriber::Callback(Box::new(callback)))
    }

    /// Returns a receiver that gets a copy of every published value until it
    /// is dropped.
    pub fn subscribe_channel(&mut self) -> Receiver<T> {
        let (sender, receiver) = mpsc::channel();
        self.register(Subscriber::Channel(sender));
        receiver
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscription, _)| *subscription != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn publish(&mut self, value: T) {
        // Channels whose receiver is gone are pruned here.
        self.subscribers.retain_mut(|(_, subscriber)| match subscriber {
            Subscriber::Callback(callback) => {
                callback(&value);
                true
            }
            Subscriber::Channel(sender) => sender.send(value.clone()).is_ok(),
        });
    }

    fn register(&mut self, subscriber: Subscriber<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }
}

impl<T: Clone> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
