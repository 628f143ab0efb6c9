use futures::stream::BoxStream;
use futures::StreamExt;
use std::any::TypeId;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// A long-lived source of messages, such as terminal input.
///
/// Returned from [`Model::subscriptions`](crate::Model::subscriptions) after
/// every update. The runtime keeps one running task per [`SubscriptionId`]:
/// a subscription whose id is already running is discarded, so whatever it
/// captured is never seen. Keep model state out of subscriptions and branch
/// on it in `update` instead.
pub struct Subscription<Msg> {
    pub(crate) id: SubscriptionId,
    start: Box<dyn FnOnce(mpsc::UnboundedSender<Msg>) -> AbortHandle + Send>,
}

/// Identity of a subscription across updates, taken from a marker type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(TypeId);

impl SubscriptionId {
    /// The id for marker type `T`.
    pub fn of<T: 'static>() -> Self {
        Self(TypeId::of::<T>())
    }
}

impl<Msg: Send + 'static> Subscription<Msg> {
    /// A subscription that builds its stream once it starts, inside its own
    /// task, and forwards every item until the program stops listening.
    pub fn lazy<F>(id: SubscriptionId, make_stream: F) -> Self
    where
        F: FnOnce() -> BoxStream<'static, Msg> + Send + 'static,
    {
        Subscription {
            id,
            start: Box::new(move |tx| {
                tokio::spawn(async move {
                    let mut stream = make_stream();
                    while let Some(msg) = stream.next().await {
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                })
                .abort_handle()
            }),
        }
    }

    /// The identity used to match it against running subscriptions.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

/// Running subscription tasks, keyed by id.
pub(crate) struct SubscriptionManager<Msg> {
    running: HashMap<SubscriptionId, AbortHandle>,
    msg_tx: mpsc::UnboundedSender<Msg>,
}

impl<Msg: Send + 'static> SubscriptionManager<Msg> {
    pub fn new(msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            running: HashMap::new(),
            msg_tx,
        }
    }

    /// Stop tasks that are no longer declared and start the new ones.
    pub fn reconcile(&mut self, declared: Vec<Subscription<Msg>>) {
        self.running.retain(|id, task| {
            let keep = declared.iter().any(|sub| sub.id == *id);
            if !keep {
                tracing::debug!(?id, "subscription stopped");
                task.abort();
            }
            keep
        });

        for sub in declared {
            if let std::collections::hash_map::Entry::Vacant(slot) = self.running.entry(sub.id) {
                tracing::debug!(id = ?sub.id, "subscription started");
                slot.insert((sub.start)(self.msg_tx.clone()));
            }
        }
    }

    /// Abort every running task.
    pub fn shutdown(&mut self) {
        for (_, task) in self.running.drain() {
            task.abort();
        }
    }

    #[cfg(test)]
    pub fn running(&self) -> usize {
        self.running.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Keys;
    struct Clicks;

    fn idle<T: 'static>() -> Subscription<u8> {
        Subscription::lazy(SubscriptionId::of::<T>(), || futures::stream::pending().boxed())
    }

    #[test]
    fn ids_follow_marker_type() {
        assert_eq!(SubscriptionId::of::<Keys>(), SubscriptionId::of::<Keys>());
        assert_ne!(SubscriptionId::of::<Keys>(), SubscriptionId::of::<Clicks>());
        assert_eq!(idle::<Clicks>().id(), SubscriptionId::of::<Clicks>());
    }

    #[tokio::test]
    async fn reconcile_starts_and_stops() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![idle::<Keys>(), idle::<Clicks>()]);
        assert_eq!(manager.running(), 2);

        manager.reconcile(vec![idle::<Clicks>()]);
        assert_eq!(manager.running(), 1);

        manager.shutdown();
        assert_eq!(manager.running(), 0);
    }

    #[tokio::test]
    async fn running_subscription_is_not_replaced() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut manager = SubscriptionManager::new(tx);
        let first = Subscription::lazy(SubscriptionId::of::<Keys>(), || {
            futures::stream::iter([1u8]).boxed()
        });
        let second = Subscription::lazy(SubscriptionId::of::<Keys>(), || {
            futures::stream::iter([2u8]).boxed()
        });

        manager.reconcile(vec![first]);
        manager.reconcile(vec![second]);
        assert_eq!(manager.running(), 1);
        assert_eq!(rx.recv().await, Some(1));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn stream_is_built_inside_the_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut manager = SubscriptionManager::new(tx);
        let (built_tx, built_rx) = std::sync::mpsc::channel();
        let sub = Subscription::lazy(SubscriptionId::of::<Keys>(), move || {
            let _ = built_tx.send(());
            futures::stream::iter([7u8, 8]).boxed()
        });
        assert!(built_rx.try_recv().is_err());

        manager.reconcile(vec![sub]);
        assert_eq!(rx.recv().await, Some(7));
        assert_eq!(rx.recv().await, Some(8));
        assert!(built_rx.try_recv().is_ok());
    }
}
