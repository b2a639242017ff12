use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, Stream};
use tokio::sync::watch;

use crate::global_constants::LOG_TAG_DEBOUNCER;

/// Coalesces rapid edits of a search field into committed queries.
///
/// The value the debouncer is created with is never committed; only later
/// edits are, and only after `quiet_period` passes without another edit.
/// Clones share the same field.
#[derive(Clone)]
pub struct QueryDebouncer {
    sender: Arc<watch::Sender<String>>,
    quiet_period: Duration,
}

impl QueryDebouncer {
    pub fn new(initial_value: impl Into<String>, quiet_period: Duration) -> Self {
        let (sender, _) = watch::channel(initial_value.into());
        Self {
            sender: Arc::new(sender),
            quiet_period,
        }
    }

    pub fn push(&self, value: impl Into<String>) {
        let value = value.into();
        let changed = self.sender.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        });

        if changed {
            log::trace!("{} Field changed, restarting quiet period", LOG_TAG_DEBOUNCER);
        }
    }

    pub fn current(&self) -> String {
        self.sender.borrow().clone()
    }

    /// Stream of committed values. It ends once every handle to this
    /// debouncer has been dropped; an edit still waiting out its quiet period
    /// at that point is discarded.
    pub fn committed_queries(&self) -> impl Stream<Item = String> + Send + 'static {
        let receiver = self.sender.subscribe();
        let quiet_period = self.quiet_period;

        stream::unfold(receiver, move |mut receiver| async move {
            let committed = next_committed_value(&mut receiver, quiet_period).await?;
            Some((committed, receiver))
        })
    }
}

async fn next_committed_value(
    receiver: &mut watch::Receiver<String>,
    quiet_period: Duration,
) -> Option<String> {
    receiver.changed().await.ok()?;

    loop {
        tokio::select! {
            _ = tokio::time::sleep(quiet_period) => {
                let committed = receiver.borrow_and_update().clone();
                log::debug!("{} Committing {:?}", LOG_TAG_DEBOUNCER, committed);
                return Some(committed);
            }
            changed = receiver.changed() => {
                changed.ok()?;
            }
        }
    }
}
