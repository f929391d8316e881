//! Single-flight refresh coordination.
//!
//! At most one refresh call is in flight at any time. Requests that hit a
//! 401 while one is outstanding park on a oneshot receiver and are woken
//! in registration order once the refresh resolves.

use tokio::sync::{Mutex, oneshot};

/// Marker for a refresh that did not produce a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RefreshFailed;

/// Outcome delivered to parked waiters.
pub(crate) type RefreshOutcome = Result<(), RefreshFailed>;

/// Role assigned to a request entering the refresh path.
pub(crate) enum RefreshTicket {
    /// This request must perform the refresh call and publish the outcome.
    Leader,
    /// A refresh is already in flight; await the published outcome.
    Follower(oneshot::Receiver<RefreshOutcome>),
}

#[derive(Default)]
struct RefreshState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
}

/// Coordinates concurrent 401 handling.
#[derive(Default)]
pub(crate) struct RefreshCoordinator {
    state: Mutex<RefreshState>,
}

impl RefreshCoordinator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Joins the refresh path.
    ///
    /// The check of the in-flight flag and its set happen under a single
    /// lock acquisition with no suspension in between, so exactly one
    /// caller becomes the leader per refresh cycle.
    pub(crate) async fn begin(&self) -> RefreshTicket {
        let mut state = self.state.lock().await;
        if state.in_flight {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            RefreshTicket::Follower(rx)
        } else {
            state.in_flight = true;
            RefreshTicket::Leader
        }
    }

    /// Publishes the outcome and releases the in-flight flag.
    ///
    /// Called exactly once per cycle by the leader, on success and failure
    /// alike. Waiters are notified in registration order; a waiter that
    /// gave up (dropped receiver) is skipped silently.
    pub(crate) async fn complete(&self, outcome: RefreshOutcome) {
        let waiters = {
            let mut state = self.state.lock().await;
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };
        for waiter in waiters {
            let _ = waiter.send(outcome);
        }
    }

    /// Number of parked waiters; used by tests to sequence registration.
    #[cfg(test)]
    pub(crate) async fn waiter_count(&self) -> usize {
        self.state.lock().await.waiters.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_first_caller_is_leader() {
        let coordinator = RefreshCoordinator::new();
        assert!(matches!(coordinator.begin().await, RefreshTicket::Leader));
    }

    #[tokio::test]
    async fn test_concurrent_callers_become_followers() {
        let coordinator = RefreshCoordinator::new();
        let RefreshTicket::Leader = coordinator.begin().await else {
            panic!("expected leader");
        };
        for _ in 0..3 {
            assert!(matches!(
                coordinator.begin().await,
                RefreshTicket::Follower(_)
            ));
        }
        assert_eq!(coordinator.waiter_count().await, 3);
    }

    #[tokio::test]
    async fn test_complete_releases_the_flag() {
        let coordinator = RefreshCoordinator::new();
        let RefreshTicket::Leader = coordinator.begin().await else {
            panic!("expected leader");
        };
        coordinator.complete(Ok(())).await;
        assert!(matches!(coordinator.begin().await, RefreshTicket::Leader));
    }

    #[tokio::test]
    async fn test_waiters_notified_in_registration_order() {
        let coordinator = Arc::new(RefreshCoordinator::new());
        let RefreshTicket::Leader = coordinator.begin().await else {
            panic!("expected leader");
        };

        let order = Arc::new(Mutex::new(Vec::new()));
        let mut handles = Vec::new();
        for index in 0..5 {
            let RefreshTicket::Follower(rx) = coordinator.begin().await else {
                panic!("expected follower");
            };
            let order = Arc::clone(&order);
            handles.push(tokio::spawn(async move {
                rx.await.unwrap().unwrap();
                order.lock().await.push(index);
            }));
            // Let the task park on its receiver before the next registers.
            tokio::task::yield_now().await;
        }

        coordinator.complete(Ok(())).await;
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(*order.lock().await, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_failure_delivered_to_all_waiters() {
        let coordinator = RefreshCoordinator::new();
        let RefreshTicket::Leader = coordinator.begin().await else {
            panic!("expected leader");
        };

        let mut receivers = Vec::new();
        for _ in 0..3 {
            let RefreshTicket::Follower(rx) = coordinator.begin().await else {
                panic!("expected follower");
            };
            receivers.push(rx);
        }

        coordinator.complete(Err(RefreshFailed)).await;
        for rx in receivers {
            assert_eq!(rx.await.unwrap(), Err(RefreshFailed));
        }
    }

    #[tokio::test]
    async fn test_dropped_waiter_does_not_block_the_rest() {
        let coordinator = RefreshCoordinator::new();
        let RefreshTicket::Leader = coordinator.begin().await else {
            panic!("expected leader");
        };

        let RefreshTicket::Follower(dropped) = coordinator.begin().await else {
            panic!("expected follower");
        };
        let RefreshTicket::Follower(kept) = coordinator.begin().await else {
            panic!("expected follower");
        };
        drop(dropped);

        coordinator.complete(Ok(())).await;
        assert_eq!(kept.await.unwrap(), Ok(()));
    }
}
