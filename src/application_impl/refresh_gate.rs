use crate::application_port::*;
use crate::domain_model::*;
use std::sync::Mutex;
use tokio::sync::oneshot;

type WaiterTx = oneshot::Sender<Result<AccessToken, RefreshError>>;
pub type WaiterRx = oneshot::Receiver<Result<AccessToken, RefreshError>>;

/// Outcome of asking the gate for permission to refresh.
pub enum Admission {
    /// No refresh is in flight; the caller must perform it and then call
    /// [`RefreshGate::complete`] exactly once.
    Leader,
    /// A refresh is already in flight; await the receiver for its outcome.
    Waiter(WaiterRx),
}

struct GateState {
    refreshing: bool,
    waiters: Vec<WaiterTx>,
}

/// Single-flight guard around the credential refresh. Owns the
/// `refreshing` flag and the waiter queue; the mutex makes the
/// check-and-enqueue atomic and is never held across an await.
pub struct RefreshGate {
    state: Mutex<GateState>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GateState {
                refreshing: false,
                waiters: Vec::new(),
            }),
        }
    }

    pub fn admit(&self) -> Admission {
        let mut state = self.state.lock().expect("refresh gate poisoned");
        if state.refreshing {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            Admission::Waiter(rx)
        } else {
            state.refreshing = true;
            Admission::Leader
        }
    }

    /// Ends the in-flight refresh and drains every waiter, in enqueue
    /// order, with a copy of the outcome.
    pub fn complete(&self, result: Result<AccessToken, RefreshError>) {
        let waiters = {
            let mut state = self.state.lock().expect("refresh gate poisoned");
            state.refreshing = false;
            std::mem::take(&mut state.waiters)
        };
        for waiter in waiters {
            // A waiter whose request future was dropped is gone; fine.
            let _ = waiter.send(result.clone());
        }
    }
}

impl Default for RefreshGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_caller_leads_followers_wait() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.admit(), Admission::Leader));
        assert!(matches!(gate.admit(), Admission::Waiter(_)));
        assert!(matches!(gate.admit(), Admission::Waiter(_)));
    }

    #[tokio::test]
    async fn complete_drains_all_waiters_and_reopens_the_gate() {
        let gate = RefreshGate::new();
        let Admission::Leader = gate.admit() else {
            panic!("expected leader");
        };
        let mut receivers = Vec::new();
        for _ in 0..3 {
            match gate.admit() {
                Admission::Waiter(rx) => receivers.push(rx),
                Admission::Leader => panic!("second leader while refreshing"),
            }
        }

        gate.complete(Ok(AccessToken("t2".into())));
        for rx in receivers {
            let token = rx.await.expect("waiter dropped").expect("refresh ok");
            assert_eq!(token.0, "t2");
        }

        // Gate is open again after completion.
        assert!(matches!(gate.admit(), Admission::Leader));
    }

    #[tokio::test]
    async fn failure_fans_out_to_every_waiter() {
        let gate = RefreshGate::new();
        let Admission::Leader = gate.admit() else {
            panic!("expected leader");
        };
        let Admission::Waiter(rx_a) = gate.admit() else {
            panic!("expected waiter");
        };
        let Admission::Waiter(rx_b) = gate.admit() else {
            panic!("expected waiter");
        };

        gate.complete(Err(RefreshError::Rejected { status: 400 }));
        for rx in [rx_a, rx_b] {
            let err = rx.await.expect("waiter dropped").unwrap_err();
            assert!(matches!(err, RefreshError::Rejected { status: 400 }));
        }
    }

    #[tokio::test]
    async fn dropped_waiter_does_not_poison_completion() {
        let gate = RefreshGate::new();
        let Admission::Leader = gate.admit() else {
            panic!("expected leader");
        };
        let Admission::Waiter(rx) = gate.admit() else {
            panic!("expected waiter");
        };
        drop(rx);
        gate.complete(Ok(AccessToken("t2".into())));
        assert!(matches!(gate.admit(), Admission::Leader));
    }
}
