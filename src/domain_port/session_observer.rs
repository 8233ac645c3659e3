/// Navigation hook the client fires when the session becomes unrecoverable.
/// The application routes to its login entry point; `at_login` lets the
/// client skip the signal when the application is already there.
#[async_trait::async_trait]
pub trait SessionObserver: Send + Sync {
    fn at_login(&self) -> bool;
    async fn session_invalidated(&self);
}
