use agenda_core::SessionStore;
use agenda_domain::{Result, SessionUser};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Process-local session, lost on restart
#[derive(Default)]
pub struct InMemorySessionStore {
    user: Mutex<Option<SessionUser>>,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<SessionUser>> {
        Ok(self.user.lock().clone())
    }

    async fn save(&self, user: &SessionUser) -> Result<()> {
        *self.user.lock() = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.user.lock().take();
        Ok(())
    }
}
