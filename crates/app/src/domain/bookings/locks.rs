//! Per-room reservation guards.

use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::rooms::records::RoomUuid;

/// Serializes availability checks and inserts for the same room within this process.
#[derive(Debug, Default)]
pub(crate) struct RoomLocks {
    rooms: Mutex<FxHashMap<RoomUuid, Arc<AsyncMutex<()>>>>,
}

impl RoomLocks {
    /// Wait for exclusive access to `room`. Released when the guard drops.
    pub(crate) async fn lock(&self, room: RoomUuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut rooms = self.rooms.lock().unwrap_or_else(PoisonError::into_inner);

            // Entries nobody holds or waits on can go.
            rooms.retain(|_, lock| Arc::strong_count(lock) > 1);

            Arc::clone(rooms.entry(room).or_default())
        };

        lock.lock_owned().await
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.rooms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::*;

    #[tokio::test]
    async fn same_room_is_exclusive() {
        let locks = RoomLocks::default();
        let room = RoomUuid::new();

        let guard = locks.lock(room).await;

        let second = timeout(Duration::from_millis(20), locks.lock(room)).await;

        assert!(second.is_err(), "second lock should wait for the first");

        drop(guard);

        let third = timeout(Duration::from_millis(20), locks.lock(room)).await;

        assert!(third.is_ok(), "lock should be free once released");
    }

    #[tokio::test]
    async fn different_rooms_do_not_block() {
        let locks = RoomLocks::default();

        let _first = locks.lock(RoomUuid::new()).await;
        let second = timeout(Duration::from_millis(20), locks.lock(RoomUuid::new())).await;

        assert!(second.is_ok(), "other rooms should not wait");
    }

    #[tokio::test]
    async fn released_rooms_are_forgotten() {
        let locks = RoomLocks::default();

        drop(locks.lock(RoomUuid::new()).await);
        drop(locks.lock(RoomUuid::new()).await);

        assert_eq!(locks.len(), 1);
    }
}
