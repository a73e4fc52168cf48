//! Shared persistence plumbing for the four record collections.
//!
//! Every collection is stored as one JSON array, so all operations are a
//! read-filter-mutate-write over the full array under the store lock. The
//! typed modules wrap these helpers with per-collection sorting and patch
//! semantics, plus the simulated latency (which must happen outside the
//! lock, hence these helpers stay synchronous).

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{Error, Result};
use crate::models::{RecordId, UserId};
use crate::store::{Collection, StorePool, lock_store};

/// A record kind persisted in one of the four collections.
pub(crate) trait StoredRecord: Clone + Serialize + DeserializeOwned {
    /// Which collection the type lives in.
    const COLLECTION: Collection;

    fn id(&self) -> RecordId;
    fn user_id(&self) -> UserId;
}

impl StoredRecord for crate::models::Expense {
    const COLLECTION: Collection = Collection::Expenses;

    fn id(&self) -> RecordId {
        self.id
    }
    fn user_id(&self) -> UserId {
        self.user_id
    }
}

impl StoredRecord for crate::models::Investment {
    const COLLECTION: Collection = Collection::Investments;

    fn id(&self) -> RecordId {
        self.id
    }
    fn user_id(&self) -> UserId {
        self.user_id
    }
}

impl StoredRecord for crate::models::Goal {
    const COLLECTION: Collection = Collection::Goals;

    fn id(&self) -> RecordId {
        self.id
    }
    fn user_id(&self) -> UserId {
        self.user_id
    }
}

impl StoredRecord for crate::models::Reminder {
    const COLLECTION: Collection = Collection::Reminders;

    fn id(&self) -> RecordId {
        self.id
    }
    fn user_id(&self) -> UserId {
        self.user_id
    }
}

/// Loads the whole collection. A missing or corrupt value reads as empty.
pub(crate) fn list_all<T: StoredRecord>(pool: &StorePool) -> Vec<T> {
    lock_store(pool).get(T::COLLECTION.key()).unwrap_or_default()
}

/// Loads the collection filtered to one user's records, in stored order.
pub(crate) fn list_for_user<T: StoredRecord>(pool: &StorePool, user_id: UserId) -> Vec<T> {
    let mut records = list_all::<T>(pool);
    records.retain(|record| record.user_id() == user_id);
    records
}

/// Appends the record built by `build` under a fresh id and persists the
/// collection. Returns the stored record even if the write was dropped.
pub(crate) fn append<T, F>(pool: &StorePool, build: F) -> T
where
    T: StoredRecord,
    F: FnOnce(RecordId) -> T,
{
    let mut store = lock_store(pool);
    let mut records: Vec<T> = store.get(T::COLLECTION.key()).unwrap_or_default();
    let id = next_id(&records);
    let record = build(id);
    records.push(record.clone());
    store.set(T::COLLECTION.key(), &records);
    record
}

/// Applies `mutate` to the record matching both `id` and `user_id`, persists
/// the collection, and returns the updated record.
///
/// # Errors
/// `Error::RecordNotFound` when no record matches the pair; a wrong owner
/// and a missing id are indistinguishable.
pub(crate) fn modify<T, F>(pool: &StorePool, id: RecordId, user_id: UserId, mutate: F) -> Result<T>
where
    T: StoredRecord,
    F: FnOnce(&mut T),
{
    let mut store = lock_store(pool);
    let mut records: Vec<T> = store.get(T::COLLECTION.key()).unwrap_or_default();
    let index = records
        .iter()
        .position(|record| record.id() == id && record.user_id() == user_id)
        .ok_or_else(|| Error::RecordNotFound {
            collection: T::COLLECTION,
            id,
        })?;
    mutate(&mut records[index]);
    let updated = records[index].clone();
    store.set(T::COLLECTION.key(), &records);
    Ok(updated)
}

/// Removes the record matching both `id` and `user_id` and persists the
/// collection.
///
/// # Errors
/// `Error::RecordNotFound` under the same merged condition as [`modify`].
pub(crate) fn remove<T: StoredRecord>(
    pool: &StorePool,
    id: RecordId,
    user_id: UserId,
) -> Result<()> {
    let mut store = lock_store(pool);
    let mut records: Vec<T> = store.get(T::COLLECTION.key()).unwrap_or_default();
    let count_before = records.len();
    records.retain(|record| !(record.id() == id && record.user_id() == user_id));
    if records.len() == count_before {
        return Err(Error::RecordNotFound {
            collection: T::COLLECTION,
            id,
        });
    }
    store.set(T::COLLECTION.key(), &records);
    debug!("Removed {} {} for user {}.", T::COLLECTION, id, user_id);
    Ok(())
}

/// Next free id: one past the largest in use, starting from 1.
/// Computed under the same lock as the append, so ids never collide.
fn next_id<T: StoredRecord>(records: &[T]) -> RecordId {
    records.iter().map(StoredRecord::id).max().unwrap_or(0) + 1
}
