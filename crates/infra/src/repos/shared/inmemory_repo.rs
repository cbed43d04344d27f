use std::sync::{Mutex, MutexGuard};
use study_api_domain::{Entity, ID};

/// Useful functions for creating inmemory repositories
///
/// Every function holds the lock for the whole operation, so a
/// read-modify-write never interleaves with another writer.

fn lock<T>(collection: &Mutex<Vec<T>>) -> anyhow::Result<MutexGuard<'_, Vec<T>>> {
    collection
        .lock()
        .map_err(|_| anyhow::anyhow!("In memory collection lock was poisoned"))
}

/// Creates the value with `create` and appends it while holding the lock
pub fn insert_with<T: Clone, F: FnOnce() -> T>(
    collection: &Mutex<Vec<T>>,
    create: F,
) -> anyhow::Result<T> {
    let mut collection = lock(collection)?;
    let val = create();
    collection.push(val.clone());
    Ok(val)
}

pub fn find<T: Clone + Entity>(
    val_id: &ID,
    collection: &Mutex<Vec<T>>,
) -> anyhow::Result<Option<T>> {
    let collection = lock(collection)?;
    Ok(collection.iter().find(|val| val.id() == *val_id).cloned())
}

pub fn find_all<T: Clone>(collection: &Mutex<Vec<T>>) -> anyhow::Result<Vec<T>> {
    let collection = lock(collection)?;
    Ok(collection.clone())
}

pub fn update<T: Clone + Entity, U: FnOnce(&mut T)>(
    val_id: &ID,
    collection: &Mutex<Vec<T>>,
    update: U,
) -> anyhow::Result<Option<T>> {
    let mut collection = lock(collection)?;
    match collection.iter_mut().find(|val| val.id() == *val_id) {
        Some(val) => {
            update(val);
            Ok(Some(val.clone()))
        }
        None => Ok(None),
    }
}

pub fn delete<T: Clone + Entity>(
    val_id: &ID,
    collection: &Mutex<Vec<T>>,
) -> anyhow::Result<Option<T>> {
    let mut collection = lock(collection)?;
    match collection.iter().position(|val| val.id() == *val_id) {
        Some(index) => Ok(Some(collection.remove(index))),
        None => Ok(None),
    }
}
