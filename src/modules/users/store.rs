//! In-memory user store.
//!
//! The store exclusively owns every [`User`]. Reads share a lock; create,
//! update and delete take it exclusively, so no interleaving can produce
//! duplicate ids or a half-written entity. Nothing is persisted.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use usermgmt_core::errors::AppError;
use usermgmt_models::users::{User, UserPayload};
use uuid::Uuid;

type UserMap = HashMap<Uuid, User>;

#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<UserMap>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserMap>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::internal(anyhow!("user store lock poisoned")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserMap>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::internal(anyhow!("user store lock poisoned")))
    }

    /// All users, sorted by name then id.
    pub fn list(&self) -> Result<Vec<User>, AppError> {
        let mut users: Vec<User> = self.read()?.values().cloned().collect();
        users.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(users)
    }

    pub fn get(&self, id: Uuid) -> Result<User, AppError> {
        self.read()?
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("User with id {id} not found")))
    }

    /// Validates `candidate` and stores it under a freshly generated id.
    pub fn create(&self, candidate: UserPayload) -> Result<User, AppError> {
        candidate.ensure_valid()?;

        let mut users = self.write()?;
        let id = loop {
            let id = Uuid::new_v4();
            if !users.contains_key(&id) {
                break id;
            }
        };

        let user = User::new(id, candidate);
        users.insert(id, user.clone());
        Ok(user)
    }

    /// Replaces name and email of an existing user.
    ///
    /// An unknown id is reported before the candidate is validated.
    pub fn update(&self, id: Uuid, candidate: UserPayload) -> Result<User, AppError> {
        let mut users = self.write()?;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User with id {id} not found")))?;

        candidate.ensure_valid()?;
        user.apply(candidate);
        Ok(user.clone())
    }

    pub fn delete(&self, id: Uuid) -> Result<User, AppError> {
        self.write()?
            .remove(&id)
            .ok_or_else(|| AppError::not_found(format!("User with id {id} not found")))
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read()?.is_empty())
    }
}
