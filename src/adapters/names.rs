use crate::core::{ReadRepository, WriteRepository};
use std::sync::Mutex;

const CITIES: [&str; 3] = ["São Paulo", "Rio de Janeiro", "Fortaleza"];

/// Fixed, read-only list of cities.
#[derive(Debug, Clone, Copy, Default)]
pub struct CityRepository;

impl ReadRepository for CityRepository {
    fn list(&self) -> Vec<String> {
        CITIES.iter().map(|c| c.to_string()).collect()
    }
}

#[derive(Debug, Default)]
pub struct UserRepository {
    users: Mutex<Vec<String>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_users<T>(&self, f: impl FnOnce(&mut Vec<String>) -> T) -> T {
        match self.users.lock() {
            Ok(mut users) => f(&mut *users),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }
}

impl ReadRepository for UserRepository {
    fn list(&self) -> Vec<String> {
        self.with_users(|users| users.clone())
    }
}

impl WriteRepository for UserRepository {
    fn save(&self, name: &str) -> String {
        self.with_users(|users| users.push(name.to_string()));
        format!("User {} saved!", name)
    }

    /// Unknown `old_name`s are not an error; `new_name` is added regardless.
    fn update(&self, old_name: &str, new_name: &str) -> String {
        self.with_users(|users| {
            if let Some(pos) = users.iter().position(|u| u == old_name) {
                users.remove(pos);
            }
            users.push(new_name.to_string());
        });
        format!("User with old name {} updated to {}!", old_name, new_name)
    }
}
