//! Application state.

use crate::commands::CommandError;
use crate::controller::SessionController;
use crate::db::SqliteRepository;
use std::sync::{Mutex, MutexGuard};

pub type Controller = SessionController<SqliteRepository>;

/// Global application state.
pub struct AppState {
    controller: Mutex<Controller>,
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: Mutex::new(controller),
        }
    }

    /// Lock the controller for one command.
    pub fn controller(&self) -> Result<MutexGuard<'_, Controller>, CommandError> {
        self.controller.lock().map_err(|_| CommandError {
            message: "controller lock poisoned".to_string(),
        })
    }
}
