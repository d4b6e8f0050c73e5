// Proveedor guionizado para tests: respuestas fijas + contadores de llamadas

use std::cell::{Cell, RefCell};

use super::{LocationProvider, ProviderError};
use crate::models::{AccuracyTier, Coordinate, PermissionStatus};

pub struct ScriptedProvider {
    pub status: RefCell<Result<PermissionStatus, ProviderError>>,
    pub prompt_answer: RefCell<Result<PermissionStatus, ProviderError>>,
    pub position: RefCell<Result<Coordinate, ProviderError>>,
    pub status_calls: Cell<u32>,
    pub prompt_calls: Cell<u32>,
    pub position_calls: Cell<u32>,
    pub last_accuracy: Cell<Option<AccuracyTier>>,
}

impl ScriptedProvider {
    pub fn new(status: PermissionStatus, position: Coordinate) -> Self {
        Self {
            status: RefCell::new(Ok(status)),
            prompt_answer: RefCell::new(Ok(status)),
            position: RefCell::new(Ok(position)),
            status_calls: Cell::new(0),
            prompt_calls: Cell::new(0),
            position_calls: Cell::new(0),
            last_accuracy: Cell::new(None),
        }
    }

    pub fn granted_at(latitude: f64, longitude: f64) -> Self {
        Self::new(PermissionStatus::Granted, Coordinate::new(latitude, longitude))
    }

    pub fn set_status(&self, status: Result<PermissionStatus, ProviderError>) {
        *self.status.borrow_mut() = status;
    }

    pub fn set_prompt_answer(&self, answer: Result<PermissionStatus, ProviderError>) {
        *self.prompt_answer.borrow_mut() = answer;
    }

    pub fn set_position(&self, position: Result<Coordinate, ProviderError>) {
        *self.position.borrow_mut() = position;
    }
}

impl LocationProvider for ScriptedProvider {
    async fn permission_status(&self) -> Result<PermissionStatus, ProviderError> {
        self.status_calls.set(self.status_calls.get() + 1);
        self.status.borrow().clone()
    }

    async fn request_permission(&self) -> Result<PermissionStatus, ProviderError> {
        self.prompt_calls.set(self.prompt_calls.get() + 1);
        self.prompt_answer.borrow().clone()
    }

    async fn current_position(&self, accuracy: AccuracyTier) -> Result<Coordinate, ProviderError> {
        self.position_calls.set(self.position_calls.get() + 1);
        self.last_accuracy.set(Some(accuracy));
        self.position.borrow().clone()
    }
}
