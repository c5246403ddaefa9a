//! In-memory audio backend for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::library::MediaRef;

use super::types::{AudioBackend, SoundHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Load(MediaRef),
    Play(u32),
    Pause(u32),
    Unload(u32),
}

#[derive(Default)]
struct Shared {
    calls: RefCell<Vec<Call>>,
    finished: Cell<bool>,
}

#[derive(Default)]
pub struct FakeBackend {
    shared: Rc<Shared>,
    next_id: Cell<u32>,
    fail: Cell<bool>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `load` calls fail.
    pub fn set_fail(&self, fail: bool) {
        self.fail.set(fail);
    }

    /// Mark every live handle as played to the end.
    pub fn finish_all(&self) {
        self.shared.finished.set(true);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.shared.calls.borrow().clone()
    }

    /// Handles loaded and not yet unloaded.
    pub fn live_handles(&self) -> usize {
        let calls = self.shared.calls.borrow();
        let loads = calls.iter().filter(|c| matches!(c, Call::Load(_))).count();
        let unloads = calls.iter().filter(|c| matches!(c, Call::Unload(_))).count();
        loads - unloads
    }
}

pub struct FakeHandle {
    id: u32,
    shared: Rc<Shared>,
}

impl AudioBackend for FakeBackend {
    type Handle = FakeHandle;

    fn load(&self, media: &MediaRef) -> Result<FakeHandle> {
        if self.fail.get() {
            return Err(Error::AssetPath(media.as_column().to_string()));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.shared.finished.set(false);
        self.shared.calls.borrow_mut().push(Call::Load(media.clone()));
        Ok(FakeHandle {
            id,
            shared: self.shared.clone(),
        })
    }
}

impl SoundHandle for FakeHandle {
    fn play(&self) {
        self.shared.calls.borrow_mut().push(Call::Play(self.id));
    }

    fn pause(&self) {
        self.shared.calls.borrow_mut().push(Call::Pause(self.id));
    }

    fn position(&self) -> Duration {
        Duration::from_secs(3)
    }

    fn is_finished(&self) -> bool {
        self.shared.finished.get()
    }

    fn unload(self) {
        self.shared.calls.borrow_mut().push(Call::Unload(self.id));
    }
}
