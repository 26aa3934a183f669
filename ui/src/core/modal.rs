//! State for the project detail modal shared by the gallery and the modal view.

use super::platform::ScrollLock;

pub const KEY_NEXT: &str = "ArrowRight";
pub const KEY_PREVIOUS: &str = "ArrowLeft";

/// Which project the modal shows and whether it is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectModal {
    is_open: bool,
    current_index: usize,
    len: usize,
}

impl ProjectModal {
    pub fn new(len: usize) -> Self {
        Self {
            is_open: false,
            current_index: 0,
            len,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Open on the project with 1-based `project_id`. Out-of-range ids are
    /// rejected and leave the modal untouched.
    pub fn open(&mut self, project_id: usize, lock: &dyn ScrollLock) -> bool {
        if project_id == 0 || project_id > self.len {
            return false;
        }
        self.current_index = project_id - 1;
        self.is_open = true;
        lock.disable();
        true
    }

    pub fn close(&mut self, lock: &dyn ScrollLock) {
        self.is_open = false;
        lock.enable();
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.current_index < self.len - 1 {
            self.current_index += 1;
        } else {
            self.current_index = 0;
        }
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.current_index > 0 {
            self.current_index -= 1;
        } else {
            self.current_index = self.len - 1;
        }
    }

    /// Arrow-key navigation; only while open. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open {
            return false;
        }
        match key {
            KEY_NEXT => self.next(),
            KEY_PREVIOUS => self.prev(),
            _ => return false,
        }
        true
    }
}
