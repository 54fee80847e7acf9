use std::cell::RefCell;
use std::rc::Rc;

/// Authentication state
#[derive(Clone)]
pub struct AuthState {
    pub is_logged_in: Rc<RefCell<bool>>,
    pub uuid: Rc<RefCell<Option<String>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            is_logged_in: Rc::new(RefCell::new(false)),
            uuid: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_logged_in(&self, logged_in: bool) {
        *self.is_logged_in.borrow_mut() = logged_in;
    }

    pub fn get_logged_in(&self) -> bool {
        *self.is_logged_in.borrow()
    }

    pub fn set_uuid(&self, uuid: Option<String>) {
        *self.uuid.borrow_mut() = uuid;
    }

    pub fn get_uuid(&self) -> Option<String> {
        self.uuid.borrow().clone()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
