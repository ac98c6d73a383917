use crate::host::InstanceId;

/// Default number of joystick and gamepad slots.
pub const MAX_CONTROLLERS: usize = 4;

/// An opened controller as tracked in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerHandle {
    pub instance: InstanceId,
}

/// Fixed-capacity table giving connected controllers a stable slot index.
///
/// A slot stays taken for as long as its device is connected and is only
/// released by an explicit [ControllerSlots::take].
#[derive(Debug, Clone)]
pub struct ControllerSlots {
    slots: Vec<Option<ControllerHandle>>,
}

impl ControllerSlots {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn is_free(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Stores `handle` at `index`. Returns false if the slot is out of range or taken.
    pub fn insert_at(&mut self, index: usize, handle: ControllerHandle) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(handle);
                true
            }
            _ => false,
        }
    }

    pub fn find(&self, instance: InstanceId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(handle) if handle.instance == instance))
    }

    pub fn take(&mut self, index: usize) -> Option<ControllerHandle> {
        self.slots.get_mut(index)?.take()
    }

    pub fn count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Empties every slot, yielding the handles that were stored.
    pub fn drain(&mut self) -> impl Iterator<Item = ControllerHandle> + '_ {
        self.slots.iter_mut().filter_map(Option::take)
    }
}
