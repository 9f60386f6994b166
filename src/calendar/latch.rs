/// Latch that lets exactly one event through.
#[derive(Debug, Default, Clone, Copy)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// True on the first call only.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
