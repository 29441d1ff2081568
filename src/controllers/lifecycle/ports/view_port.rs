use crate::controllers::lifecycle::view_snapshot::ViewSnapshot;

/// Receives a fresh snapshot every time the lifecycle model changes in a way
/// the display must reflect.
pub trait ViewPort {
    fn refresh(&mut self, snapshot: &ViewSnapshot);
}

impl<T: ViewPort + ?Sized> ViewPort for Box<T> {
    fn refresh(&mut self, snapshot: &ViewSnapshot) {
        (**self).refresh(snapshot);
    }
}

/// Keeps the last rendered snapshot so an immediate-mode UI (or a test) can
/// read the labels back.
#[derive(Debug, Default)]
pub struct SnapshotViewPort {
    latest: Option<ViewSnapshot>,
    refresh_count: u64,
}

impl SnapshotViewPort {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&ViewSnapshot> {
        self.latest.as_ref()
    }

    #[must_use]
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }
}

impl ViewPort for SnapshotViewPort {
    fn refresh(&mut self, snapshot: &ViewSnapshot) {
        self.latest = Some(snapshot.clone());
        self.refresh_count += 1;
    }
}
