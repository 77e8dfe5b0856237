use crate::domain::model::{FieldId, Page, SubmitState, SummarySlot};
use crate::domain::ports::FormView;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

/// What a page would currently display.
#[derive(Debug, Clone, Default)]
pub struct ViewSnapshot {
    pub fields: HashMap<FieldId, String>,
    pub errors: BTreeMap<FieldId, String>,
    pub visible_step: Option<usize>,
    pub progress: Option<usize>,
    pub texts: HashMap<SummarySlot, String>,
    pub scroll_to_top_count: usize,
    pub navigations: Vec<Page>,
    pub submit_state: SubmitState,
    pub confirmation_shown: bool,
}

/// Headless [`FormView`] that records every call, for tests and scenario replays.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    state: Arc<Mutex<ViewSnapshot>>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Types `value` into `field` the way a user would, without firing handlers.
    pub fn fill(&self, field: FieldId, value: &str) -> &Self {
        self.lock().fields.insert(field, value.to_string());
        self
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.lock().clone()
    }

    pub fn error(&self, field: FieldId) -> Option<String> {
        self.lock().errors.get(&field).cloned()
    }

    pub fn text(&self, slot: SummarySlot) -> Option<String> {
        self.lock().texts.get(&slot).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, ViewSnapshot> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FormView for MemoryView {
    fn field_value(&self, field: FieldId) -> String {
        self.lock().fields.get(&field).cloned().unwrap_or_default()
    }

    fn set_field_value(&self, field: FieldId, value: &str) {
        self.lock().fields.insert(field, value.to_string());
    }

    fn set_field_error(&self, field: FieldId, message: Option<&str>) {
        let mut state = self.lock();
        match message {
            Some(message) => {
                state.errors.insert(field, message.to_string());
            }
            None => {
                state.errors.remove(&field);
            }
        }
    }

    fn set_step_visible(&self, step: usize) {
        self.lock().visible_step = Some(step);
    }

    fn set_progress(&self, step: usize) {
        self.lock().progress = Some(step);
    }

    fn set_text(&self, slot: SummarySlot, text: &str) {
        self.lock().texts.insert(slot, text.to_string());
    }

    fn scroll_to_top(&self) {
        self.lock().scroll_to_top_count += 1;
    }

    fn navigate(&self, page: Page) {
        self.lock().navigations.push(page);
    }

    fn set_submit_state(&self, state: SubmitState) {
        self.lock().submit_state = state;
    }

    fn show_confirmation(&self) {
        self.lock().confirmation_shown = true;
    }
}
