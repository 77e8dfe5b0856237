use crate::domain::model::{HandoffRecord, OrderDraft};
use crate::domain::ports::SessionStore;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    Absent,
    Corrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftSource {
    Stored,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDraft {
    pub draft: OrderDraft,
    pub source: DraftSource,
}

impl LoadedDraft {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, DraftSource::Fallback(_))
    }
}

/// Carries the order record from the order page to the checkout page.
pub struct OrderHandoff<S: SessionStore> {
    store: S,
    key: String,
}

impl<S: SessionStore> OrderHandoff<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn save(&self, draft: &OrderDraft) -> Result<()> {
        let json = serde_json::to_string(&HandoffRecord::from(draft))?;
        self.store.set_item(&self.key, &json)?;
        tracing::debug!(key = %self.key, plan = %draft.plan(), "Saved order handoff");
        Ok(())
    }

    /// Never fails: anything unusable becomes [`OrderDraft::default_draft`].
    pub fn load(&self) -> OrderDraft {
        self.load_detailed().draft
    }

    pub fn load_detailed(&self) -> LoadedDraft {
        let raw = match self.store.get_item(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Session storage read failed, treating order as absent: {}", e);
                None
            }
        };

        let Some(raw) = raw else {
            tracing::warn!(key = %self.key, "No order handoff found, using default draft");
            return Self::fallback(FallbackReason::Absent);
        };

        let record = match serde_json::from_str::<HandoffRecord>(&raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(key = %self.key, "Unreadable order handoff ({}), using default draft", e);
                return Self::fallback(FallbackReason::Corrupt);
            }
        };

        match OrderDraft::try_from(record) {
            Ok(draft) => LoadedDraft {
                draft,
                source: DraftSource::Stored,
            },
            Err(record) => {
                tracing::warn!(
                    plan = %record.plan,
                    price = record.price,
                    "Order handoff price does not match its plan, using default draft"
                );
                Self::fallback(FallbackReason::Corrupt)
            }
        }
    }

    /// Wipes the whole session store, not just the order key.
    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }

    fn fallback(reason: FallbackReason) -> LoadedDraft {
        LoadedDraft {
            draft: OrderDraft::default_draft(),
            source: DraftSource::Fallback(reason),
        }
    }
}
