use pharmstock_core::{DomainError, DomainResult};
use pharmstock_inventory::{Medicine, MedicineDraft, MedicineStore};

/// The edit session: create-vs-edit intent plus the record it was opened on.
///
/// At most one session is open at a time; opening a new one implicitly
/// cancels the previous one (drafts are never merged). Initial state is
/// [`Closed`](EditSession::Closed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Creating,
    Editing(Medicine),
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditSession::Closed)
    }

    /// The draft the form should start from: empty fields for a create
    /// session, a copy of the opened record for an edit session.
    pub fn initial_draft(&self) -> Option<MedicineDraft> {
        match self {
            EditSession::Closed => None,
            EditSession::Creating => Some(MedicineDraft::default()),
            EditSession::Editing(record) => Some(record.to_draft()),
        }
    }

    pub fn open_create(&mut self) {
        *self = EditSession::Creating;
    }

    pub fn open_edit(&mut self, record: Medicine) {
        *self = EditSession::Editing(record);
    }

    /// Discard the draft and close.
    pub fn cancel(&mut self) {
        *self = EditSession::Closed;
    }

    /// Reconcile a submitted form payload back into the store.
    ///
    /// An edit session replaces the opened record wholesale, keyed by its
    /// original id; a create session asks the store for a fresh record. On
    /// success the session closes. On validation failure the session state
    /// is unchanged, no store mutation occurs, and the error is returned for
    /// the presentation layer to display.
    pub fn submit(
        &mut self,
        store: &mut MedicineStore,
        draft: MedicineDraft,
    ) -> DomainResult<Medicine> {
        let record = match &*self {
            EditSession::Closed => {
                return Err(DomainError::invariant("no edit session is open"));
            }
            EditSession::Creating => store.create(draft)?,
            EditSession::Editing(original) => {
                let replacement = draft.finalize(original.id.clone())?;
                store.upsert(replacement.clone())?;
                replacement
            }
        };
        *self = EditSession::Closed;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pharmstock_core::MedicineId;

    fn test_record(id: &str, name: &str) -> Medicine {
        Medicine {
            id: MedicineId::new(id),
            name: name.to_string(),
            generic_name: name.to_string(),
            strength: "10mg".to_string(),
            manufacturer: "Acme Pharma".to_string(),
            category: "General".to_string(),
            quantity: 10,
            expiry_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    #[test]
    fn starts_closed_with_no_draft() {
        let session = EditSession::default();
        assert!(!session.is_open());
        assert_eq!(session.initial_draft(), None);
    }

    #[test]
    fn create_session_starts_from_an_empty_draft() {
        let mut session = EditSession::default();
        session.open_create();

        let draft = session.initial_draft().unwrap();
        assert_eq!(draft, MedicineDraft::default());
    }

    #[test]
    fn edit_session_starts_from_a_copy_of_the_record() {
        let record = test_record("NDC-1", "Aspirin");
        let mut session = EditSession::default();
        session.open_edit(record.clone());

        assert_eq!(session.initial_draft(), Some(record.to_draft()));
    }

    #[test]
    fn opening_a_new_session_discards_the_previous_one() {
        let mut session = EditSession::default();
        session.open_edit(test_record("NDC-1", "Aspirin"));
        session.open_create();

        assert_eq!(session, EditSession::Creating);
        assert_eq!(session.initial_draft(), Some(MedicineDraft::default()));
    }

    #[test]
    fn cancel_leaves_the_store_untouched() {
        let record = test_record("NDC-1", "Aspirin");
        let mut store = MedicineStore::with_records(vec![record.clone()]);
        let snapshot = store.clone();

        let mut session = EditSession::default();
        session.open_edit(record);
        session.cancel();

        assert_eq!(session, EditSession::Closed);
        assert_eq!(store, snapshot);
    }

    #[test]
    fn submit_in_edit_replaces_exactly_the_opened_record() {
        let a = test_record("NDC-1", "Aspirin");
        let b = test_record("NDC-2", "Bisoprolol");
        let mut store = MedicineStore::with_records(vec![a.clone(), b.clone()]);

        let mut session = EditSession::default();
        session.open_edit(a.clone());

        let mut draft = a.to_draft();
        draft.name = "Aspirin Forte".to_string();
        draft.quantity = 77;
        let saved = session.submit(&mut store, draft).unwrap();

        assert_eq!(session, EditSession::Closed);
        assert_eq!(saved.id, a.id);
        assert_eq!(store.get(&a.id).unwrap().name, "Aspirin Forte");
        assert_eq!(store.get(&a.id).unwrap().quantity, 77);
        // The other record is untouched.
        assert_eq!(store.get(&b.id), Some(&b));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn submit_in_create_inserts_a_new_record() {
        let mut store = MedicineStore::new();
        let mut session = EditSession::default();
        session.open_create();

        let saved = session
            .submit(&mut store, test_record("ignored", "Ibuprofen").to_draft())
            .unwrap();

        assert_eq!(session, EditSession::Closed);
        assert!(!saved.id.is_empty());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&saved.id), Some(&saved));
    }

    #[test]
    fn failed_validation_keeps_session_and_store_unchanged() {
        let record = test_record("NDC-1", "Aspirin");
        let mut store = MedicineStore::with_records(vec![record.clone()]);
        let snapshot = store.clone();

        let mut session = EditSession::default();
        session.open_edit(record.clone());

        let mut draft = record.to_draft();
        draft.quantity = -5;
        let err = session.submit(&mut store, draft).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(session, EditSession::Editing(record));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn submit_without_an_open_session_is_an_invariant_violation() {
        let mut store = MedicineStore::new();
        let mut session = EditSession::default();

        let err = session
            .submit(&mut store, MedicineDraft::default())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(store.is_empty());
    }
}
