use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::entity_store::{EntityStore, Loaded, Record, StoreError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

struct Row<R> {
    record: R,
    version: u64,
}

pub struct InMemoryEntityStore<R: Record> {
    rows: RwLock<Vec<Row<R>>>,
    delay_ms: AtomicU64,
    is_offline: bool,
}

impl<R: Record> Default for InMemoryEntityStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> InMemoryEntityStore<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Seeds the collection, keeping the given order.
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            rows: RwLock::new(
                records
                    .into_iter()
                    .map(|record| Row { record, version: 1 })
                    .collect(),
            ),
            delay_ms: AtomicU64::new(0),
            is_offline: false,
        }
    }

    /// Simulated network latency applied before every operation.
    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::Relaxed);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    async fn round_trip(&self) -> Result<(), StoreError> {
        let ms = self.delay_ms.load(Ordering::Relaxed);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
        if self.is_offline {
            return Err(StoreError::Backend(format!("{} store offline", R::ENTITY)));
        }
        Ok(())
    }

    fn position(rows: &[Row<R>], id: EntityId) -> Result<usize, StoreError> {
        rows.iter()
            .position(|row| row.record.id() == id)
            .ok_or(StoreError::NotFound {
                entity: R::ENTITY,
                id,
            })
    }
}

#[async_trait::async_trait]
impl<R: Record> EntityStore<R> for InMemoryEntityStore<R> {
    async fn get_all(&self) -> Result<Vec<R>, StoreError> {
        self.round_trip().await?;
        let guard = self.rows.read().await;
        Ok(guard.iter().map(|row| row.record.clone()).collect())
    }

    async fn get_by_id(&self, id: EntityId) -> Result<R, StoreError> {
        self.round_trip().await?;
        let guard = self.rows.read().await;
        let index = Self::position(&guard, id)?;
        Ok(guard[index].record.clone())
    }

    async fn create(&self, draft: R::Draft) -> Result<R, StoreError> {
        self.round_trip().await?;
        let mut guard = self.rows.write().await;
        let id = match guard.iter().map(|row| row.record.id()).max() {
            None => EntityId::FIRST,
            Some(last) => last
                .next()
                .ok_or_else(|| StoreError::Backend(format!("{} ids exhausted", R::ENTITY)))?,
        };
        let record = R::from_draft(id, draft)?;
        guard.push(Row {
            record: record.clone(),
            version: 1,
        });
        Ok(record)
    }

    async fn update(&self, id: EntityId, patch: R::Patch) -> Result<R, StoreError> {
        self.round_trip().await?;
        let mut guard = self.rows.write().await;
        let index = Self::position(&guard, id)?;
        let row = &mut guard[index];
        let mut merged = row.record.clone();
        merged.apply_patch(patch)?;
        row.record = merged.clone();
        row.version += 1;
        Ok(merged)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, StoreError> {
        self.round_trip().await?;
        let mut guard = self.rows.write().await;
        let index = Self::position(&guard, id)?;
        guard.remove(index);
        Ok(true)
    }

    async fn load(&self, id: EntityId) -> Result<Loaded<R>, StoreError> {
        self.round_trip().await?;
        let guard = self.rows.read().await;
        let index = Self::position(&guard, id)?;
        Ok(Loaded {
            record: guard[index].record.clone(),
            version: guard[index].version,
        })
    }

    async fn replace(
        &self,
        id: EntityId,
        expected_version: u64,
        record: R,
    ) -> Result<R, StoreError> {
        self.round_trip().await?;
        if record.id() != id {
            return Err(StoreError::Backend(format!(
                "cannot replace {} {id} with record {}",
                R::ENTITY,
                record.id()
            )));
        }
        let mut guard = self.rows.write().await;
        let index = Self::position(&guard, id)?;
        let row = &mut guard[index];
        if row.version != expected_version {
            return Err(StoreError::VersionMismatch {
                expected: expected_version,
                actual: row.version,
            });
        }
        row.record = record.clone();
        row.version += 1;
        Ok(record)
    }
}

#[cfg(test)]
mod in_memory_entity_store_tests {
    use super::*;
    use crate::shared::core::errors::ValidationError;
    use rstest::{fixture, rstest};
    use tokio::join;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: EntityId,
        title: String,
        body: String,
    }

    struct NewNote {
        title: String,
        body: String,
    }

    #[derive(Default)]
    struct NotePatch {
        title: Option<String>,
        body: Option<String>,
    }

    impl Record for Note {
        const ENTITY: &'static str = "note";
        type Draft = NewNote;
        type Patch = NotePatch;

        fn id(&self) -> EntityId {
            self.id
        }

        fn from_draft(id: EntityId, draft: NewNote) -> Result<Self, ValidationError> {
            if draft.title.is_empty() {
                return Err(ValidationError::Required("title"));
            }
            Ok(Note {
                id,
                title: draft.title,
                body: draft.body,
            })
        }

        fn apply_patch(&mut self, patch: NotePatch) -> Result<(), ValidationError> {
            if patch.title.as_deref() == Some("") {
                return Err(ValidationError::Required("title"));
            }
            if let Some(title) = patch.title {
                self.title = title;
            }
            if let Some(body) = patch.body {
                self.body = body;
            }
            Ok(())
        }
    }

    fn id(n: u64) -> EntityId {
        EntityId::new(n).unwrap()
    }

    fn note(n: u64, title: &str) -> Note {
        Note {
            id: id(n),
            title: title.to_string(),
            body: String::new(),
        }
    }

    fn draft(title: &str) -> NewNote {
        NewNote {
            title: title.to_string(),
            body: "body".to_string(),
        }
    }

    #[fixture]
    fn before_each() -> InMemoryEntityStore<Note> {
        InMemoryEntityStore::with_records(vec![note(1, "first"), note(4, "second"), note(2, "third")])
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_assign_the_first_id_in_an_empty_store() {
        let store = InMemoryEntityStore::<Note>::new();
        let created = store.create(draft("hello")).await.unwrap();
        assert_eq!(created.id, EntityId::FIRST);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_assign_max_id_plus_one(before_each: InMemoryEntityStore<Note>) {
        let created = before_each.create(draft("fourth")).await.unwrap();
        assert_eq!(created.id, id(5));
        let all = before_each.get_all().await.unwrap();
        assert_eq!(all.last().unwrap(), &created);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_reuse_ids_after_deleting_a_middle_record(
        before_each: InMemoryEntityStore<Note>,
    ) {
        before_each.delete(id(2)).await.unwrap();
        let created = before_each.create(draft("again")).await.unwrap();
        assert_eq!(created.id, id(5));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_create_past_the_largest_id() {
        let store = InMemoryEntityStore::with_records(vec![note(u64::MAX, "last")]);
        let result = store.create(draft("overflow")).await;
        assert_eq!(
            result,
            Err(StoreError::Backend("note ids exhausted".into()))
        );
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_equal_but_independent_copies(before_each: InMemoryEntityStore<Note>) {
        let mut first = before_each.get_all().await.unwrap();
        let second = before_each.get_all().await.unwrap();
        assert_eq!(first, second);
        first[0].title = "mutated by caller".to_string();
        assert_eq!(before_each.get_all().await.unwrap(), second);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_preserve_insertion_order(before_each: InMemoryEntityStore<Note>) {
        let ids: Vec<u64> = before_each
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|n| n.id.get())
            .collect();
        assert_eq!(ids, vec![1, 4, 2]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_get_an_unknown_id(before_each: InMemoryEntityStore<Note>) {
        let result = before_each.get_by_id(id(99)).await;
        assert_eq!(
            result,
            Err(StoreError::NotFound {
                entity: "note",
                id: id(99)
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_unpatched_fields_and_the_id(before_each: InMemoryEntityStore<Note>) {
        let updated = before_each
            .update(
                id(4),
                NotePatch {
                    body: Some("new body".into()),
                    ..NotePatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, id(4));
        assert_eq!(updated.title, "second");
        assert_eq!(updated.body, "new body");
        assert_eq!(before_each.get_by_id(id(4)).await.unwrap(), updated);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_partially_apply_a_rejected_patch(before_each: InMemoryEntityStore<Note>) {
        let result = before_each
            .update(
                id(1),
                NotePatch {
                    title: Some(String::new()),
                    body: Some("should not land".into()),
                },
            )
            .await;
        assert_eq!(
            result,
            Err(StoreError::Validation(ValidationError::Required("title")))
        );
        assert_eq!(before_each.get_by_id(id(1)).await.unwrap(), note(1, "first"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_invalid_draft_without_appending(
        before_each: InMemoryEntityStore<Note>,
    ) {
        let result = before_each.create(draft("")).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(before_each.get_all().await.unwrap().len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_leave_the_collection_unchanged_when_deleting_an_unknown_id(
        before_each: InMemoryEntityStore<Note>,
    ) {
        let before = before_each.get_all().await.unwrap();
        let result = before_each.delete(id(42)).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
        assert_eq!(before_each.get_all().await.unwrap(), before);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_by_id(before_each: InMemoryEntityStore<Note>) {
        assert_eq!(before_each.delete(id(4)).await, Ok(true));
        let ids: Vec<u64> = before_each
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|n| n.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_bump_the_revision_on_replace(before_each: InMemoryEntityStore<Note>) {
        let loaded = before_each.load(id(2)).await.unwrap();
        assert_eq!(loaded.version, 1);
        let mut record = loaded.record;
        record.body = "replaced".into();
        before_each
            .replace(id(2), loaded.version, record)
            .await
            .unwrap();
        assert_eq!(before_each.load(id(2)).await.unwrap().version, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_replace_with_a_stale_revision(before_each: InMemoryEntityStore<Note>) {
        before_each
            .update(
                id(2),
                NotePatch {
                    body: Some("moved on".into()),
                    ..NotePatch::default()
                },
            )
            .await
            .unwrap();
        let result = before_each.replace(id(2), 1, note(2, "stale")).await;
        assert_eq!(
            result,
            Err(StoreError::VersionMismatch {
                expected: 1,
                actual: 2
            })
        );
        assert_eq!(before_each.get_by_id(id(2)).await.unwrap().body, "moved on");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_let_exactly_one_concurrent_replace_win(
        before_each: InMemoryEntityStore<Note>,
    ) {
        before_each.set_delay_ms(10);
        let (first, second) = join!(
            before_each.replace(id(1), 1, note(1, "left")),
            before_each.replace(id(1), 1, note(1, "right"))
        );
        assert!(first.is_ok() ^ second.is_ok(), "exactly one should win");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_to_replace_with_a_different_record(
        before_each: InMemoryEntityStore<Note>,
    ) {
        let result = before_each.replace(id(1), 1, note(2, "imposter")).await;
        assert!(matches!(result, Err(StoreError::Backend(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_operation_when_offline(before_each: InMemoryEntityStore<Note>) {
        let mut store = before_each;
        store.toggle_offline();
        let result = store.get_all().await;
        assert_eq!(
            result,
            Err(StoreError::Backend("note store offline".into()))
        );
        assert!(store.create(draft("x")).await.is_err());
    }
}
