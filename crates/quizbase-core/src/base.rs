//! The question repository: a deduplicated pool plus a tag index.
//!
//! `Base` owns every registered question. The index maps each tag to the ids
//! of the pooled questions filed under it and never owns anything itself.
//!
//! The index and each question's own tag set are kept in lockstep: filing a
//! question under a tag also adds the tag to the question, and inserting a
//! question that already carries tags files it under each of them. For every
//! pooled question `q`, `q.tags()` is exactly the set of buckets holding `q`.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::QuizError;
use crate::id::QuestionId;
use crate::question::Question;
use crate::tag::Tag;

/// In-memory repository of questions indexed by tag.
#[derive(Debug, Default)]
pub struct Base {
    pool: BTreeMap<QuestionId, Question>,
    by_reference: BTreeMap<Tag, BTreeSet<QuestionId>>,
}

impl Base {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `question` to the pool and file it under every tag it already carries.
    ///
    /// Inserting a question whose id and content match a pooled one is a
    /// no-op: the pooled instance is kept and `question` is dropped. A
    /// different question under a pooled id (ids drawn from two allocators)
    /// is refused and nothing is pooled or filed.
    pub fn insert(&mut self, question: Question) -> Result<QuestionId, QuizError> {
        let id = question.id();
        if let Some(pooled) = self.pool.get(&id) {
            if !pooled.same_content(&question) {
                tracing::warn!(
                    %id,
                    pooled = pooled.statement(),
                    refused = question.statement(),
                    "question id already taken by a different question"
                );
                return Err(QuizError::IdCollision {
                    id,
                    statement: question.statement().to_string(),
                });
            }
            tracing::debug!(%id, "question already pooled");
            return Ok(id);
        }

        for tag in question.tags() {
            self.by_reference.entry(*tag).or_default().insert(id);
        }
        tracing::debug!(%id, tags = question.tags().len(), "question pooled");
        self.pool.insert(id, question);
        Ok(id)
    }

    /// Pool `question` (if new) and file it under `tag`.
    ///
    /// The tag is also added to the question's own tag set. On an id
    /// collision nothing is tagged.
    pub fn add_element(&mut self, tag: Tag, question: Question) -> Result<QuestionId, QuizError> {
        let id = self.insert(question)?;
        self.add_tag(id, tag);
        Ok(id)
    }

    /// File an already pooled question under another tag.
    ///
    /// Returns `false` if no question with that id is pooled.
    pub fn add_tag(&mut self, id: QuestionId, tag: Tag) -> bool {
        let Some(question) = self.pool.get_mut(&id) else {
            tracing::debug!(%id, %tag, "cannot tag a question outside the pool");
            return false;
        };
        question.add_tag(tag);
        self.by_reference.entry(tag).or_default().insert(id);
        true
    }

    /// Like [`add_tag`](Self::add_tag), resolving the tag from its name.
    pub fn add_tag_name(&mut self, id: QuestionId, name: &str) -> Result<bool, QuizError> {
        let tag = name.parse()?;
        Ok(self.add_tag(id, tag))
    }

    /// Remove a question from the pool and from every index bucket.
    ///
    /// Buckets left empty are dropped. The detached question is returned with
    /// its own tag set untouched. Removing an unknown id is a no-op.
    pub fn remove_element(&mut self, id: QuestionId) -> Option<Question> {
        let question = self.pool.remove(&id)?;

        self.by_reference.retain(|_, ids| {
            ids.remove(&id);
            !ids.is_empty()
        });

        tracing::debug!(%id, "question removed");
        Some(question)
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.pool.get(&id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.pool.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Every pooled question, in id order.
    pub fn pool(&self) -> impl Iterator<Item = &Question> + '_ {
        self.pool.values()
    }

    /// Read-only view of the tag index.
    pub fn by_reference(&self) -> &BTreeMap<Tag, BTreeSet<QuestionId>> {
        &self.by_reference
    }

    /// Questions filed under `tag`, in id order. Empty for an unindexed tag.
    pub fn questions_for(&self, tag: Tag) -> impl Iterator<Item = &Question> + '_ {
        self.by_reference
            .get(&tag)
            .into_iter()
            .flatten()
            .filter_map(|id| self.pool.get(id))
    }

    /// Tags with at least one question filed under them.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.by_reference.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdAllocator;

    fn assert_consistent(base: &Base) {
        for (tag, ids) in base.by_reference() {
            assert!(!ids.is_empty(), "empty bucket left for {tag}");
            for id in ids {
                let question = base.get(*id).expect("indexed question missing from pool");
                assert!(question.tags().contains(tag));
            }
        }
        for question in base.pool() {
            for tag in question.tags() {
                assert!(base.by_reference()[tag].contains(&question.id()));
            }
        }
    }

    #[test]
    fn add_element_pools_and_indexes() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let id = base.add_element(Tag::Math, Question::free(&ids, "2+2?", "4")).unwrap();

        assert!(base.contains(id));
        assert_eq!(base.len(), 1);
        assert!(base.by_reference()[&Tag::Math].contains(&id));
        assert!(base.get(id).unwrap().tags().contains(&Tag::Math));
        assert_consistent(&base);
    }

    #[test]
    fn add_element_twice_keeps_single_pool_entry() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let q = Question::free(&ids, "2+2?", "4");
        let id = q.id();
        base.add_element(Tag::Math, q).unwrap();
        assert!(base.add_tag(id, Tag::Math));

        assert_eq!(base.len(), 1);
        assert_eq!(base.by_reference()[&Tag::Math].len(), 1);
        assert_eq!(base.get(id).unwrap().tags().len(), 1);
    }

    #[test]
    fn insert_files_question_under_existing_tags() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let mut q = Question::free(&ids, "Longest river?", "Nile");
        q.add_tag(Tag::Geo);
        q.add_tag(Tag::Science);
        let id = base.insert(q).unwrap();

        assert!(base.by_reference()[&Tag::Geo].contains(&id));
        assert!(base.by_reference()[&Tag::Science].contains(&id));
        assert_consistent(&base);
    }

    #[test]
    fn untagged_insert_is_pool_only() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let id = base.insert(Question::free(&ids, "Untagged", "x")).unwrap();

        assert!(base.contains(id));
        assert!(base.by_reference().is_empty());
        assert_eq!(base.tags().count(), 0);
    }

    #[test]
    fn reinserting_same_content_under_same_id_is_noop() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let id = base.add_element(Tag::Math, Question::free(&ids, "2+2?", "4")).unwrap();

        let replay = IdAllocator::new();
        let again = base.add_element(Tag::Science, Question::free(&replay, "2+2?", "4")).unwrap();

        assert_eq!(again, id);
        assert_eq!(base.len(), 1);
        assert_eq!(base.get(id).unwrap().tags().len(), 2);
        assert_consistent(&base);
    }

    #[test]
    fn colliding_id_from_second_allocator_is_refused() {
        let first = IdAllocator::new();
        let second = IdAllocator::new();
        let mut base = Base::new();
        let id = base.add_element(Tag::Math, Question::free(&first, "2+2?", "4")).unwrap();

        let err = base
            .add_element(Tag::Geo, Question::free(&second, "Capital of Peru?", "Lima"))
            .unwrap_err();
        assert_eq!(
            err,
            QuizError::IdCollision {
                id,
                statement: "Capital of Peru?".into()
            }
        );

        assert_eq!(base.len(), 1);
        let pooled = base.get(id).unwrap();
        assert_eq!(pooled.statement(), "2+2?");
        assert_eq!(pooled.tags().iter().copied().collect::<Vec<_>>(), vec![Tag::Math]);
        assert!(!base.by_reference().contains_key(&Tag::Geo));
        assert_consistent(&base);
    }

    #[test]
    fn colliding_tagged_insert_files_nothing() {
        let first = IdAllocator::new();
        let second = IdAllocator::new();
        let mut base = Base::new();
        let id = base.insert(Question::free(&first, "Untagged", "x")).unwrap();

        let mut other = Question::choice(&second, "Untagged", vec!["x".into()], 0);
        other.add_tag(Tag::Music);
        assert!(base.insert(other).is_err());

        assert!(base.get(id).unwrap().tags().is_empty());
        assert!(base.by_reference().is_empty());
    }

    #[test]
    fn remove_clears_every_bucket() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let q1 = base.add_element(Tag::Math, Question::free(&ids, "2+2?", "4")).unwrap();
        base.add_tag(q1, Tag::Geo);
        let q2 = base.add_element(Tag::Math, Question::free(&ids, "3+3?", "6")).unwrap();

        let removed = base.remove_element(q1).unwrap();
        assert_eq!(removed.id(), q1);

        assert!(!base.contains(q1));
        assert!(base.by_reference().values().all(|ids| !ids.contains(&q1)));
        assert!(base.by_reference()[&Tag::Math].contains(&q2));
        assert!(!base.by_reference().contains_key(&Tag::Geo));
        assert_consistent(&base);
    }

    #[test]
    fn removed_question_keeps_its_tags() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let id = base.add_element(Tag::Art, Question::free(&ids, "Painter of Guernica?", "Picasso")).unwrap();
        let removed = base.remove_element(id).unwrap();
        assert!(removed.tags().contains(&Tag::Art));
    }

    #[test]
    fn remove_unknown_is_noop() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let kept = base.add_element(Tag::Math, Question::free(&ids, "2+2?", "4")).unwrap();
        let stranger = Question::free(&ids, "Not pooled", "x");

        assert!(base.remove_element(stranger.id()).is_none());
        assert!(base.remove_element(kept).is_some());
        assert!(base.remove_element(kept).is_none());
        assert!(base.is_empty());
    }

    #[test]
    fn add_tag_outside_pool_is_rejected() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let stranger = Question::free(&ids, "Not pooled", "x");
        assert!(!base.add_tag(stranger.id(), Tag::Math));
        assert!(base.by_reference().is_empty());
    }

    #[test]
    fn add_tag_name_resolves_or_fails() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let id = base.insert(Question::free(&ids, "Who wrote Hamlet?", "Shakespeare")).unwrap();

        assert!(base.add_tag_name(id, "literature").unwrap());
        assert_eq!(
            base.add_tag_name(id, "poetry").unwrap_err(),
            QuizError::InvalidTag("poetry".into())
        );
        assert_eq!(base.tags().collect::<Vec<_>>(), vec![Tag::Literature]);
    }

    #[test]
    fn questions_for_lists_bucket_in_id_order() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let a = base.add_element(Tag::Math, Question::free(&ids, "1+1?", "2")).unwrap();
        base.add_element(Tag::Geo, Question::free(&ids, "Capital of Peru?", "Lima")).unwrap();
        let c = base.add_element(Tag::Math, Question::free(&ids, "2*3?", "6")).unwrap();

        let math: Vec<_> = base.questions_for(Tag::Math).map(Question::id).collect();
        assert_eq!(math, vec![a, c]);
        assert_eq!(base.questions_for(Tag::Music).count(), 0);
    }

    #[test]
    fn pool_iterates_in_id_order() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let first = Question::free(&ids, "first", "1");
        let second = Question::free(&ids, "second", "2");
        base.add_element(Tag::General, second).unwrap();
        base.add_element(Tag::General, first).unwrap();

        let statements: Vec<_> = base.pool().map(Question::statement).collect();
        assert_eq!(statements, vec!["first", "second"]);
    }

    #[test]
    fn mixed_sequence_stays_consistent() {
        let ids = IdAllocator::new();
        let mut base = Base::new();
        let mut pooled = Vec::new();

        for (i, tag) in Tag::ALL.iter().cycle().take(30).enumerate() {
            let question = if i % 3 == 0 {
                Question::choice(&ids, format!("q{i}"), vec!["a".into(), "b".into()], 1)
            } else {
                Question::free(&ids, format!("q{i}"), "a")
            };
            let id = base.add_element(*tag, question).unwrap();
            if i % 4 == 0 {
                base.add_tag(id, Tag::General);
            }
            pooled.push(id);
        }
        assert_consistent(&base);

        for id in pooled.iter().step_by(2) {
            base.remove_element(*id);
        }
        assert_consistent(&base);
        assert_eq!(base.len(), 15);
    }
}
