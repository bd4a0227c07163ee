// src/application/cache.rs
//
// Invalidation bookkeeping between the API's read queries and write
// mutations: a mutation marks tags stale, queries providing a stale tag
// must be refetched before their list views are trusted again.
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CacheTag {
    Lessons,
    Lesson,
    Questions,
    Question,
    Courses,
    Course,
    Standards,
    Standard,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    AllLessons,
    Lesson,
    AllQuestions,
    Question,
    AllCourses,
    Course,
    AllStandards,
    Standard,
    User,
}

impl Query {
    pub fn provides(self) -> CacheTag {
        match self {
            Query::AllLessons => CacheTag::Lessons,
            Query::Lesson => CacheTag::Lesson,
            Query::AllQuestions => CacheTag::Questions,
            Query::Question => CacheTag::Question,
            Query::AllCourses => CacheTag::Courses,
            Query::Course => CacheTag::Course,
            Query::AllStandards => CacheTag::Standards,
            Query::Standard => CacheTag::Standard,
            Query::User => CacheTag::User,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    PostLesson,
    UpdateLesson,
    DeleteLesson,
    PostQuestion,
    UpdateQuestion,
    DeleteQuestion,
    PostCourse,
    UpdateCourse,
    DeleteCourse,
    PostStandard,
    UpdateStandard,
    DeleteStandard,
    PutUser,
}

impl Mutation {
    pub fn invalidates(self) -> &'static [CacheTag] {
        use CacheTag::*;
        match self {
            Mutation::PostLesson | Mutation::DeleteLesson => &[Lessons],
            Mutation::UpdateLesson => &[Lessons, Lesson],
            Mutation::PostQuestion | Mutation::DeleteQuestion => &[Questions],
            Mutation::UpdateQuestion => &[Questions, Question],
            Mutation::PostCourse | Mutation::DeleteCourse => &[Courses],
            Mutation::UpdateCourse => &[Courses, Course],
            Mutation::PostStandard | Mutation::DeleteStandard => &[Standards],
            Mutation::UpdateStandard => &[Standards, Standard],
            Mutation::PutUser => &[User],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    stale: BTreeSet<CacheTag>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful mutation.
    pub fn record(&mut self, mutation: Mutation) {
        let tags = mutation.invalidates();
        debug!(?mutation, ?tags, "Invalidating cache tags");
        self.stale.extend(tags.iter().copied());
    }

    pub fn needs_refetch(&self, query: Query) -> bool {
        self.stale.contains(&query.provides())
    }

    /// Clear the query's tag once its refetch has been delivered.
    pub fn mark_fresh(&mut self, query: Query) {
        self.stale.remove(&query.provides());
    }

    pub fn stale_tags(&self) -> impl Iterator<Item = CacheTag> + '_ {
        self.stale.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_lesson_update_when_recording_then_list_and_detail_stale() {
        let mut cache = QueryCache::new();

        cache.record(Mutation::UpdateLesson);

        assert!(cache.needs_refetch(Query::AllLessons));
        assert!(cache.needs_refetch(Query::Lesson));
        assert!(!cache.needs_refetch(Query::AllQuestions));
    }

    #[test]
    fn given_new_question_when_recording_then_detail_stays_fresh() {
        let mut cache = QueryCache::new();

        cache.record(Mutation::PostQuestion);

        assert!(cache.needs_refetch(Query::AllQuestions));
        assert!(!cache.needs_refetch(Query::Question));
    }

    #[test]
    fn given_refetch_delivered_when_marking_fresh_then_clears_only_that_tag() {
        let mut cache = QueryCache::new();
        cache.record(Mutation::UpdateQuestion);

        cache.mark_fresh(Query::AllQuestions);

        assert!(!cache.needs_refetch(Query::AllQuestions));
        assert_eq!(cache.stale_tags().collect::<Vec<_>>(), vec![CacheTag::Question]);
    }
}
