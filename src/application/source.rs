// src/application/source.rs
use crate::application::filter::Filterable;
use crate::application::list_view::ListView;
use crate::domain::DomainError;
use tracing::{info, warn};

/// Delivers the latest snapshot of one record collection.
pub trait RecordSource<R> {
    fn fetch(&mut self) -> Result<Vec<R>, DomainError>;
}

/// Fetch once and hand the outcome to the view.
pub fn refresh<R, S>(view: &mut ListView<R>, source: &mut S)
where
    R: Filterable,
    S: RecordSource<R>,
{
    match source.fetch() {
        Ok(records) => {
            info!(records = records.len(), "Fetched records");
            view.on_source_update(records);
        }
        Err(e) => {
            warn!(error = %e, "Fetch failed");
            view.on_source_error(e.to_string());
        }
    }
}

/// Find one record by id in a fetched snapshot.
pub fn find_by_id<R, S, F>(source: &mut S, id: i64, id_of: F) -> Result<R, DomainError>
where
    S: RecordSource<R>,
    F: Fn(&R) -> i64,
{
    source
        .fetch()?
        .into_iter()
        .find(|r| id_of(r) == id)
        .ok_or(DomainError::RecordNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::list_view::{ListStatus, ViewSettings};
    use crate::application::screen::lessons_view;
    use crate::domain::Lesson;
    use crate::util::testing::{lesson, MockRecordSource};

    #[test]
    fn given_successful_fetch_when_refreshing_then_view_ready() {
        let mut source = MockRecordSource::builder()
            .with_record(lesson(1, "Fractions", "K1", "Arithmetic"))
            .build();
        let mut view = lessons_view(ViewSettings::default());

        refresh(&mut view, &mut source);

        assert_eq!(view.status(), ListStatus::Ready);
    }

    #[test]
    fn given_failing_fetch_when_refreshing_then_view_failed() {
        let mut source: MockRecordSource<Lesson> = MockRecordSource::builder()
            .with_failure("connection refused")
            .build();
        let mut view = lessons_view(ViewSettings::default());

        refresh(&mut view, &mut source);

        assert_eq!(view.status(), ListStatus::Failed);
        assert_eq!(view.error(), Some("Source unavailable: connection refused"));
    }

    #[test]
    fn given_missing_id_when_finding_then_not_found() {
        let mut source = MockRecordSource::builder()
            .with_record(lesson(1, "Fractions", "K1", "Arithmetic"))
            .build();

        let result = find_by_id(&mut source, 2, |l: &Lesson| l.lesson_id);

        assert!(matches!(result, Err(DomainError::RecordNotFound(2))));
    }
}
