//! Debounced Draft rendering for an editing session

use std::time::Instant;

use crate::composer::Composer;
use crate::debounce::Debouncer;
use crate::document::RenderedDocument;
use crate::subject::{Mode, RenderRequest};
use crate::ComposeError;

/// Re-renders the Draft preview once edits pause.
///
/// Call [`DraftPreview::edit`] on every form change and [`DraftPreview::tick`]
/// from the event loop. Requests superseded by a newer edit are discarded.
pub struct DraftPreview<'c, 'r> {
    composer: &'c Composer<'r>,
    pending: Debouncer<RenderRequest>,
}

impl<'c, 'r> DraftPreview<'c, 'r> {
    /// Uses the composer's configured quiet interval
    pub fn new(composer: &'c Composer<'r>) -> Self {
        Self {
            pending: Debouncer::new(composer.config().debounce),
            composer,
        }
    }

    /// Record the latest form state
    pub fn edit(&mut self, request: RenderRequest, now: Instant) {
        self.pending.submit(request, now);
    }

    /// Render the latest request if input has paused. Always Draft mode,
    /// whatever mode the request carries.
    pub fn tick(&mut self, now: Instant) -> Option<Result<RenderedDocument, ComposeError>> {
        let request = self.pending.poll(now)?;
        Some(self.render(request))
    }

    /// Render the latest request right away
    pub fn flush(&mut self) -> Option<Result<RenderedDocument, ComposeError>> {
        let request = self.pending.flush()?;
        Some(self.render(request))
    }

    /// When the next render is due, for scheduling the next tick
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.deadline()
    }

    fn render(&self, request: RenderRequest) -> Result<RenderedDocument, ComposeError> {
        self.composer.compose(&request.with_mode(Mode::Draft))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::ComposeConfig;
    use crate::subject::SubjectRecord;
    use crate::template::{Field, TemplateRegistry};

    #[test]
    fn test_only_latest_edit_is_rendered() {
        let registry = TemplateRegistry::builtin().unwrap();
        let composer = Composer::new(&registry)
            .with_config(ComposeConfig::new().with_debounce(Duration::from_millis(100)));
        let mut preview = DraftPreview::new(&composer);
        let start = Instant::now();

        let mut subject = SubjectRecord::default();
        for (i, ch) in ["A", "As", "Ash", "Asha"].iter().enumerate() {
            *subject.get_mut(Field::StudentName) = ch.to_string();
            preview.edit(
                RenderRequest::new("harvard", "bonafide", subject.clone()),
                start + Duration::from_millis(i as u64 * 20),
            );
        }

        assert!(preview.tick(start + Duration::from_millis(120)).is_none());
        let rendered = preview
            .tick(start + Duration::from_millis(160))
            .expect("due")
            .expect("draft never fails validation");
        assert!(rendered.document.body.plain_text().contains("Mr./Ms. Asha,"));
        assert!(rendered.artifact_name.is_none());
        assert!(preview.tick(start + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_final_request_rendered_as_draft() {
        let registry = TemplateRegistry::builtin().unwrap();
        let composer = Composer::new(&registry);
        let mut preview = DraftPreview::new(&composer);
        preview.edit(
            RenderRequest::new("mit", "noc", SubjectRecord::default()).with_mode(Mode::Final),
            Instant::now(),
        );
        let rendered = preview.flush().unwrap().unwrap();
        assert_eq!(rendered.artifact_name, None);
        assert!(rendered.document.body.placeholder_count() > 0);
    }

    #[test]
    fn test_unknown_template_surfaces() {
        let registry = TemplateRegistry::builtin().unwrap();
        let composer = Composer::new(&registry);
        let mut preview = DraftPreview::new(&composer);
        preview.edit(
            RenderRequest::new("oxford", "noc", SubjectRecord::default()),
            Instant::now(),
        );
        assert!(matches!(
            preview.flush(),
            Some(Err(ComposeError::UnknownTemplate { .. }))
        ));
    }
}
