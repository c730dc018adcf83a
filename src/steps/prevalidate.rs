//! Destination name pre-validation.
//!
//! Runs before any expensive build work and halts the pipeline when the
//! destination image name is already taken in the catalog.

use crate::catalog::ImageQuery;
use crate::error::ImagegateError;
use crate::pipeline::{Step, StepAction, StepContext};

/// Checks that no existing image already uses the destination name.
///
/// With `force_overwrite` set the check is skipped entirely and the caller
/// accepts the risk of replacing an existing image.
#[derive(Debug, Clone)]
pub struct PreValidateStep {
    /// Name the finished image will be registered under.
    pub destination_name: String,
    /// Accounts to restrict the lookup to. Empty means no restriction.
    pub owners: Vec<String>,
    /// Skip the check.
    pub force_overwrite: bool,
}

impl PreValidateStep {
    /// Create the step.
    pub fn new(
        destination_name: impl Into<String>,
        owners: Vec<String>,
        force_overwrite: bool,
    ) -> Self {
        Self {
            destination_name: destination_name.into(),
            owners,
            force_overwrite,
        }
    }

    /// The catalog query this step issues.
    pub fn query(&self) -> ImageQuery {
        ImageQuery::by_name(&self.destination_name).with_owners(&self.owners)
    }

    fn halt(ctx: &mut StepContext<'_>, err: ImagegateError) -> StepAction {
        ctx.ui().error(&err.to_string());
        ctx.set_error(err);
        StepAction::Halt
    }
}

impl Step for PreValidateStep {
    fn name(&self) -> &str {
        "prevalidate"
    }

    fn run(&self, ctx: &mut StepContext<'_>) -> StepAction {
        if self.force_overwrite {
            ctx.ui()
                .message("Force overwrite flag found, skipping prevalidation of image name");
            return StepAction::Continue;
        }

        let query = self.query();

        ctx.ui().message("Prevalidating image name...");
        tracing::debug!("Looking up '{}' (owners: {:?})", query.name, query.owners);

        let images = match ctx.catalog().query(&query) {
            Ok(images) => images,
            Err(e) => {
                return Self::halt(ctx, ImagegateError::query_failed(format!("{:#}", e)));
            }
        };

        // Only the first match is reported.
        if let Some(existing) = images.first() {
            tracing::debug!("{} existing image(s) match '{}'", images.len(), query.name);
            let err = ImagegateError::NameConflict {
                id: existing.id.clone(),
            };
            return Self::halt(ctx, err);
        }

        StepAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ImageRecord, InMemoryCatalog};
    use crate::ui::MockUI;
    use anyhow::anyhow;

    struct FailingCatalog;

    impl Catalog for FailingCatalog {
        fn query(&self, _query: &ImageQuery) -> anyhow::Result<Vec<ImageRecord>> {
            Err(anyhow!("RequestExpired: request has expired"))
        }
    }

    #[test]
    fn query_without_owners_has_no_owner_filter() {
        let step = PreValidateStep::new("img", Vec::new(), false);
        assert_eq!(step.query(), ImageQuery::by_name("img"));
    }

    #[test]
    fn query_keeps_owner_order() {
        let step = PreValidateStep::new("img", vec!["111".into(), "222".into()], false);
        assert_eq!(
            step.query().owners,
            Some(vec!["111".to_string(), "222".to_string()])
        );
    }

    #[test]
    fn force_overwrite_skips_lookup() {
        let mut ui = MockUI::new();
        let catalog = FailingCatalog;
        let mut ctx = StepContext::new(&mut ui, &catalog);

        let step = PreValidateStep::new("img", Vec::new(), true);
        assert_eq!(step.run(&mut ctx), StepAction::Continue);
        assert!(!ctx.has_error());
        drop(ctx);
        assert!(ui.has_message("skipping prevalidation"));
        assert!(!ui.has_message("Prevalidating"));
    }

    #[test]
    fn free_name_continues() {
        let mut ui = MockUI::new();
        let catalog = InMemoryCatalog::new(vec![ImageRecord::new("ami-1", "other")]);
        let mut ctx = StepContext::new(&mut ui, &catalog);

        let step = PreValidateStep::new("img", Vec::new(), false);
        assert_eq!(step.run(&mut ctx), StepAction::Continue);
        assert!(!ctx.has_error());
        drop(ctx);
        assert!(ui.has_message("Prevalidating image name"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn taken_name_halts_with_first_id() {
        let mut ui = MockUI::new();
        let catalog = InMemoryCatalog::new(vec![
            ImageRecord::new("ami-first", "img"),
            ImageRecord::new("ami-second", "img"),
        ]);
        let mut ctx = StepContext::new(&mut ui, &catalog);

        let step = PreValidateStep::new("img", Vec::new(), false);
        assert_eq!(step.run(&mut ctx), StepAction::Halt);

        let err = ctx.error().unwrap();
        assert!(err.is_name_conflict());
        assert!(err.to_string().contains("ami-first"));
        assert!(!err.to_string().contains("ami-second"));
        drop(ctx);
        assert!(ui.has_error("ami-first"));
    }

    #[test]
    fn owner_filter_excludes_other_accounts() {
        let mut ui = MockUI::new();
        let catalog =
            InMemoryCatalog::new(vec![ImageRecord::new("ami-1", "img").with_owner("999")]);
        let mut ctx = StepContext::new(&mut ui, &catalog);

        let step = PreValidateStep::new("img", vec!["111".into()], false);
        assert_eq!(step.run(&mut ctx), StepAction::Continue);
    }

    #[test]
    fn catalog_failure_halts_with_cause() {
        let mut ui = MockUI::new();
        let catalog = FailingCatalog;
        let mut ctx = StepContext::new(&mut ui, &catalog);

        let step = PreValidateStep::new("img", Vec::new(), false);
        assert_eq!(step.run(&mut ctx), StepAction::Halt);

        let err = ctx.error().unwrap();
        assert!(err.is_query_failure());
        assert!(err.to_string().starts_with("error querying catalog:"));
        assert!(err.to_string().contains("RequestExpired"));
        drop(ctx);
        assert!(ui.has_error("RequestExpired"));
    }

    #[test]
    fn cleanup_leaves_context_untouched() {
        let mut ui = MockUI::new();
        let catalog = InMemoryCatalog::default();
        let mut ctx = StepContext::new(&mut ui, &catalog);
        ctx.put("marker", 1);

        let step = PreValidateStep::new("img", Vec::new(), false);
        step.cleanup(&mut ctx);
        step.cleanup(&mut ctx);

        assert_eq!(ctx.value_count(), 1);
        assert!(!ctx.has_error());
    }
}
