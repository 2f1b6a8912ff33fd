//! Page-level state for the painting detail view.
//!
//! One container owns everything the detail page knows: the fetched painting,
//! the latest processed set, and which image is currently displayed. The page
//! component holds a single signal of this and passes read-only snapshots plus
//! callbacks down to the presentation components, so there is exactly one
//! place where the upload/process interaction is implemented.
//!
//! Phases: `Loading -> Ready -> (Processing -> Ready)*`, with `Failed` as the
//! terminal branch when the initial fetch does not produce a painting. A
//! processing failure is not terminal: it records a visible error and returns
//! to `Ready`, so the busy indicator can never stick.

use crate::api::{ApiError, PaintingRecord, ProcessedImageSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Initial fetch in flight.
    Loading,
    /// Painting loaded, idle.
    Ready,
    /// A process request is in flight.
    Processing,
    /// Initial fetch failed; no retry path.
    Failed,
}

/// One selectable entry in the preview strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
    pub caption: &'static str,
}

#[derive(Clone, Debug)]
pub struct DetailState {
    phase: Phase,
    painting: Option<PaintingRecord>,
    processed: ProcessedImageSet,
    displayed: String,
    processed_once: bool,
    process_error: Option<String>,
    load_error: Option<String>,
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            painting: None,
            processed: ProcessedImageSet::default(),
            displayed: String::new(),
            processed_once: false,
            process_error: None,
            load_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// URL shown at full size. Empty until the painting has loaded.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn process_error(&self) -> Option<&str> {
        self.process_error.as_deref()
    }

    /// Purchase unlocks after the first successful process call.
    pub fn purchase_ready(&self) -> bool {
        self.processed_once
    }

    /// Fetch succeeded: the original image becomes the displayed one.
    pub fn loaded(&mut self, painting: PaintingRecord) {
        if self.phase != Phase::Loading {
            return;
        }
        self.displayed = painting.img_url.clone();
        self.painting = Some(painting);
        self.phase = Phase::Ready;
    }

    /// Fetch failed: terminal, rendered as a failure view.
    pub fn load_failed(&mut self, err: &ApiError) {
        if self.phase != Phase::Loading {
            return;
        }
        self.load_error = Some(match err {
            ApiError::Status { status: 404, .. } => "No painting found".into(),
            _ => "Failed to fetch painting details".into(),
        });
        self.phase = Phase::Failed;
    }

    /// Enter `Processing` if idle. Returns whether the transition happened,
    /// which is the caller's cue to issue the request; a click while already
    /// processing is inert.
    pub fn process_started(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.phase = Phase::Processing;
        self.process_error = None;
        true
    }

    /// A process call finished. Success replaces the whole set; failure
    /// leaves the previous set untouched and records a visible error.
    pub fn process_finished(&mut self, result: Result<ProcessedImageSet, ApiError>) {
        if self.phase != Phase::Processing {
            return;
        }
        match result {
            Ok(set) => {
                self.processed = set;
                self.processed_once = true;
            }
            Err(err) => {
                self.process_error = Some(err.to_string());
            }
        }
        self.phase = Phase::Ready;
    }

    /// Thumbnail click: pointer swap only, never a fetch or phase change.
    pub fn select_image(&mut self, url: String) {
        if self.painting.is_some() {
            self.displayed = url;
        }
    }

    /// Original plus whichever processed variants exist, in strip order.
    pub fn thumbnails(&self) -> Vec<Thumbnail> {
        let mut strip = Vec::new();
        if let Some(painting) = &self.painting {
            strip.push(Thumbnail {
                url: painting.img_url.clone(),
                caption: "Original",
            });
        }
        if let Some(url) = &self.processed.img_cluster_url {
            strip.push(Thumbnail {
                url: url.clone(),
                caption: "Clustered",
            });
        }
        if let Some(url) = &self.processed.img_outline_url {
            strip.push(Thumbnail {
                url: url.clone(),
                caption: "Outline",
            });
        }
        strip
    }

    /// Legend entries, in label order. `None` hides the palette section.
    pub fn palette(&self) -> Option<Vec<(String, [u8; 3])>> {
        self.processed
            .label_color_mapping
            .as_ref()
            .map(|mapping| mapping.iter().map(|(l, c)| (l.clone(), *c)).collect())
    }
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn painting(url: &str) -> PaintingRecord {
        PaintingRecord { img_url: url.into() }
    }

    #[test]
    fn loaded_painting_becomes_displayed_image() {
        let mut state = DetailState::new();
        state.loaded(painting("http://x/u.png"));

        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.displayed(), "http://x/u.png");
        assert_eq!(state.thumbnails().len(), 1);
        assert!(!state.purchase_ready());
    }

    #[test]
    fn thumbnail_click_is_a_pointer_swap() {
        let mut state = DetailState::new();
        state.loaded(painting("http://x/u.png"));

        state.select_image("http://x/c.png".into());
        assert_eq!(state.displayed(), "http://x/c.png");
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn select_image_is_ignored_before_load() {
        let mut state = DetailState::new();
        state.select_image("http://x/c.png".into());
        assert_eq!(state.displayed(), "");
    }

    #[test]
    fn process_cannot_reenter_while_in_flight() {
        let mut state = DetailState::new();
        state.loaded(painting("u"));

        assert!(state.process_started());
        assert_eq!(state.phase(), Phase::Processing);
        // Second click while the request is in flight must be inert.
        assert!(!state.process_started());
    }

    #[test]
    fn process_cannot_start_while_loading_or_failed() {
        let mut state = DetailState::new();
        assert!(!state.process_started());

        state.load_failed(&ApiError::Network("down".into()));
        assert!(!state.process_started());
    }

    #[test]
    fn partial_process_result_adds_one_thumbnail_and_no_palette() {
        let mut state = DetailState::new();
        state.loaded(painting("u"));
        state.process_started();
        state.process_finished(Ok(ProcessedImageSet {
            img_cluster_url: Some("c.png".into()),
            ..Default::default()
        }));

        let strip = state.thumbnails();
        assert_eq!(strip.len(), 2);
        assert_eq!(strip[1].url, "c.png");
        assert_eq!(state.palette(), None);
        assert!(state.purchase_ready());
    }

    #[test]
    fn process_failure_keeps_prior_set_and_surfaces_error() {
        let mut state = DetailState::new();
        state.loaded(painting("u"));
        state.process_started();
        state.process_finished(Ok(ProcessedImageSet {
            img_cluster_url: Some("c.png".into()),
            ..Default::default()
        }));

        state.process_started();
        state.process_finished(Err(ApiError::Network("timeout".into())));

        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.thumbnails().len(), 2);
        assert!(state.process_error().is_some());
        // A later attempt clears the stale error.
        state.process_started();
        assert_eq!(state.process_error(), None);
    }

    #[test]
    fn successful_process_replaces_set_wholesale() {
        let mut state = DetailState::new();
        state.loaded(painting("u"));
        state.process_started();
        state.process_finished(Ok(ProcessedImageSet {
            img_cluster_url: Some("c1.png".into()),
            img_outline_url: Some("o1.png".into()),
            ..Default::default()
        }));

        state.process_started();
        state.process_finished(Ok(ProcessedImageSet {
            img_outline_url: Some("o2.png".into()),
            ..Default::default()
        }));

        let strip = state.thumbnails();
        // No merge: the cluster URL from the first set is gone.
        assert_eq!(strip.len(), 2);
        assert_eq!(strip[1].url, "o2.png");
    }

    #[test]
    fn fetch_404_renders_no_painting_found() {
        let mut state = DetailState::new();
        state.load_failed(&ApiError::Status {
            status: 404,
            detail: "Not Found".into(),
        });
        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.load_error(), Some("No painting found"));
    }

    #[test]
    fn fetch_network_failure_is_terminal() {
        let mut state = DetailState::new();
        state.load_failed(&ApiError::Network("refused".into()));
        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.load_error(), Some("Failed to fetch painting details"));
    }

    #[test]
    fn upload_to_purchase_scenario() {
        // Upload succeeded with unique_filename "p1.jpg"; detail page fetched
        // GET /painting/p1 and the user clicked Process.
        let mut state = DetailState::new();
        state.loaded(painting("http://x/u.png"));
        assert_eq!(state.displayed(), "http://x/u.png");

        assert!(state.process_started());
        state.process_finished(Ok(ProcessedImageSet {
            img_cluster_url: Some("c.png".into()),
            img_outline_url: Some("o.png".into()),
            label_color_mapping: Some(
                [("1".to_string(), [255u8, 0, 0])].into_iter().collect(),
            ),
        }));

        let strip = state.thumbnails();
        assert_eq!(
            strip.iter().map(|t| t.url.as_str()).collect::<Vec<_>>(),
            vec!["http://x/u.png", "c.png", "o.png"]
        );
        assert_eq!(
            state.palette(),
            Some(vec![("1".to_string(), [255, 0, 0])])
        );
        assert!(state.purchase_ready());
    }
}
