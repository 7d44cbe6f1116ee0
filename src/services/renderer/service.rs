use chrono::{DateTime, Local};

use crate::models::target::TargetInstant;
use crate::services::page::{Document, Page};
use crate::utils::clock::Clock;
use crate::utils::date::whole_days_until;

/// Id of the page element the countdown writes into. Its presence in the
/// markup is an external contract; the renderer does not create it.
pub const COUNTDOWN_ELEMENT_ID: &str = "countdown-timer";

/// Renders the days remaining until a fixed target date into one page
/// element, once per page load.
pub struct CountdownRenderer {
    target: TargetInstant,
    element_id: String,
}

impl CountdownRenderer {
    /// Renderer writing into the standard [`COUNTDOWN_ELEMENT_ID`] element.
    pub fn new(target: TargetInstant) -> Self {
        Self::with_element_id(target, COUNTDOWN_ELEMENT_ID)
    }

    pub fn with_element_id(target: TargetInstant, element_id: impl Into<String>) -> Self {
        Self {
            target,
            element_id: element_id.into(),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Whole days between `now` and the target, floored, clamped at zero.
    pub fn days_remaining(&self, now: DateTime<Local>) -> i64 {
        whole_days_until(now, self.target.instant())
    }

    /// Read the clock, compute days remaining, and write the decimal string
    /// into the display element. Once the target has passed (or is exactly
    /// now) the written text is `"0"`.
    pub fn render(&self, clock: &dyn Clock, document: &mut Document) {
        let now = clock.now();
        let days = self.days_remaining(now);
        log::info!(
            "rendering countdown: {} day(s) until {}",
            days,
            self.target.instant()
        );
        document.set_element_text(&self.element_id, &days.to_string());
    }

    /// Register a ready handler that renders exactly once when the page
    /// loads.
    pub fn install(self, clock: impl Clock + 'static, page: &mut Page) {
        page.on_ready(move |document| self.render(&clock, document));
    }
}
