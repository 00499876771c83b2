use crate::prelude::*;
use crate::ui::Ui;

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

const SCROLL_STEP: f64 = 200.0;
const ANIMATION_DURATION: Duration = Duration::from_millis(300);
const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

struct State {
    ui: Ui,
    animation_timeout: Cell<Option<glib::SourceId>>,
}

struct WeakGalleryScroll {
    state: Weak<State>,
}

impl WeakGalleryScroll {
    fn upgrade(&self) -> Option<GalleryScroll> {
        self.state.upgrade().map(|state| GalleryScroll { state })
    }
}

pub struct GalleryScroll {
    state: Rc<State>,
}

impl GalleryScroll {

    pub fn new(ui: Ui) -> Self {
        let state = Rc::new(State {
            ui,
            animation_timeout: Cell::new(None),
        });

        let this = Self { state };
        this.setup_scroll_buttons();
        this
    }

    fn setup_scroll_buttons(&self) {
        let this_weak = self.downgrade();
        self.state.ui.gallery().scroll_left_button().connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.scroll_by(-SCROLL_STEP);
            }
        });

        let this_weak = self.downgrade();
        self.state.ui.gallery().scroll_right_button().connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.scroll_by(SCROLL_STEP);
            }
        });
    }

    /// Shifts the thumbnail strip by one step. The adjustment clamps at the
    /// natural extent of the strip, and the selection is untouched.
    fn scroll_by(&self, distance: f64) {
        let adjustment = self.state.ui.gallery().strip_window().hadjustment();
        let target_position = adjustment.value() + distance;
        self.animate_scroll_to_position(&adjustment, target_position);
    }

    fn animate_scroll_to_position(&self, adjustment: &gtk::Adjustment, target_position: f64) {
        if let Some(timeout_id) = self.state.animation_timeout.take() {
            timeout_id.remove();
        }

        let start_position = adjustment.value();
        let distance = target_position - start_position;

        if distance.abs() < 1.0 {
            return;
        }

        let animation_start_time = std::time::Instant::now();
        let this_weak = self.downgrade();

        let animation_callback = move || {
            this_weak.upgrade().map_or(glib::ControlFlow::Break, |this| {
                this.execute_animation_frame(animation_start_time, start_position, distance)
            })
        };

        let timeout_id = glib::timeout_add_local(ANIMATION_FRAME_INTERVAL, animation_callback);
        self.state.animation_timeout.set(Some(timeout_id));
    }

    fn execute_animation_frame(
        &self,
        start_time: std::time::Instant,
        start_position: f64,
        distance: f64,
    ) -> glib::ControlFlow {
        let elapsed = start_time.elapsed();
        let progress = (elapsed.as_millis() as f64 / ANIMATION_DURATION.as_millis() as f64).min(1.0);
        let eased_progress = ease_out_cubic(progress);
        let current_position = distance.mul_add(eased_progress, start_position);
        self.state.ui.gallery().strip_window().hadjustment().set_value(current_position);

        if progress >= 1.0 {
            self.state.animation_timeout.set(None);
            glib::ControlFlow::Break
        } else {
            glib::ControlFlow::Continue
        }
    }

    fn downgrade(&self) -> WeakGalleryScroll {
        let state = Rc::downgrade(&self.state);
        WeakGalleryScroll { state }
    }

}

fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

#[cfg(test)]
mod tests {
    use super::ease_out_cubic;

    #[test]
    fn easing_spans_the_unit_interval() {
        assert!(ease_out_cubic(0.0).abs() < f64::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn easing_decelerates_towards_the_end() {
        let early_share = ease_out_cubic(0.25);
        let late_share = 1.0 - ease_out_cubic(0.75);

        assert!(early_share > 0.25);
        assert!(late_share < 0.25);
    }
}
