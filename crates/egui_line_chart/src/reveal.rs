use egui::emath::easing;
use egui::{lerp, Context, Id};

/// How long the stroke sweep of the entrance animation takes, in seconds.
const GROW_TIME: f32 = 1.2;

/// How long the area-fill fade takes, in seconds.
const FADE_TIME: f32 = 1.6;

/// Extra stroke delay per chart `index` slot, staggering stacked charts.
const STAGGER: f32 = 0.4;

/// One animated quantity transitioning between 0 and 1.
///
/// Holds the value it started from, so retargeting mid-flight continues
/// from the value on screen instead of jumping.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Channel {
    on: bool,
    /// Value the current transition started from.
    from: f32,
    /// When the current transition started, in seconds of `Input::time`.
    started: f64,
}

impl Channel {
    fn new(on: bool, now: f64) -> Self {
        Self {
            on,
            from: 0.0,
            started: now,
        }
    }

    fn target(&self) -> f32 {
        if self.on {
            1.0
        } else {
            0.0
        }
    }

    fn set(&mut self, on: bool, now: f64, delay: f32, duration: f32, ease: fn(f32) -> f32) {
        if self.on != on {
            self.from = self.value(now, delay, duration, ease);
            self.on = on;
            self.started = now;
        }
    }

    /// The value holds at `from` through the delay, then eases to the target.
    fn value(&self, now: f64, delay: f32, duration: f32, ease: fn(f32) -> f32) -> f32 {
        let elapsed = (now - self.started) as f32 - delay;
        if elapsed <= 0.0 {
            self.from
        } else if elapsed >= duration {
            self.target()
        } else {
            lerp(self.from..=self.target(), ease(elapsed / duration))
        }
    }

    fn is_settled(&self, now: f64, delay: f32, duration: f32) -> bool {
        self.from == self.target() || (now - self.started) as f32 - delay >= duration
    }
}

/// Cross-frame animation state of one chart, keyed by the widget id.
///
/// Two channels: the stroke sweeping in from the left, and the area fill
/// fading in. Both reverse when the chart is hidden again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Reveal {
    stroke: Channel,
    fill: Channel,
}

impl Reveal {
    pub fn new(visible: bool, fill_visible: bool, now: f64) -> Self {
        Self {
            stroke: Channel::new(visible, now),
            fill: Channel::new(fill_visible, now),
        }
    }

    pub fn load(ctx: &Context, id: Id) -> Option<Self> {
        ctx.data_mut(|data| data.get_temp(id))
    }

    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|data| data.insert_temp(id, self));
    }

    /// The stroke delay for a chart in stacking slot `index`.
    pub fn delay_for_index(index: usize) -> f32 {
        index as f32 * STAGGER
    }

    pub fn set_targets(&mut self, visible: bool, fill_visible: bool, now: f64, delay: f32) {
        self.stroke.set(visible, now, delay, GROW_TIME, easing::cubic_out);
        self.fill.set(fill_visible, now, 0.0, FADE_TIME, easing::quadratic_in);
    }

    /// Fraction of the line revealed so far, 0..=1 left to right.
    pub fn stroke_t(&self, now: f64, delay: f32) -> f32 {
        self.stroke.value(now, delay, GROW_TIME, easing::cubic_out)
    }

    /// Opacity of the area fill, 0..=1.
    pub fn fill_t(&self, now: f64) -> f32 {
        self.fill.value(now, 0.0, FADE_TIME, easing::quadratic_in)
    }

    /// True once both channels are at rest, i.e. no repaint is needed.
    pub fn is_settled(&self, now: f64, delay: f32) -> bool {
        self.stroke.is_settled(now, delay, GROW_TIME) && self.fill.is_settled(now, 0.0, FADE_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_chart_grows_from_zero() {
        let reveal = Reveal::new(true, true, 0.0);

        assert_eq!(reveal.stroke_t(0.0, 0.0), 0.0);
        let halfway = reveal.stroke_t(0.6, 0.0);
        assert!(0.0 < halfway && halfway < 1.0);
        assert_eq!(reveal.stroke_t(1.2, 0.0), 1.0);

        assert!(reveal.fill_t(0.8) < 1.0);
        assert_eq!(reveal.fill_t(1.6), 1.0);

        assert!(!reveal.is_settled(1.2, 0.0));
        assert!(reveal.is_settled(1.6, 0.0));
    }

    #[test]
    fn stroke_delay_holds_then_releases() {
        let delay = Reveal::delay_for_index(2);
        assert_eq!(delay, 0.8);

        let reveal = Reveal::new(true, true, 0.0);
        assert_eq!(reveal.stroke_t(0.5, delay), 0.0);
        assert!(reveal.stroke_t(1.0, delay) > 0.0);
        assert_eq!(reveal.stroke_t(2.1, delay), 1.0);

        // The fill is not staggered.
        assert_eq!(reveal.fill_t(1.6), 1.0);
    }

    #[test]
    fn hiding_reverses_from_the_current_value() {
        let mut reveal = Reveal::new(true, true, 0.0);
        let mid_flight = reveal.stroke_t(0.6, 0.0);

        reveal.set_targets(false, false, 0.6, 0.0);
        assert_eq!(reveal.stroke_t(0.6, 0.0), mid_flight); // no jump
        assert!(reveal.stroke_t(1.0, 0.0) < mid_flight);
        assert_eq!(reveal.stroke_t(1.9, 0.0), 0.0);
        assert_eq!(reveal.fill_t(2.3), 0.0);
    }

    #[test]
    fn hidden_from_birth_is_settled() {
        let reveal = Reveal::new(false, false, 5.0);
        assert_eq!(reveal.stroke_t(5.0, 0.0), 0.0);
        assert!(reveal.is_settled(5.0, 0.0));
    }

    #[test]
    fn retargeting_to_the_same_state_is_a_no_op() {
        let mut reveal = Reveal::new(true, true, 0.0);
        let before = reveal;
        reveal.set_targets(true, true, 0.9, 0.0);
        assert_eq!(reveal, before);
    }

    #[test]
    fn state_round_trips_through_context_memory() {
        let ctx = Context::default();
        let id = Id::new("chart");
        assert_eq!(Reveal::load(&ctx, id), None);

        let reveal = Reveal::new(true, false, 1.0);
        reveal.store(&ctx, id);
        assert_eq!(Reveal::load(&ctx, id), Some(reveal));
    }

    #[test]
    fn stroke_eases_out_and_the_fill_eases_in() {
        let reveal = Reveal::new(true, true, 0.0);
        // Halfway through, the ease-out stroke is already past the midpoint
        // while the ease-in fill is still before it.
        assert!(reveal.stroke_t(0.6, 0.0) > 0.5);
        assert!(reveal.fill_t(0.8) < 0.5);
    }
}
