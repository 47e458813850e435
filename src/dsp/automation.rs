use crate::error::ScheduleError;

/*
Parameter Automation
====================

An AudioParam is a number that can change over time on a schedule: an
oscillator's frequency, a gain stage's level. Instead of poking the value
from the control thread while audio is playing, every change is written up
front as a time-stamped event. The render loop then asks "what is the value
at time t?" for every sample.

Vocabulary
----------

  default value   The intrinsic value of the param. Used before the first
                  event (or forever, if there are no events).

  event           One entry on the timeline. Each event has a time and a
                  target value, and a shape describing how we get there.

  set             Jump to the value AT the event time. No transition.

  linear ramp     Move in a straight line from the previous event's value to
                  this event's value, arriving exactly at this event's time.

  exponential     Move along a constant-ratio curve from the previous value
  ramp            to this event's value. Each equal slice of time multiplies
                  the value by the same factor.


The Shapes
----------

    value
      │  set        linear          exponential
      │   ┌──────┐
      │   │       ╲                 ╲
      │   │        ╲                 ╲
      │   │         ╲                 ╲___
      │   │          ╲                    ‾‾‾───────
      └───┴───────────────────────────────────────── time
         t0         t1                t2

A ramp always starts from the PREVIOUS event, not from the time you called
it. To control where a ramp begins, put a set event in front of it:

    param.set_value_at_time(880.0, t)?              // anchor
         .exponential_ramp_to_value_at_time(440.0, t + 0.1)?;


The Math
--------

For t0 <= t < t1, with (t0, v0) the previous event and (t1, v1) the ramp:

    linear:       v(t) = v0 + (v1 - v0) · (t - t0) / (t1 - t0)

    exponential:  v(t) = v0 · (v1 / v0) ^ ((t - t0) / (t1 - t0))

The exponential curve only exists between two values of the same sign. A
ramp whose TARGET is zero is rejected when it is scheduled. A ramp that
STARTS at zero, or crosses zero, holds v0 until t1.

Why exponential? Hearing is logarithmic in both pitch and loudness. A pitch
sweep 880 → 440 Hz that is exponential sounds like a steady glide down one
octave; a linear one sounds like it lingers high and then drops. The same is
true for gain decays: exponential decays sound like natural ringing.


Ordering
--------

Events are kept sorted by time. An event scheduled at a time that is already
on the timeline goes AFTER the events already there, so two sets at the same
instant resolve to the later call.

Before the first event the default value applies. A ramp with no event
in front of it starts from (0.0, default value).
*/

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutomationEvent {
    SetValue { value: f32, time: f64 },
    LinearRamp { value: f32, time: f64 },
    ExponentialRamp { value: f32, time: f64 },
}

impl AutomationEvent {
    pub fn time(&self) -> f64 {
        match *self {
            AutomationEvent::SetValue { time, .. }
            | AutomationEvent::LinearRamp { time, .. }
            | AutomationEvent::ExponentialRamp { time, .. } => time,
        }
    }

    pub fn value(&self) -> f32 {
        match *self {
            AutomationEvent::SetValue { value, .. }
            | AutomationEvent::LinearRamp { value, .. }
            | AutomationEvent::ExponentialRamp { value, .. } => value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AudioParam {
    default_value: f32,
    events: Vec<AutomationEvent>,
}

impl AudioParam {
    pub fn new(default_value: f32) -> Self {
        Self {
            default_value,
            events: Vec::new(),
        }
    }

    /// Change the intrinsic value used when no event applies.
    pub fn set_value(&mut self, value: f32) -> &mut Self {
        self.default_value = value;
        self
    }

    pub fn set_value_at_time(&mut self, value: f32, time: f64) -> Result<&mut Self, ScheduleError> {
        check_value(value)?;
        check_time(time)?;
        self.insert(AutomationEvent::SetValue { value, time });
        Ok(self)
    }

    pub fn linear_ramp_to_value_at_time(
        &mut self,
        value: f32,
        time: f64,
    ) -> Result<&mut Self, ScheduleError> {
        check_value(value)?;
        check_time(time)?;
        self.insert(AutomationEvent::LinearRamp { value, time });
        Ok(self)
    }

    pub fn exponential_ramp_to_value_at_time(
        &mut self,
        value: f32,
        time: f64,
    ) -> Result<&mut Self, ScheduleError> {
        check_value(value)?;
        check_time(time)?;
        if value == 0.0 {
            return Err(ScheduleError::ExponentialToZero { time });
        }
        self.insert(AutomationEvent::ExponentialRamp { value, time });
        Ok(self)
    }

    /// The scheduled timeline, sorted by time.
    pub fn events(&self) -> &[AutomationEvent] {
        &self.events
    }

    /// Evaluate the automation curve at `time`.
    pub fn value_at(&self, time: f64) -> f32 {
        // First event strictly after `time`
        let next_idx = self.events.partition_point(|e| e.time() <= time);

        let (t0, v0) = match next_idx.checked_sub(1) {
            Some(prev) => (self.events[prev].time(), self.events[prev].value()),
            None => (0.0, self.default_value),
        };

        match self.events.get(next_idx) {
            Some(&AutomationEvent::LinearRamp { value: v1, time: t1 }) if t1 > t0 && time >= t0 => {
                let progress = (time - t0) / (t1 - t0);
                v0 + (v1 - v0) * progress as f32
            }
            Some(&AutomationEvent::ExponentialRamp { value: v1, time: t1 })
                if t1 > t0 && time >= t0 =>
            {
                if v0 == 0.0 || (v0 < 0.0) != (v1 < 0.0) {
                    return v0;
                }
                let progress = (time - t0) / (t1 - t0);
                (v0 as f64 * (v1 as f64 / v0 as f64).powf(progress)) as f32
            }
            // Before the first event, between steps, or after the last event
            _ => v0,
        }
    }

    fn insert(&mut self, event: AutomationEvent) {
        let idx = self.events.partition_point(|e| e.time() <= event.time());
        self.events.insert(idx, event);
    }
}

fn check_time(time: f64) -> Result<(), ScheduleError> {
    if time.is_finite() && time >= 0.0 {
        Ok(())
    } else {
        Err(ScheduleError::InvalidTime { time })
    }
}

fn check_value(value: f32) -> Result<(), ScheduleError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ScheduleError::InvalidValue { value })
    }
}
