//! `NeedController`: owns a dog's needs and ranks their urgency.

use kn_core::HungerConfig;

use crate::{Need, NeedEvent, NeedSnapshot, NeedType, SatisfactionProvider};

/// Ordered collection of needs.
///
/// Needs are kept in registration order.  The container does not enforce one
/// need per [`NeedType`]; type lookups return the first match.
#[derive(Clone, Debug)]
pub struct NeedController {
    needs:             Vec<Need>,
    events:            Vec<NeedEvent>,
    last_satisfaction: f32,
}

impl Default for NeedController {
    fn default() -> Self {
        Self::new()
    }
}

impl NeedController {
    /// An empty controller.  Its satisfaction is 1.0.
    pub fn new() -> Self {
        Self {
            needs:             Vec::new(),
            events:            Vec::new(),
            last_satisfaction: 1.0,
        }
    }

    /// A controller holding the hunger need built from `config`.
    pub fn from_config(config: &HungerConfig) -> Self {
        let mut controller = Self::new();
        controller.initialize(config);
        controller
    }

    /// Register the hunger need built from `config`.
    pub fn initialize(&mut self, config: &HungerConfig) {
        self.register(Need::hunger(config));
    }

    /// Append a need.  Duplicates of the same type are accepted.
    pub fn register(&mut self, need: Need) {
        tracing::debug!(need = %need.name(), kind = %need.need_type(), "need registered");
        self.needs.push(need);
        self.last_satisfaction = self.satisfaction();
    }

    // ── Ticking ───────────────────────────────────────────────────────────────

    /// Decay every need by `dt`, in registration order, and queue change
    /// notifications for the needs that moved.
    pub fn tick_all(&mut self, dt: f32) {
        for i in 0..self.needs.len() {
            let before = self.needs[i].value();
            self.needs[i].tick(dt);
            self.note_change(i, before);
        }
        self.note_satisfaction();
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// The need with the greatest priority.  On ties the first registered
    /// wins.  `None` when no need is registered.
    pub fn most_urgent(&self) -> Option<&Need> {
        let mut best: Option<&Need> = None;
        for need in &self.needs {
            match best {
                Some(b) if need.priority() <= b.priority() => {}
                _ => best = Some(need),
            }
        }
        best
    }

    pub fn is_present(&self, need_type: NeedType) -> bool {
        self.find_by_type(need_type).is_some()
    }

    /// First need matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<&Need>
    where
        P: Fn(&Need) -> bool,
    {
        self.needs.iter().find(|n| predicate(n))
    }

    pub fn find_by_type(&self, need_type: NeedType) -> Option<&Need> {
        self.find(|n| n.need_type() == need_type)
    }

    pub fn find_by_type_mut(&mut self, need_type: NeedType) -> Option<&mut Need> {
        self.needs.iter_mut().find(|n| n.need_type() == need_type)
    }

    #[inline]
    pub fn hunger(&self) -> Option<&Need> {
        self.find_by_type(NeedType::Hunger)
    }

    /// `true` when the hunger need exists and is critical.
    pub fn is_hungry(&self) -> bool {
        self.hunger().is_some_and(Need::is_critical)
    }

    #[inline]
    pub fn needs(&self) -> &[Need] {
        &self.needs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.needs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.needs.is_empty()
    }

    // ── Actions ───────────────────────────────────────────────────────────────

    /// Apply one meal to the hunger need.  Returns the gain, or `None` when
    /// there is no hunger need.
    pub fn eat_once(&mut self) -> Option<f32> {
        let i = self.needs.iter().position(|n| n.need_type() == NeedType::Hunger)?;
        let before = self.needs[i].value();
        let gain = self.needs[i].eat_once();
        self.note_change(i, before);
        self.note_satisfaction();
        gain
    }

    /// Take every queued notification, oldest first.
    pub fn drain_events(&mut self) -> Vec<NeedEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn note_change(&mut self, i: usize, before: f32) {
        let need = &self.needs[i];
        if !approximately(before, need.value()) {
            self.events.push(NeedEvent::NeedChanged {
                need_type:   need.need_type(),
                normalized:  need.normalized(),
                is_critical: need.is_critical(),
            });
        }
    }

    fn note_satisfaction(&mut self) {
        let now = self.satisfaction();
        if !approximately(self.last_satisfaction, now) {
            self.last_satisfaction = now;
            self.events.push(NeedEvent::SatisfactionChanged(now));
        }
    }
}

impl SatisfactionProvider for NeedController {
    /// Mean of each need's normalized value clamped to `[0, 1]`; 1.0 when no
    /// need is registered.
    fn satisfaction(&self) -> f32 {
        if self.needs.is_empty() {
            return 1.0;
        }
        let sum: f32 = self.needs.iter().map(|n| n.normalized().clamp(0.0, 1.0)).sum();
        sum / self.needs.len() as f32
    }

    fn needs_snapshot(&self) -> Vec<NeedSnapshot> {
        self.needs.iter().map(Need::snapshot).collect()
    }
}

/// Float equality tolerant to rounding noise.
fn approximately(a: f32, b: f32) -> bool {
    let scale = a.abs().max(b.abs());
    (b - a).abs() < (1e-6 * scale).max(f32::EPSILON * 8.0)
}
