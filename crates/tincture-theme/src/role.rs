//! Hue roles: which accent is "the red one", "the blue one", ...
//!
//! Seven accents compete for six canonical hue roles. Every ordering of the
//! seven accent slots is scored (positions 0..5 fill red..magenta, position
//! 6 is left over) and the cheapest ordering wins. 7! = 5040 orderings, each
//! scored from a precomputed 7×6 cost table, so the search is trivially
//! bounded and needs no caching.
//!
//! Two constraints shape the result beyond raw distance:
//!
//! - The first two accent slots (`c1`, `c2`) are never the leftover one.
//!   Palettes conventionally put their primary and secondary accents there.
//! - Ties keep the first minimum in generation order (Heap's algorithm,
//!   starting from the identity ordering).

use serde::{Deserialize, Serialize};
use tincture_color::{Color, Lab, Lch, hue_diff};

use crate::palette::ACCENT_COUNT;

/// Number of hue roles.
pub const ROLE_COUNT: usize = 6;

/// Accent slots that must always receive a role.
const PROTECTED_SLOTS: usize = 2;

/// Weights for the LCH metric: lightness is ignored, hue dominates chroma.
const LCH_WEIGHT_L: f64 = 0.0;
const LCH_WEIGHT_C: f64 = 1.0;
const LCH_WEIGHT_H: f64 = 6.0;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A canonical hue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl Role {
    /// All roles, in search order.
    pub const ALL: [Self; ROLE_COUNT] = [
        Self::Red,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Magenta,
    ];

    /// Tree key for this role.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
        }
    }

    /// The fully saturated sRGB primary/secondary for this role.
    #[must_use]
    pub const fn reference(self) -> Color {
        match self {
            Self::Red => Color::rgb(0xff, 0x00, 0x00),
            Self::Yellow => Color::rgb(0xff, 0xff, 0x00),
            Self::Green => Color::rgb(0x00, 0xff, 0x00),
            Self::Cyan => Color::rgb(0x00, 0xff, 0xff),
            Self::Blue => Color::rgb(0x00, 0x00, 0xff),
            Self::Magenta => Color::rgb(0xff, 0x00, 0xff),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How an accent is scored against a role's reference color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Sum of per-channel absolute sRGB differences.
    #[default]
    RgbAbsolute,
    /// Chroma/hue distance in LCH after centering the accents on their mean
    /// LAB value. Tolerates palettes that are uniformly pastel or muted, but
    /// can pick a different assignment than [`RgbAbsolute`](Self::RgbAbsolute).
    LchWeighted,
}

/// Reference colors and metric for role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleConfig {
    /// One reference per role, in [`Role::ALL`] order.
    pub targets: [Color; ROLE_COUNT],
    pub metric: DistanceMetric,
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            targets: Role::ALL.map(Role::reference),
            metric: DistanceMetric::default(),
        }
    }
}

impl RoleConfig {
    #[must_use]
    pub const fn target(&self, role: Role) -> Color {
        self.targets[role.index()]
    }
}

// ---------------------------------------------------------------------------
// RoleAssignment
// ---------------------------------------------------------------------------

/// Result of the role search: one accent slot per role, one slot left over.
///
/// Slots are 0-based indices into the accent array; [`slot_name`] gives the
/// tree key (`c1`..`c7`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleAssignment {
    slots: [usize; ROLE_COUNT],
    unused: usize,
    distance: f64,
}

impl RoleAssignment {
    /// Accent slot assigned to `role`.
    #[must_use]
    pub const fn slot(&self, role: Role) -> usize {
        self.slots[role.index()]
    }

    /// The accent slot no role picked.
    #[must_use]
    pub const fn unused(&self) -> usize {
        self.unused
    }

    /// Total distance of the winning ordering under the configured metric.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// `(role, slot)` pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, usize)> + '_ {
        Role::ALL.iter().map(|&role| (role, self.slot(role)))
    }
}

/// Tree key for a 0-based accent slot: `0` → `"c1"`.
#[must_use]
pub fn slot_name(slot: usize) -> String {
    format!("c{}", slot + 1)
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Assign six of the seven accents to the six hue roles.
#[must_use]
pub fn assign_roles(accents: &[Color; ACCENT_COUNT], config: &RoleConfig) -> RoleAssignment {
    let cost = cost_table(accents, config);

    let mut best: Option<([usize; ACCENT_COUNT], f64)> = None;
    for order in Permutations::new() {
        if order[ROLE_COUNT] < PROTECTED_SLOTS {
            continue;
        }
        let distance: f64 = (0..ROLE_COUNT).map(|role| cost[order[role]][role]).sum();
        if best.is_none_or(|(_, min)| distance < min) {
            best = Some((order, distance));
        }
    }

    // The identity ordering is never excluded, so `best` is always set.
    let (order, distance) = best.unwrap_or(([0, 1, 2, 3, 4, 5, 6], f64::INFINITY));
    let mut slots = [0; ROLE_COUNT];
    slots.copy_from_slice(&order[..ROLE_COUNT]);

    let assignment = RoleAssignment {
        slots,
        unused: order[ROLE_COUNT],
        distance,
    };
    tracing::debug!(
        red = assignment.slot(Role::Red),
        yellow = assignment.slot(Role::Yellow),
        green = assignment.slot(Role::Green),
        cyan = assignment.slot(Role::Cyan),
        blue = assignment.slot(Role::Blue),
        magenta = assignment.slot(Role::Magenta),
        unused = assignment.unused,
        distance,
        metric = ?config.metric,
        "assigned hue roles"
    );
    assignment
}

/// `cost[slot][role]`: distance of accent `slot` from the role's reference.
fn cost_table(
    accents: &[Color; ACCENT_COUNT],
    config: &RoleConfig,
) -> [[f64; ROLE_COUNT]; ACCENT_COUNT] {
    let mut cost = [[0.0; ROLE_COUNT]; ACCENT_COUNT];
    match config.metric {
        DistanceMetric::RgbAbsolute => {
            for (row, &accent) in cost.iter_mut().zip(accents) {
                for (cell, &target) in row.iter_mut().zip(&config.targets) {
                    *cell = f64::from(rgb_distance(accent, target));
                }
            }
        }
        DistanceMetric::LchWeighted => {
            let centered = centered_lch(accents);
            let targets = config.targets.map(|t| t.to_lab().to_lch());
            for (row, accent) in cost.iter_mut().zip(&centered) {
                for (cell, target) in row.iter_mut().zip(&targets) {
                    *cell = lch_distance(*accent, *target);
                }
            }
        }
    }
    cost
}

fn rgb_distance(a: Color, b: Color) -> u32 {
    a.channels()
        .iter()
        .zip(b.channels())
        .map(|(&x, y)| u32::from(x.abs_diff(y)))
        .sum()
}

/// Accents in LCH, relative to the accent set's mean LAB value.
#[allow(clippy::cast_precision_loss)]
fn centered_lch(accents: &[Color; ACCENT_COUNT]) -> [Lch; ACCENT_COUNT] {
    let labs = accents.map(Color::to_lab);
    let n = ACCENT_COUNT as f64;
    let mean = Lab::new(
        labs.iter().map(|lab| lab.l).sum::<f64>() / n,
        labs.iter().map(|lab| lab.a).sum::<f64>() / n,
        labs.iter().map(|lab| lab.b).sum::<f64>() / n,
    );
    labs.map(|lab| Lab::new(lab.l - mean.l, lab.a - mean.a, lab.b - mean.b).to_lch())
}

fn lch_distance(a: Lch, b: Lch) -> f64 {
    let dl = a.l - b.l;
    let dc = a.c - b.c;
    let dh = hue_diff(a.h, b.h);
    (LCH_WEIGHT_L * dl * dl + LCH_WEIGHT_C * dc * dc + LCH_WEIGHT_H * dh * dh).sqrt()
}

// ---------------------------------------------------------------------------
// Permutations
// ---------------------------------------------------------------------------

/// All orderings of the accent slots, by Heap's algorithm (iterative form).
///
/// Yields the identity first; each later ordering differs from the previous
/// one by a single swap.
struct Permutations {
    order: [usize; ACCENT_COUNT],
    counters: [usize; ACCENT_COUNT],
    i: usize,
    started: bool,
}

impl Permutations {
    const fn new() -> Self {
        Self {
            order: [0, 1, 2, 3, 4, 5, 6],
            counters: [0; ACCENT_COUNT],
            i: 0,
            started: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = [usize; ACCENT_COUNT];

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.order);
        }
        while self.i < ACCENT_COUNT {
            if self.counters[self.i] < self.i {
                let swap = if self.i % 2 == 0 { 0 } else { self.counters[self.i] };
                self.order.swap(swap, self.i);
                self.counters[self.i] += 1;
                self.i = 0;
                return Some(self.order);
            }
            self.counters[self.i] = 0;
            self.i += 1;
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn accents(hexes: [&str; ACCENT_COUNT]) -> [Color; ACCENT_COUNT] {
        hexes.map(|h| Color::hex(h).unwrap())
    }

    fn slots(a: &RoleAssignment) -> [usize; ROLE_COUNT] {
        Role::ALL.map(|role| a.slot(role))
    }

    const CANONICAL: [&str; ACCENT_COUNT] =
        ["ff0000", "ffff00", "00ff00", "00ffff", "0000ff", "ff00ff", "808080"];

    const DRACULA: [&str; ACCENT_COUNT] =
        ["ff5555", "ffb86c", "f1fa8c", "50fa7b", "8be9fd", "bd93f9", "ff79c6"];

    // ── Permutations ────────────────────────────────────────────────

    #[test]
    fn permutations_cover_all_orderings_once() {
        let all: Vec<_> = Permutations::new().collect();
        assert_eq!(all.len(), 5040);
        let distinct: HashSet<_> = all.iter().collect();
        assert_eq!(distinct.len(), 5040);
    }

    #[test]
    fn permutations_follow_heap_order() {
        let mut it = Permutations::new();
        assert_eq!(it.next(), Some([0, 1, 2, 3, 4, 5, 6]));
        assert_eq!(it.next(), Some([1, 0, 2, 3, 4, 5, 6]));
        assert_eq!(it.next(), Some([2, 0, 1, 3, 4, 5, 6]));
        assert_eq!(Permutations::new().last(), Some([6, 1, 2, 3, 4, 5, 0]));
    }

    // ── RGB metric ──────────────────────────────────────────────────

    #[test]
    fn canonical_hues_map_to_themselves() {
        let a = assign_roles(&accents(CANONICAL), &RoleConfig::default());
        assert_eq!(slots(&a), [0, 1, 2, 3, 4, 5]);
        assert_eq!(a.unused(), 6);
        assert_eq!(a.distance(), 0.0);
    }

    #[test]
    fn shuffled_canonical_hues_are_found() {
        let shuffled =
            accents(["0000ff", "ff0000", "808080", "ff00ff", "00ff00", "ffff00", "00ffff"]);
        let a = assign_roles(&shuffled, &RoleConfig::default());
        assert_eq!(a.slot(Role::Red), 1);
        assert_eq!(a.slot(Role::Yellow), 5);
        assert_eq!(a.slot(Role::Green), 4);
        assert_eq!(a.slot(Role::Cyan), 6);
        assert_eq!(a.slot(Role::Blue), 0);
        assert_eq!(a.slot(Role::Magenta), 3);
        assert_eq!(a.unused(), 2);
        assert_eq!(a.distance(), 0.0);
    }

    #[test]
    fn dracula_roles() {
        let a = assign_roles(&accents(DRACULA), &RoleConfig::default());
        assert_eq!(slots(&a), [0, 1, 3, 4, 5, 6]);
        assert_eq!(a.unused(), 2);
        assert_eq!(a.distance(), 1240.0);
    }

    #[test]
    fn first_two_slots_are_never_dropped() {
        // Unconstrained, the gray in c1 would be the leftover at distance 0.
        let gray_first =
            accents(["808080", "ff0000", "ffff00", "00ff00", "00ffff", "0000ff", "ff00ff"]);
        let a = assign_roles(&gray_first, &RoleConfig::default());
        assert_ne!(a.unused(), 0);
        assert_ne!(a.unused(), 1);
        assert_eq!(a.distance(), 382.0);
        // Gray ties at 382 for yellow, cyan and magenta; the first minimum
        // in generation order wins.
        assert_eq!(slots(&a), [1, 2, 3, 4, 5, 0]);
        assert_eq!(a.unused(), 6);
    }

    #[test]
    fn custom_targets_change_the_assignment() {
        let mut config = RoleConfig::default();
        // Swap what "red" and "blue" look for.
        config.targets.swap(Role::Red.index(), Role::Blue.index());
        let a = assign_roles(&accents(CANONICAL), &config);
        assert_eq!(a.slot(Role::Red), 4);
        assert_eq!(a.slot(Role::Blue), 0);
        assert_eq!(a.distance(), 0.0);
    }

    #[test]
    fn iter_is_in_role_order() {
        let a = assign_roles(&accents(DRACULA), &RoleConfig::default());
        let names: Vec<_> = a.iter().map(|(role, slot)| (role.name(), slot_name(slot))).collect();
        assert_eq!(
            names,
            [
                ("red", "c1".to_string()),
                ("yellow", "c2".to_string()),
                ("green", "c4".to_string()),
                ("cyan", "c5".to_string()),
                ("blue", "c6".to_string()),
                ("magenta", "c7".to_string()),
            ]
        );
    }

    // ── LCH metric ──────────────────────────────────────────────────

    #[test]
    fn lch_metric_on_canonical_hues() {
        let config = RoleConfig {
            metric: DistanceMetric::LchWeighted,
            ..RoleConfig::default()
        };
        let a = assign_roles(&accents(CANONICAL), &config);
        assert_eq!(slots(&a), [0, 1, 2, 3, 4, 5]);
        assert!((a.distance() - 118.9865).abs() < 1e-3, "{}", a.distance());
    }

    #[test]
    fn lch_metric_on_dracula() {
        let config = RoleConfig {
            metric: DistanceMetric::LchWeighted,
            ..RoleConfig::default()
        };
        let a = assign_roles(&accents(DRACULA), &config);
        assert_eq!(slots(&a), [0, 1, 3, 4, 5, 6]);
        assert!((a.distance() - 421.4995).abs() < 1e-3, "{}", a.distance());
    }

    // ── Config ──────────────────────────────────────────────────────

    #[test]
    fn config_deserializes_with_defaults() {
        let config: RoleConfig = serde_json::from_str(r#"{"metric": "lch_weighted"}"#).unwrap();
        assert_eq!(config.metric, DistanceMetric::LchWeighted);
        assert_eq!(config.target(Role::Cyan), Color::rgb(0, 255, 255));
    }

    // ── Properties ──────────────────────────────────────────────────

    fn any_accents() -> impl Strategy<Value = [Color; ACCENT_COUNT]> {
        any::<[[u8; 3]; ACCENT_COUNT]>().prop_map(|cs| cs.map(Color::from))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn assignment_is_a_bijection_sparing_the_first_two(
            cs in any_accents(),
            lch in any::<bool>(),
        ) {
            let metric = if lch { DistanceMetric::LchWeighted } else { DistanceMetric::RgbAbsolute };
            let config = RoleConfig { metric, ..RoleConfig::default() };
            let a = assign_roles(&cs, &config);

            prop_assert!(a.unused() >= PROTECTED_SLOTS);
            let mut used: Vec<usize> = slots(&a).to_vec();
            used.push(a.unused());
            used.sort_unstable();
            prop_assert_eq!(used, vec![0, 1, 2, 3, 4, 5, 6]);
        }

        /// No admissible ordering beats the one returned.
        #[test]
        fn assignment_is_minimal(cs in any_accents()) {
            let config = RoleConfig::default();
            let a = assign_roles(&cs, &config);
            let cost = cost_table(&cs, &config);
            for order in Permutations::new().filter(|o| o[ROLE_COUNT] >= PROTECTED_SLOTS) {
                let d: f64 = (0..ROLE_COUNT).map(|r| cost[order[r]][r]).sum();
                prop_assert!(d >= a.distance());
            }
        }
    }
}
