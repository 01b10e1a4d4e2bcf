#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Bus Graph
=========

    output ← master (0.4) ┬← music (0.25)   sequencer plucks
                          └← sfx   (0.6)    catalog effects

Music and effects are balanced against each other without touching either
one's internal mix; master sets the overall level. The tree is fixed: buses
are created master first, then music, then sfx, and levels never change after
construction.
*/

/// One of the three mixing buses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bus {
    Master,
    Music,
    Sfx,
}

impl Bus {
    /// Construction order: every parent precedes its children.
    pub const ALL: [Bus; 3] = [Bus::Master, Bus::Music, Bus::Sfx];

    pub fn name(self) -> &'static str {
        match self {
            Bus::Master => "master",
            Bus::Music => "music",
            Bus::Sfx => "sfx",
        }
    }

    /// The bus this one feeds, `None` for the device output.
    pub fn parent(self) -> Option<Bus> {
        match self {
            Bus::Master => None,
            Bus::Music | Bus::Sfx => Some(Bus::Master),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Bus::Master => 0,
            Bus::Music => 1,
            Bus::Sfx => 2,
        }
    }
}

/// Relative level of each bus, each in [0, 1].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusLevels {
    pub master: f32,
    pub music: f32,
    pub sfx: f32,
}

impl BusLevels {
    /// Levels clamped into [0, 1].
    pub fn new(master: f32, music: f32, sfx: f32) -> Self {
        Self {
            master: master.clamp(0.0, 1.0),
            music: music.clamp(0.0, 1.0),
            sfx: sfx.clamp(0.0, 1.0),
        }
    }

    pub fn level(&self, bus: Bus) -> f32 {
        match bus {
            Bus::Master => self.master,
            Bus::Music => self.music,
            Bus::Sfx => self.sfx,
        }
    }

    /// Total gain from `bus` to the device: the product of levels up the tree.
    pub fn gain_to_output(&self, bus: Bus) -> f32 {
        let mut gain = self.level(bus);
        let mut node = bus.parent();
        while let Some(parent) = node {
            gain *= self.level(parent);
            node = parent.parent();
        }
        gain
    }
}

impl Default for BusLevels {
    fn default() -> Self {
        Self {
            master: 0.4,
            music: 0.25,
            sfx: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_has_depth_two() {
        for bus in Bus::ALL {
            let depth = std::iter::successors(Some(bus), |b| b.parent()).count();
            assert!(depth <= 2, "{} is {} deep", bus.name(), depth);
        }
        assert_eq!(Bus::Music.parent(), Some(Bus::Master));
        assert_eq!(Bus::Sfx.parent(), Some(Bus::Master));
        assert_eq!(Bus::Master.parent(), None);
    }

    #[test]
    fn construction_order_puts_parents_first() {
        for (i, bus) in Bus::ALL.iter().enumerate() {
            if let Some(parent) = bus.parent() {
                let parent_pos = Bus::ALL.iter().position(|b| *b == parent).unwrap();
                assert!(parent_pos < i);
            }
        }
    }

    #[test]
    fn default_gains_multiply_through_master() {
        let levels = BusLevels::default();
        assert!((levels.gain_to_output(Bus::Master) - 0.4).abs() < 1e-6);
        assert!((levels.gain_to_output(Bus::Music) - 0.1).abs() < 1e-6);
        assert!((levels.gain_to_output(Bus::Sfx) - 0.24).abs() < 1e-6);
    }

    #[test]
    fn levels_are_clamped() {
        let levels = BusLevels::new(1.5, -0.2, 0.6);
        assert_eq!(levels.master, 1.0);
        assert_eq!(levels.music, 0.0);
    }
}
