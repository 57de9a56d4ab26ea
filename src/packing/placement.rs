//! Accepted marbles and their look

use glam::{DVec2, DVec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::to_planar;

/// Alternating tag used to pick a color pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Parity {
    /// First, third, fifth... marble
    #[default]
    Even,
    Odd,
}

impl Parity {
    /// Parity of the marble accepted at `index` (0-based)
    pub fn from_index(index: usize) -> Self {
        if index.is_multiple_of(2) { Parity::Even } else { Parity::Odd }
    }

    pub fn flip(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }

    pub fn is_even(self) -> bool {
        self == Parity::Even
    }
}

/// Main and accent color handed to the shader
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    pub main: [f32; 3],
    pub accent: [f32; 3],
}

impl ColorPair {
    /// Blue on green for even marbles, yellow on red for odd ones
    pub fn for_parity(parity: Parity) -> Self {
        match parity {
            Parity::Even => Self {
                main: BLUE,
                accent: GREEN,
            },
            Parity::Odd => Self {
                main: YELLOW,
                accent: RED,
            },
        }
    }
}

/// Axis-angle local rotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub angle_degrees: f64,
    /// Not normalized; each component in [0, 1)
    pub axis: DVec3,
}

impl Rotation {
    /// Draw angle first, then the x, y and z axis components
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let angle_degrees = rng.random::<f64>() * MAX_ROTATION_DEGREES;
        let x = rng.random::<f64>();
        let y = rng.random::<f64>();
        let z = rng.random::<f64>();
        Self {
            angle_degrees,
            axis: DVec3::new(x, y, z),
        }
    }
}

/// A marble accepted by the packer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Acceptance order within the frame (0-based)
    pub index: usize,
    /// Centre; y is always the marble radius so it rests on the ground
    pub position: DVec3,
    pub rotation: Rotation,
    pub parity: Parity,
    pub colors: ColorPair,
}

impl Placement {
    /// Centre projected onto the ground plane
    #[inline]
    pub fn planar(&self) -> DVec2 {
        to_planar(self.position)
    }

    #[inline]
    pub fn distance_from_center(&self) -> f64 {
        self.planar().length()
    }

    /// Sphere radius (the height the marble rests at)
    #[inline]
    pub fn radius(&self) -> f64 {
        self.position.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_parity_alternates() {
        assert_eq!(Parity::from_index(0), Parity::Even);
        assert_eq!(Parity::from_index(1), Parity::Odd);
        assert_eq!(Parity::from_index(6), Parity::Even);
        assert_eq!(Parity::Even.flip(), Parity::Odd);
        assert_eq!(Parity::Odd.flip().flip(), Parity::Odd);
        assert!(Parity::default().is_even());
    }

    #[test]
    fn test_color_pairs() {
        let even = ColorPair::for_parity(Parity::Even);
        assert_eq!(even.main, BLUE);
        assert_eq!(even.accent, GREEN);

        let odd = ColorPair::for_parity(Parity::Odd);
        assert_eq!(odd.main, YELLOW);
        assert_eq!(odd.accent, RED);
    }

    #[test]
    fn test_palette_in_unit_range() {
        for color in [GREEN, BLUE, RED, YELLOW] {
            assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_random_rotation_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let rot = Rotation::random(&mut rng);
            assert!((0.0..MAX_ROTATION_DEGREES).contains(&rot.angle_degrees));
            assert!((0.0..1.0).contains(&rot.axis.x));
            assert!((0.0..1.0).contains(&rot.axis.y));
            assert!((0.0..1.0).contains(&rot.axis.z));
        }
    }

    #[test]
    fn test_placement_accessors() {
        let placement = Placement {
            index: 0,
            position: DVec3::new(3.0, 0.5, 4.0),
            rotation: Rotation {
                angle_degrees: 0.0,
                axis: DVec3::ZERO,
            },
            parity: Parity::Even,
            colors: ColorPair::for_parity(Parity::Even),
        };
        assert_eq!(placement.planar(), DVec2::new(3.0, 4.0));
        assert!((placement.distance_from_center() - 5.0).abs() < 1e-12);
        assert_eq!(placement.radius(), 0.5);
    }
}
