// #![deny(missing_docs)]

pub mod costmap;
pub mod energy;
pub mod errors;
pub mod grid;
pub mod ppm;
pub mod seamcarver;
mod ternary;

pub use energy::{
    calculate_energy, energy_to_horizontal_seam, energy_to_vertical_seam, MAX_ENERGY,
};
pub use errors::CarveError;
pub use grid::{Pixel, PixelGrid};
pub use ppm::PlainPpm;
pub use seamcarver::SeamCarver;
