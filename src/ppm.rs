// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Plain PPM ("P3") reader and writer.
//!
//! The one image format this crate speaks: an ASCII magic number,
//! optional `#` comments, width, height, a max color value, then
//! height * width RGB triples as whitespace-separated decimals.  The
//! carver never looks at the max color value; it rides alongside the
//! grid so a save emits exactly the value the load saw.

use crate::errors::CarveError;
use crate::grid::{Pixel, PixelGrid};
use itertools::Itertools;
use std::io::{Read, Write};

/// A decoded plain PPM: the pixel grid plus the max-color-value
/// header field, which round-trips unchanged through carving.
#[derive(Debug, Clone)]
pub struct PlainPpm {
    pub grid: PixelGrid,
    pub max_value: u32,
}

fn malformed<S: Into<String>>(reason: S) -> CarveError {
    CarveError::MalformedSource {
        reason: reason.into(),
    }
}

impl PlainPpm {
    /// Reads a plain PPM.  Any defect leaves nothing half-built; the
    /// error names the first problem found.
    pub fn read<R: Read>(mut reader: R) -> Result<Self, CarveError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        // Comments run from '#' to end of line; everything else is
        // whitespace-separated tokens.
        let mut tokens = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(str::split_whitespace);

        if tokens.next() != Some("P3") {
            return Err(malformed("missing P3 magic number"));
        }

        let mut next_value = |name: &'static str| -> Result<u32, CarveError> {
            let token = tokens
                .next()
                .ok_or_else(|| malformed(format!("missing {}", name)))?;
            token
                .parse::<u32>()
                .map_err(|_| malformed(format!("bad {}: {:?}", name, token)))
        };

        let width = next_value("width")? as usize;
        let height = next_value("height")? as usize;
        let max_value = next_value("max color value")?;
        if max_value == 0 {
            return Err(malformed("max color value must be positive"));
        }
        // The format caps the max color value at 16 bits, and the
        // energy arithmetic counts on channels fitting it.
        if max_value > 65535 {
            return Err(malformed(format!(
                "max color value {} exceeds the plain PPM limit of 65535",
                max_value
            )));
        }

        let mut pixels = Vec::with_capacity(height * width);
        for _ in 0..height * width {
            let red = next_value("red channel")?;
            let green = next_value("green channel")?;
            let blue = next_value("blue channel")?;
            if red > max_value || green > max_value || blue > max_value {
                return Err(malformed(format!(
                    "channel value exceeds max color value {}",
                    max_value
                )));
            }
            pixels.push(Pixel::new(red, green, blue));
        }

        let grid = PixelGrid::from_pixels(height, width, pixels)?;
        Ok(PlainPpm { grid, max_value })
    }

    /// Writes the image back out in plain PPM form, one channel value
    /// per line after the header, the way the reference readers for
    /// this format expect it.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<(), CarveError> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.grid.width(), self.grid.height())?;
        writeln!(writer, "{}", self.max_value)?;
        writeln!(
            writer,
            "{}",
            self.grid
                .pixels()
                .flat_map(|p| vec![p.red, p.green, p.blue])
                .format("\n")
        )?;
        Ok(())
    }
}
