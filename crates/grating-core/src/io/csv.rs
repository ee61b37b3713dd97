use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::spectrum::Spectrum;

pub const CSV_HEADER: &str = "wavelength,amplitude";

/// Write `wavelength,amplitude` rows. Wavelengths keep full precision;
/// amplitudes are printed with three decimals.
pub fn write_csv<W: Write>(spectrum: &Spectrum, mut writer: W) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for sample in spectrum {
        writeln!(writer, "{},{:.3}", sample.wavelength, sample.amplitude)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the spectrum as CSV to `path`.
pub fn save_csv(spectrum: &Spectrum, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(spectrum, BufWriter::new(file))
}
