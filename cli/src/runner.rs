use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use pixconv_core::codec::Codec;
use pixconv_core::convert::Converter;
use pixconv_core::gather::Gatherer;

use crate::report::RunReport;

/// Drives a whole run: gather matching files under a directory, then
/// convert each one strictly in gather order.
///
/// Per-file failures are printed and the run continues; only a failed
/// gather (missing root, unopenable candidate) aborts.
pub struct Runner<'a> {
    pub out: &'a mut dyn Write,
    pub decoder: &'a dyn Codec,
    pub encoder: &'a dyn Codec,
    pub force: bool,
}

impl Runner<'_> {
    pub fn run(&mut self, dir: &Path) -> Result<RunReport> {
        let gatherer = Gatherer {
            decoder: self.decoder,
        };
        let paths = gatherer
            .gather(dir)
            .with_context(|| format!("failed to gather files under {}", dir.display()))?;

        let converter = Converter {
            decoder: self.decoder,
            encoder: self.encoder,
        };
        let mut report = RunReport::new();

        for path in &paths {
            match converter.convert(path, self.force) {
                Ok(dest) => {
                    writeln!(self.out, "Converted: {:?}", dest)?;
                    report.add_converted(path.clone(), dest);
                }
                Err(e) => {
                    log::error!("error converting {}: {}", path.display(), e);
                    writeln!(self.out, "Failed: {}: {}", path.display(), e)?;
                    report.add_failed(path.clone(), e.to_string());
                }
            }
        }

        Ok(report)
    }
}
