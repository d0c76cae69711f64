use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use pixconv_core::codec::{Codec, CompressionLevel, Gif, Jpeg, Png};

/// Batch-convert JPEG/PNG/GIF images found under a directory
#[derive(Debug, Parser)]
#[command(name = "pixconv", version, about)]
pub struct Cli {
    /// Directory to scan for convertible images
    pub dir: PathBuf,

    /// Convert from JPEG (the default source format)
    #[arg(short = 'J', long)]
    pub from_jpeg: bool,

    /// Convert from PNG
    #[arg(short = 'P', long)]
    pub from_png: bool,

    /// Convert from GIF
    #[arg(short = 'G', long)]
    pub from_gif: bool,

    /// Convert to JPEG
    #[arg(short = 'j', long)]
    pub to_jpeg: bool,

    /// Convert to PNG (the default target format)
    #[arg(short = 'p', long)]
    pub to_png: bool,

    /// Convert to GIF
    #[arg(short = 'g', long)]
    pub to_gif: bool,

    /// Overwrite when the converted file name already exists
    #[arg(short, long)]
    pub force: bool,

    /// JPEG quality, used with -j
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Maximum number of palette colors, used with -g
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u16).range(1..=256))]
    pub num_colors: u16,

    /// PNG compression level, used with -p (default, no, best-speed, best-compression)
    #[arg(long, default_value = "default", value_parser = CompressionLevel::from_str)]
    pub compression_level: CompressionLevel,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Source codec. When several source flags are given, PNG wins over
    /// GIF, and JPEG is the fallback.
    pub fn decoder(&self) -> Box<dyn Codec> {
        if self.from_png {
            Box::new(Png::default())
        } else if self.from_gif {
            Box::new(Gif::default())
        } else {
            Box::new(Jpeg::default())
        }
    }

    /// Target codec carrying its encode parameters. When several target
    /// flags are given, JPEG wins over GIF, and PNG is the fallback.
    pub fn encoder(&self) -> Box<dyn Codec> {
        if self.to_jpeg {
            Box::new(Jpeg {
                quality: self.quality,
            })
        } else if self.to_gif {
            Box::new(Gif {
                num_colors: self.num_colors,
            })
        } else {
            Box::new(Png {
                compression: self.compression_level,
            })
        }
    }
}
