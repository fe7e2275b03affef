//! Resolve companions and metadata for images on disk.
//!
//! Pass image paths to inspect them, or run without arguments to build a
//! small dataset in a temporary directory and walk through every convention.
//!
//! Run with: `cargo run --example resolve_dataset -- <image>...`
//! Set `RUST_LOG=scope_naming=debug` to see why a fallback was taken.

use scope_naming::*;
use std::path::Path;

// =============================================================================
// Step 1: Describe one image
// =============================================================================

fn describe(probe: &NativeProbe, image: &str) {
    let tokens = FilenameTokens::parse(image);
    println!("{image}");
    println!("  convention: {:?}", tokens.convention.unwrap_or(Convention::Unknown));
    println!("  time: {:?}  plane: {:?}  channel: {:?}", tokens.time, tokens.plane, tokens.channel);

    let companion = match tokens.convention {
        Some(Convention::EightBitSliceTif) => {
            println!(
                "  16-bit stack: {}",
                reconfigure_image_path_from_8bit_to_16bit(image)
            );
            find_second_color_channel_from_slice_image(probe, image)
        }
        Some(Convention::Isim) => find_second_isim_color_channel(probe, image),
        Some(Convention::DiSpimFused | Convention::DiSpimSingleView) => {
            find_second_dispim_color_channel(probe, image)
        }
        _ => String::new(),
    };
    if companion.is_empty() || companion == image {
        println!("  companion: none");
    } else {
        println!("  companion: {companion}");
    }

    if let (Some(prefix), Some(time)) = (tokens.prefix, tokens.time) {
        if !is_slice_image(image) {
            println!("  next time point: {}", append_time_to_prefix(&prefix, time + 1));
        }
    }
}

// =============================================================================
// Step 2: Build a demo dataset
// =============================================================================

fn demo_dataset(root: &Path) -> std::io::Result<Vec<String>> {
    let files = [
        "slice/image/tif/pre-t005-p01.tif",
        "slice/image/tifR/pre-t005-p01.tif",
        "isim/KB_w1iSIM - FITC_s1_t1.TIF",
        "isim/KB_w2iSIM - TxRed_s1_t1.TIF",
        "sv/SPIMA/488 nm/SPIMA-0.tif",
        "sv/SPIMA/561 nm/SPIMA-0.tif",
        "fused/Color1/Decon/Decon_1.tif",
    ];
    let mut images = Vec::new();
    for file in files {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, b"")?;
        images.push(path.to_string_lossy().into_owned());
    }
    Ok(images)
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let probe = NativeProbe::new();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        for image in &args {
            describe(&probe, image);
        }
        return Ok(());
    }

    let tmp = tempfile::tempdir()?;
    for image in demo_dataset(tmp.path())? {
        describe(&probe, &image);
    }
    Ok(())
}
