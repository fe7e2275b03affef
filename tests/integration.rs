//! Integration tests running the naming conventions end to end.
//!
//! These tests verify that:
//! 1. Each resolver finds companions on an in-memory fixture and on disk
//! 2. Extracted prefixes and times compose back into the original names
//! 3. Verifying resolvers never return a path that does not exist
//! 4. The fails-soft entry points return their legacy values

use scope_naming::*;
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// Fixtures
// =============================================================================

const ISIM_W1: &str = "KB_BV591_03192018_w1iSIM - FITC - 525-50_s1_t1.TIF";
const ISIM_W2: &str = "KB_BV591_03192018_w2iSIM - TxRed - 600-50_s1_t1.TIF";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn utf8(path: &Path) -> String {
    path.to_str().unwrap().to_owned()
}

/// A dataset with every convention laid out under `root`.
fn dataset_paths(root: &str) -> Vec<(String, EntryKind)> {
    let file = |p: &str| (format!("{root}{p}"), EntryKind::File);
    let dir = |p: &str| (format!("{root}{p}"), EntryKind::Directory);
    vec![
        file("/slice/image/tif/pre-t005-p01.tif"),
        file("/slice/image/tifR/pre-t005-p01.tif"),
        file("/slice/image/tif/pre-t006-p01.tif"),
        file(&format!("/isim/{ISIM_W1}")),
        file(&format!("/isim/{ISIM_W2}")),
        file("/isim/notes.txt"),
        file("/sv/SPIMA/488 nm/SPIMA-0.tif"),
        file("/sv/SPIMA/561 nm/SPIMA-0.tif"),
        file("/sv/SPIMA/acquisition.log"),
        dir("/sv/SPIMA/settings"),
        file("/fused/Color1/Decon/Decon_12.tif"),
    ]
}

fn memory_dataset() -> MemoryProbe {
    dataset_paths("/data")
        .into_iter()
        .fold(MemoryProbe::new(), |probe, (path, kind)| match kind {
            EntryKind::File => probe.with_file(&path),
            EntryKind::Directory => probe.with_dir(&path),
        })
}

fn disk_dataset() -> (TempDir, String) {
    let tmp = tempfile::tempdir().unwrap();
    let root = utf8(tmp.path());
    for (path, kind) in dataset_paths(&root) {
        match kind {
            EntryKind::File => {
                std::fs::create_dir_all(Path::new(&path).parent().unwrap()).unwrap();
                std::fs::write(&path, b"").unwrap();
            }
            EntryKind::Directory => std::fs::create_dir_all(&path).unwrap(),
        }
    }
    (tmp, root)
}

// =============================================================================
// Tests: Scenarios Against Both Probes
// =============================================================================

fn verify_scenarios(probe: &dyn Probe, root: &str) {
    // Slice channel swap, both directions.
    let tif = format!("{root}/slice/image/tif/pre-t005-p01.tif");
    let tifr = format!("{root}/slice/image/tifR/pre-t005-p01.tif");
    assert_eq!(find_second_color_channel_from_slice_image(probe, &tif), tifr);
    assert_eq!(find_second_color_channel_from_slice_image(probe, &tifr), tif);

    // No red counterpart: the input comes back.
    let lone = format!("{root}/slice/image/tif/pre-t006-p01.tif");
    assert_eq!(find_second_color_channel_from_slice_image(probe, &lone), lone);

    // iSIM pair, both directions.
    let w1 = format!("{root}/isim/{ISIM_W1}");
    let w2 = format!("{root}/isim/{ISIM_W2}");
    assert_eq!(find_second_isim_color_channel(probe, &w1), w2);
    assert_eq!(find_second_isim_color_channel(probe, &w2), w1);

    // diSPIM single view, both directions.
    let blue = format!("{root}/sv/SPIMA/488 nm/SPIMA-0.tif");
    let green = format!("{root}/sv/SPIMA/561 nm/SPIMA-0.tif");
    assert_eq!(find_second_dispim_color_channel(probe, &blue), green);
    assert_eq!(find_second_dispim_color_channel(probe, &green), blue);

    // diSPIM fused is derived without a lookup.
    let fused = format!("{root}/fused/Color1/Decon/Decon_12.tif");
    assert_eq!(
        find_second_dispim_color_channel(probe, &fused),
        format!("{root}/fused/Color2/Decon/Decon_12.tif")
    );
}

#[test]
fn scenarios_on_memory_probe() {
    init_tracing();
    let probe = memory_dataset();
    verify_scenarios(&probe, "/data");
}

#[test]
fn scenarios_on_native_probe() {
    init_tracing();
    let (_tmp, root) = disk_dataset();
    verify_scenarios(&NativeProbe, &root);
}

#[test]
fn scenarios_through_tracing_layer() {
    init_tracing();
    let probe = memory_dataset().layer(TracingLayer::new("dataset"));
    verify_scenarios(&probe, "/data");
}

#[test]
fn missing_companions_yield_fallbacks() {
    let probe = MemoryProbe::new()
        .with_file("/d/isim/a_w1x_s1_t1.TIF")
        .with_file("/d/SPIMA/488 nm/SPIMA-0.tif")
        .with_file("/d/SPIMA/561 nm/SPIMA-1.tif");

    assert_eq!(find_second_isim_color_channel(&probe, "/d/isim/a_w1x_s1_t1.TIF"), "");
    assert_eq!(find_second_isim_color_channel(&probe, "/d/isim/gone_w1x_s1.TIF"), "");
    assert_eq!(
        find_second_dispim_color_channel(&probe, "/d/SPIMA/488 nm/SPIMA-0.tif"),
        ""
    );
    assert_eq!(find_second_dispim_color_channel(&probe, "/d/stack/a_t1.TIF"), "");
}

#[test]
fn try_resolve_reports_reason() {
    let probe = MemoryProbe::new().with_file("/d/image/tif/x.tif");
    let err = SliceChannelResolver::new(&probe)
        .try_resolve("/d/image/tif/x.tif")
        .unwrap_err();
    assert!(matches!(
        err,
        NamingError::CompanionNotFound { ref candidate } if candidate == "/d/image/tifR/x.tif"
    ));

    let err = IsimChannelResolver::new(&probe)
        .try_resolve("/d/missing_w1_s1.TIF")
        .unwrap_err();
    assert!(matches!(err, NamingError::ImageNotFound { .. }));
}

#[test]
fn backslash_dataset() {
    let probe = MemoryProbe::new()
        .with_file("C:\\ds\\image\\tif\\x.tif")
        .with_file("C:\\ds\\image\\tifR\\x.tif")
        .with_file("C:\\sv\\SPIMB\\488 nm\\SPIMB-2.tif")
        .with_file("C:\\sv\\SPIMB\\640 nm\\SPIMB-2.tif");

    assert_eq!(
        find_second_color_channel_from_slice_image(&probe, "C:\\ds\\image\\tif\\x.tif"),
        "C:\\ds\\image\\tifR\\x.tif"
    );
    assert_eq!(
        find_second_dispim_color_channel(&probe, "C:\\sv\\SPIMB\\488 nm\\SPIMB-2.tif"),
        "C:\\sv\\SPIMB\\640 nm\\SPIMB-2.tif"
    );
}

// =============================================================================
// Tests: Pure Derivations
// =============================================================================

#[test]
fn bit_depth_mapping() {
    assert_eq!(
        reconfigure_image_path_from_8bit_to_16bit("/data/ds1/image/tif/pre-t005-p01.tif"),
        "/data/ds1/pre_t5.TIF"
    );
    assert_eq!(
        reconfigure_image_path_from_8bit_to_16bit("/data/ds1/pre_t5.TIF"),
        "/data/ds1/pre_t5.TIF"
    );
    assert!(follows_8bit_deleted_convention("/data/ds1/image/tif/pre-t005-p01.tif"));
    assert!(!follows_8bit_deleted_convention("/data/ds1/pre_t5.TIF"));
}

#[test]
fn next_time_point_names() {
    let image = "/ds/pre_t5.TIF";
    let prefix = get_image_prefix(image);
    assert_eq!(prefix, "/ds/pre_t");
    assert_eq!(extract_time_from_image_file_name(image), 5);
    assert_eq!(append_time_to_prefix(&prefix, 6), "/ds/pre_t6.TIF");

    let prefixes = [
        get_image_prefix("/ds/Color1/Decon/Decon_1.tif"),
        get_image_prefix("/ds/Color2/Decon/Decon_1.tif"),
    ];
    assert_eq!(
        append_time_to_prefixes(&prefixes, 2),
        vec!["/ds/Color1/Decon/Decon_2.tif", "/ds/Color2/Decon/Decon_2.tif"]
    );
}

#[test]
fn prefix_and_time_round_trip() {
    for image in [
        "/ds/pre_t5.TIF",
        "/ds/pre_t120.TIF",
        "/ds/Color1/Decon/Decon_12.tif",
        "/ds/SPIMA/488 nm/SPIMA-3.tif",
    ] {
        let prefix = image_prefix(image).unwrap();
        let time = extract_time(image).unwrap();
        assert_eq!(append_time_to_prefix(&prefix, time), image, "{image}");
    }
}

#[test]
fn slice_names_round_trip() {
    for (time, plane) in [(1, 1), (5, 12), (150, 3)] {
        let name = append_time_and_plane_to_8bit_prefix("pre-t", time, plane);
        assert!(is_slice_image(&name));
        assert_eq!(extract_time(&name).unwrap(), time);
        assert_eq!(extract_plane(&name).unwrap(), plane);
    }
}

#[test]
fn fused_swap_is_an_involution() {
    let probe = MemoryProbe::new();
    for path in ["/a/Color1/Decon/Decon_1.tif", "/a/Color2/Decon/Decon_7.tif"] {
        let once = find_second_dispim_color_channel(&probe, path);
        assert_ne!(once, path);
        assert_eq!(find_second_dispim_color_channel(&probe, &once), path);
    }
}

#[test]
fn tokens_for_each_convention() {
    let cases = [
        ("/d/image/tif/pre-t005-p01.tif", Convention::EightBitSliceTif, Some(5), None),
        ("/d/pre_t5.TIF", Convention::SixteenBitTif, Some(5), None),
        (
            "/isim/KB_w2iSIM - TxRed_s1_t1.TIF",
            Convention::Isim,
            Some(1),
            Some(2),
        ),
        ("/d/Color2/Decon/Decon_3.tif", Convention::DiSpimFused, Some(3), Some(2)),
        ("/d/SPIMB/561 nm/SPIMB-4.tif", Convention::DiSpimSingleView, Some(4), None),
    ];
    for (path, convention, time, channel) in cases {
        let tokens = FilenameTokens::parse(path);
        assert_eq!(tokens.convention, Some(convention), "{path}");
        assert_eq!(tokens.time, time, "{path}");
        assert_eq!(tokens.channel, channel, "{path}");
        assert!(tokens.is_tiff(), "{path}");
    }
}

// =============================================================================
// Tests: Verification Invariant
// =============================================================================

/// Whatever a verifying resolver returns is either the fallback or a path the
/// probe knows about.
#[test]
fn verifying_resolvers_return_existing_paths() {
    let probe = memory_dataset();
    let inputs = [
        "/data/slice/image/tif/pre-t005-p01.tif",
        "/data/slice/image/tif/pre-t006-p01.tif",
        "/data/slice/image/tif/missing-t001-p01.tif",
        "/data/isim/KB_BV591_03192018_w1iSIM - FITC - 525-50_s1_t1.TIF",
        "/data/isim/notes.txt",
        "/data/sv/SPIMA/488 nm/SPIMA-0.tif",
        "/data/sv/SPIMA/488 nm/SPIMA-9.tif",
    ];
    for input in inputs {
        let slice = SliceChannelResolver::new(&probe).resolve(input);
        assert!(slice == input || probe.exists(&slice).unwrap(), "{input}");

        let isim = IsimChannelResolver::new(&probe).resolve(input);
        assert!(isim.is_empty() || probe.is_file(&isim).unwrap(), "{input}");

        let dispim = DiSpimChannelResolver::new(&probe).resolve(input);
        assert!(dispim.is_empty() || probe.is_file(&dispim).unwrap(), "{input}");
    }
}

// =============================================================================
// Tests: Error Handling Verification
// =============================================================================

#[test]
fn probe_errors_carry_path() {
    let (_tmp, root) = disk_dataset();
    let file = format!("{root}/isim/notes.txt");
    let err = NativeProbe.read_dir(&file).unwrap_err();
    assert!(err.to_string().contains("notes.txt"), "{err}");

    let err = MemoryProbe::new().kind("/nope").unwrap_err();
    assert_eq!(err.to_string(), "not found: /nope");
}

#[test]
fn naming_errors_wrap_probe_errors() {
    let err: NamingError = ProbeError::NotFound {
        path: "/x".to_owned(),
    }
    .into();
    assert!(matches!(err, NamingError::Probe(ProbeError::NotFound { .. })));
}
