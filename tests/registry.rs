//! Registry Integration Tests
//!
//! Capability queries, configuration, and concurrent read access to the
//! process-wide registry.

use std::thread;

use univec::{
    select_best_available_target, Avx2, Avx512f, Baseline, LaneError, Neon, OpSet, Registry,
    RegistryConfig, Simd, SimdF64, Target, TargetVisitor, UnavailableReason,
};

struct Describe;

impl TargetVisitor for Describe {
    type Output = (Target, usize, bool);

    fn visit<S: Simd>(&mut self, ops: OpSet<S>) -> Self::Output {
        (ops.target(), ops.nlanes::<u8>(), false)
    }

    fn visit_f64<S: SimdF64>(&mut self, ops: OpSet<S>) -> Self::Output {
        let halves = ops.mul_f64(ops.set_all_f64(1.0), ops.set_all_f64(0.5));
        assert!(halves.iter().all(|lane| lane == 0.5));
        (ops.target(), ops.nlanes::<u8>(), true)
    }
}

#[test]
fn test_capability_flags_follow_reasons() {
    let registry = Registry::new(&RegistryConfig::new());
    for info in registry.targets() {
        assert_eq!(info.simd, info.unavailable.is_none(), "{}", info.target);
        assert_eq!(info.simd_f64, info.simd && info.target.has_f64());
        assert_eq!(info.width_bits, info.target.width_bits());
        if !info.target.is_detected() {
            assert_eq!(info.unavailable, Some(UnavailableReason::NotSupported));
        }
    }
}

#[test]
fn test_host_registry_matches_detection() {
    let registry = Registry::new(&RegistryConfig::new());
    assert_eq!(registry.best(), select_best_available_target());
    for target in Target::ALL {
        assert_eq!(registry.is_supported(target), target.is_detected());
    }
}

#[test]
fn test_unsupported_target_reports_reason() {
    let registry = Registry::new(&RegistryConfig::new());
    if registry.is_supported(Target::NEON) {
        return;
    }
    let err = registry.ops::<Neon>().unwrap_err();
    assert_eq!(
        err,
        LaneError::Unavailable {
            target: Target::NEON,
            reason: UnavailableReason::NotSupported
        }
    );
    assert_eq!(err.to_string(), "target 'NEON' isn't supported by current machine");
}

#[test]
fn test_disabled_targets() {
    let config = RegistryConfig::from_values(Some("AVX2, avx512f"), Some("1"));
    let registry = Registry::new(&config);

    for target in [Target::AVX2, Target::AVX512F] {
        let info = registry.info(target);
        assert_eq!(info.unavailable, Some(UnavailableReason::Disabled));
        assert_eq!(
            info.check(),
            Err(LaneError::Unavailable {
                target,
                reason: UnavailableReason::Disabled
            })
        );
    }
    assert!(registry.ops::<Avx2>().is_err());
    assert!(registry.ops::<Avx512f>().is_err());
    assert_eq!(registry.best(), Target::SSE2);
    assert_eq!(
        registry.get("avx2").and_then(|info| info.check()).unwrap_err().to_string(),
        "target 'AVX2' disabled by configuration"
    );
}

#[test]
fn test_baseline_survives_everything_disabled() {
    let names: Vec<&str> = Target::ALL.iter().map(|target| target.name()).collect();
    let config = RegistryConfig::from_values(Some(&names.join(",")), None);
    let registry = Registry::new(&config);
    assert_eq!(registry.supported(), vec![Target::Baseline]);
    assert_eq!(registry.best(), Target::Baseline);
    assert!(registry.ops::<Baseline>().is_ok());
}

#[test]
fn test_unknown_target_name() {
    let registry = Registry::global();
    assert_eq!(
        registry.get("SSE5").unwrap_err(),
        LaneError::UnknownTarget("SSE5".to_string())
    );
    assert_eq!(
        registry.get("wasm_simd128").map(|info| info.target),
        Ok(Target::WasmSIMD)
    );
}

#[test]
fn test_dispatch_by_name() {
    let registry = Registry::new(&RegistryConfig::new().with_emulation(true));
    let mut describe = Describe;
    for (name, lanes, f64_lanes) in [
        ("baseline", 16, true),
        ("NEON", 16, false),
        ("AVX2", 32, true),
        ("AVX512F", 64, true),
        ("VSX", 16, true),
    ] {
        let target = registry.get(name).map(|info| info.target).unwrap();
        assert_eq!(
            registry.dispatch(target, &mut describe),
            Ok((target, lanes, f64_lanes)),
            "{name}"
        );
    }
}

#[test]
fn test_global_registry_concurrent_reads() {
    let best = Registry::global().best();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let registry = Registry::global();
                    let ops = registry.ops::<Baseline>().unwrap();
                    let v = ops.add_u32(ops.set_all_u32(1), ops.set_all_u32(2));
                    assert!(v.iter().all(|lane| lane == 3));
                    registry.best()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), best);
        }
    });
}

#[test]
fn test_vectors_cross_threads() {
    let ops = Registry::global().ops::<Baseline>().unwrap();
    let v = ops.load_s16(&[1, -2, 3, -4, 5, -6, 7, -8]).unwrap();
    let doubled = thread::spawn(move || ops.add_s16(v, v)).join().unwrap();
    assert_eq!(doubled.to_vec(), vec![2, -4, 6, -8, 10, -12, 14, -16]);
}
