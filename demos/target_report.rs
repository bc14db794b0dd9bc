//! Print what every target can do on this machine
//!
//! Run with: cargo run --example target_report
//!
//! Honours `UNIVEC_DISABLE` and `UNIVEC_EMULATE`, e.g.
//! `UNIVEC_EMULATE=1 UNIVEC_DISABLE=AVX512F cargo run --example target_report`.

use univec::{OpSet, Registry, Simd, SimdF64, TargetVisitor};

/// Runs one small computation per target and reports its lane counts
struct Report;

impl TargetVisitor for Report {
    type Output = String;

    fn visit<S: Simd>(&mut self, ops: OpSet<S>) -> String {
        let v = ops.shli_u16::<2>(ops.set_all_u16(3));
        format!(
            "u8 x{:<3} f32 x{:<3} shli_u16::<2>(3) = {}",
            ops.nlanes::<u8>(),
            ops.nlanes::<f32>(),
            v.lane(0).unwrap_or_default()
        )
    }

    fn visit_f64<S: SimdF64>(&mut self, ops: OpSet<S>) -> String {
        let third = ops.div_f64(ops.set_all_f64(1.0), ops.set_all_f64(3.0));
        format!(
            "{}  f64 x{} 1/3 = {:.6}",
            self.visit(ops),
            ops.nlanes::<f64>(),
            third.lane(0).unwrap_or_default()
        )
    }
}

fn main() {
    let registry = Registry::global();

    println!("univec target report");
    println!("====================");
    for info in registry.targets() {
        println!("  {info}");
    }
    println!();

    for (target, result) in registry.for_each(&mut Report) {
        match result {
            Ok(line) => println!("  {:<13} {line}", target.name()),
            Err(err) => println!("  {:<13} skipped: {err}", target.name()),
        }
    }
    println!();
    println!("best target: {}", registry.best());
}
