//! Operation sets
//!
//! [`OpSet<S>`] is the handle through which every lane-wise operation of target
//! `S` is called. It is zero-sized and only obtainable from a
//! [`Registry`](crate::Registry) that reports `S` as supported.
//!
//! Operations come in two spellings:
//!
//! - generic methods keyed by lane type: `ops.add(a, b)`, `ops.shli::<2, _>(v)`
//! - named methods `<operation>_<lanetype>`: `ops.add_u32(a, b)`, `ops.shli_u16::<2>(v)`
//!
//! An operation outside a lane type's set (`mul` on u64, `shl` on f32, anything
//! on f64 for a target without double precision) does not exist in either
//! spelling.
//!
//! | Module     | Operations |
//! |------------|------------|
//! | `memory`   | `load` `load_aligned` `load_stream` `load_low` `store` `store_aligned` `store_stream` `store_low` `store_high` |
//! | `misc`     | `zero` `set_all` `set` `setf` `cleanup` |
//! | `arith`    | `add` `sub` `mul` `div` `adds` `subs` `shl` `shli` `shr` `shri` `xor` `or` `and` `not` |
//! | `compare`  | `cmpeq` `cmpneq` `cmpgt` `cmpge` `cmplt` `cmple` `select` |
//! | `convert`  | `reinterpret` `cvt_to_mask` `cvt_from_mask` |
//! | `reorder`  | `combine_low` `combine_high` `combine` `zip` `unzip` |

mod arith;
mod compare;
mod convert;
mod memory;
mod misc;
mod named;
mod reorder;

use std::fmt;
use std::marker::PhantomData;

use crate::backends::Simd;
use crate::lane::Lane;
use crate::vector::Vector;
use crate::Target;

/// Operation set of target `S`
pub struct OpSet<S: Simd> {
    _target: PhantomData<S>,
}

impl<S: Simd> OpSet<S> {
    /// Hand out the operation set; the registry checks support first
    pub(crate) const fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }

    pub fn target(self) -> Target {
        S::TARGET
    }

    /// Register width in bits
    pub fn width_bits(self) -> usize {
        S::WIDTH_BITS
    }

    /// Lanes of `T` per vector on this target
    pub fn nlanes<T: Lane>(self) -> usize {
        Vector::<S, T>::NLANES
    }

    /// Whether f64 vectors exist on this target
    pub fn simd_f64(self) -> bool {
        S::SIMD_F64
    }
}

impl<S: Simd> Clone for OpSet<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Simd> Copy for OpSet<S> {}

impl<S: Simd> fmt::Debug for OpSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpSet")
            .field("target", &S::TARGET)
            .field("width_bits", &S::WIDTH_BITS)
            .finish()
    }
}
