//! Materialization: the single place where an expression tree is forced into stored values.

use log::{trace, warn};

use crate::internal::error::ShapeError;
use crate::internal::op::BinaryOp;
use crate::internal::Expr;

/// Writes `expr.eval(i)` into `out[i]` for every index of `out`.
///
/// The bound comes from `out` alone; `expr` is never asked for its extent.
#[inline]
pub(crate) fn materialize<T, E>(out: &mut [T], expr: &E)
where
    E: Expr<Elem = T> + ?Sized,
{
    trace!("materializing {} elements", out.len());
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = expr.eval(i);
    }
}

/// Folds `expr` into `out` in place: `out[i] = Op::map(out[i], expr.eval(i))`.
#[inline]
pub(crate) fn update<Op, T, E>(out: &mut [T], expr: &E)
where
    Op: BinaryOp<T>,
    T: Copy,
    E: Expr<Elem = T> + ?Sized,
{
    trace!("updating {} elements in place", out.len());
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = Op::map(*slot, expr.eval(i));
    }
}

/// Like [`materialize`], after confirming no leaf of `expr` is shorter than `out`.
pub(crate) fn materialize_checked<T, E>(out: &mut [T], expr: &E) -> Result<(), ShapeError>
where
    E: Expr<Elem = T> + ?Sized,
{
    check_extent(out.len(), expr)?;
    materialize(out, expr);
    Ok(())
}

pub(crate) fn check_extent<E: Expr + ?Sized>(expected: usize, expr: &E) -> Result<(), ShapeError> {
    match expr.extent() {
        Some(found) if found < expected => {
            warn!("rejected assignment: expression covers {found} of {expected} elements");
            Err(ShapeError::LengthMismatch { expected, found })
        }
        _ => Ok(()),
    }
}

/// Configuration for parallel materialization.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum target length to enable parallelism.
    pub parallel_threshold: usize,
    /// Smallest run of consecutive indices handed to one rayon task.
    pub min_chunk_len: usize,
}

#[cfg(feature = "parallel")]
impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
            min_chunk_len: 1024,
        }
    }
}

/// Every index is written by exactly one task and expressions only read, so the loop can be
/// split freely.
#[cfg(feature = "parallel")]
pub(crate) fn materialize_parallel<T, E>(out: &mut [T], expr: &E, config: &ParallelConfig)
where
    T: Send,
    E: Expr<Elem = T> + Sync + ?Sized,
{
    use rayon::prelude::*;

    if out.len() < config.parallel_threshold {
        // Fall back to sequential for short targets
        materialize(out, expr);
        return;
    }

    log::debug!(
        "materializing {} elements on the rayon pool (min chunk {})",
        out.len(),
        config.min_chunk_len
    );
    out.par_iter_mut()
        .with_min_len(config.min_chunk_len.max(1))
        .enumerate()
        .for_each(|(i, slot)| *slot = expr.eval(i));
}
