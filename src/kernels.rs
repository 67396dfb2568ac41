//! Elementwise kernels over half-precision buffers
//!
//! Each kernel walks its buffers two lanes at a time through [`Half2`], so a
//! build with the F16C backend handles a pair per instruction. An odd final
//! lane is computed with the scalar [`Half`] operator, which produces the
//! same bits the pair path would.
//!
//! Buffer shapes are checked up front; a mismatch returns
//! [`PackedHalfError`](crate::PackedHalfError) and leaves outputs untouched.

use crate::error::{check_len, PackedHalfError, Result};
use crate::half::Half;
use crate::half2::gate::BACKEND;
use crate::half2::Half2;

/// Binary operator applied lane-wise by [`elementwise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
        }
    }

    fn pair(self, a: Half2, b: Half2) -> Half2 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
        }
    }

    fn lane(self, a: Half, b: Half) -> Half {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
        }
    }
}

#[inline]
fn load(chunk: &[Half]) -> Half2 {
    Half2::from_lanes(chunk[0], chunk[1])
}

#[inline]
fn store(chunk: &mut [Half], value: Half2) {
    let (lo, hi) = value.lanes();
    chunk[0] = lo;
    chunk[1] = hi;
}

/// `out[i] = a[i] OP b[i]`
pub fn elementwise(op: BinaryOp, a: &[Half], b: &[Half], out: &mut [Half]) -> Result<()> {
    check_len(op.name(), a.len(), b.len())?;
    check_len(op.name(), a.len(), out.len())?;
    log::trace!("{} over {} lanes ({} backend)", op.name(), a.len(), BACKEND);

    let mut a_pairs = a.chunks_exact(2);
    let mut b_pairs = b.chunks_exact(2);
    let mut out_pairs = out.chunks_exact_mut(2);
    for ((x, y), z) in a_pairs.by_ref().zip(b_pairs.by_ref()).zip(out_pairs.by_ref()) {
        store(z, op.pair(load(x), load(y)));
    }

    if let ([x], [y], [z]) = (a_pairs.remainder(), b_pairs.remainder(), out_pairs.into_remainder()) {
        *z = op.lane(*x, *y);
    }
    Ok(())
}

/// `out[i] = a[i] + b[i]`
pub fn add(a: &[Half], b: &[Half], out: &mut [Half]) -> Result<()> {
    elementwise(BinaryOp::Add, a, b, out)
}

/// `out[i] = a[i] - b[i]`
pub fn sub(a: &[Half], b: &[Half], out: &mut [Half]) -> Result<()> {
    elementwise(BinaryOp::Sub, a, b, out)
}

/// `out[i] = a[i] * b[i]`
pub fn mul(a: &[Half], b: &[Half], out: &mut [Half]) -> Result<()> {
    elementwise(BinaryOp::Mul, a, b, out)
}

/// `out[i] = a[i] / b[i]`
pub fn div(a: &[Half], b: &[Half], out: &mut [Half]) -> Result<()> {
    elementwise(BinaryOp::Div, a, b, out)
}

/// `out[i] = -a[i]`
pub fn negate(a: &[Half], out: &mut [Half]) -> Result<()> {
    check_len("negate", a.len(), out.len())?;
    log::trace!("negate over {} lanes ({} backend)", a.len(), BACKEND);

    let mut a_pairs = a.chunks_exact(2);
    let mut out_pairs = out.chunks_exact_mut(2);
    for (x, z) in a_pairs.by_ref().zip(out_pairs.by_ref()) {
        store(z, -load(x));
    }
    if let ([x], [z]) = (a_pairs.remainder(), out_pairs.into_remainder()) {
        *z = -*x;
    }
    Ok(())
}

/// `out[i] = a[i] * factor`
pub fn scale(a: &[Half], factor: Half, out: &mut [Half]) -> Result<()> {
    check_len("scale", a.len(), out.len())?;
    log::trace!("scale by {} over {} lanes ({} backend)", factor, a.len(), BACKEND);

    let mut a_pairs = a.chunks_exact(2);
    let mut out_pairs = out.chunks_exact_mut(2);
    for (x, z) in a_pairs.by_ref().zip(out_pairs.by_ref()) {
        let mut v = load(x);
        v *= factor;
        store(z, v);
    }
    if let ([x], [z]) = (a_pairs.remainder(), out_pairs.into_remainder()) {
        *z = *x * factor;
    }
    Ok(())
}

/// `y[i] += alpha * x[i]`, in place.
pub fn axpy(alpha: Half, x: &[Half], y: &mut [Half]) -> Result<()> {
    check_len("axpy", x.len(), y.len())?;
    log::trace!("axpy over {} lanes ({} backend)", x.len(), BACKEND);

    let alpha2 = Half2::splat(alpha);
    let mut x_pairs = x.chunks_exact(2);
    let mut y_pairs = y.chunks_exact_mut(2);
    for (xs, ys) in x_pairs.by_ref().zip(y_pairs.by_ref()) {
        let mut acc = load(ys);
        acc += alpha2 * load(xs);
        store(ys, acc);
    }
    if let ([xl], [yl]) = (x_pairs.remainder(), y_pairs.into_remainder()) {
        *yl = *yl + alpha * *xl;
    }
    Ok(())
}

/// Group an even-length buffer into pairs: `[a, b, c, d] -> [(a, b), (c, d)]`.
pub fn pack(src: &[Half]) -> Result<Vec<Half2>> {
    if src.len() % 2 != 0 {
        return Err(PackedHalfError::UnpairedLane { len: src.len() });
    }
    Ok(src.chunks_exact(2).map(load).collect())
}

/// Flatten pairs back into lanes, lane 0 first.
pub fn unpack(src: &[Half2]) -> Vec<Half> {
    let mut out = vec![Half::ZERO; src.len() * 2];
    for (chunk, &pair) in out.chunks_exact_mut(2).zip(src) {
        store(chunk, pair);
    }
    out
}
