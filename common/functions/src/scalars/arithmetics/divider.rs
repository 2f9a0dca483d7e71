// Copyright 2024 The Quern Authors.
//
// SPDX-License-Identifier: Apache-2.0.

//! Multiplicative-reciprocal division by a runtime constant.
//!
//! For an unsigned divisor `d >= 2` with `l = ceil(log2 d)` and
//! `magic = floor(2^N * (2^l - d) / d) + 1`, every `n` satisfies
//! `n / d == (((n - q) >> 1) + q) >> (l - 1)` where `q = mulhi(magic, n)`
//! (the round-up variant of the multiply-and-shift scheme). The sequence is
//! branch free per element, so it maps directly onto 128-bit SIMD lanes.
//!
//! Signed division routes the magnitude through the unsigned divider of
//! `|d|` and fixes the sign afterwards; truncated division is symmetric
//! under negation, so results match the hardware `idiv` exactly, including
//! `MIN / 2` (the magnitude `2^(N-1)` is representable unsigned).

/// Scalars with a reciprocal divider: the divide-by-constant fast-path set.
pub trait FastDivide: Sized + Copy {
    type Divider: Copy;

    /// `d` must not be `0`, `1` or `-1`; those cases short-circuit before a
    /// divider is built.
    fn make_divider(d: Self) -> Self::Divider;

    fn div_by(divider: &Self::Divider, n: Self) -> Self;

    /// Two-phase walk: a SIMD loop over the largest prefix holding whole
    /// 128-bit registers, then a scalar tail. Targets without SSE2 walk the
    /// whole slice scalar.
    fn div_slice(divider: &Self::Divider, src: &[Self], dst: &mut [Self]);
}

#[derive(Clone, Copy)]
pub struct U32Divider {
    magic: u32,
    shift: u32,
}

impl U32Divider {
    pub fn new(d: u32) -> Self {
        debug_assert!(d >= 2);
        let l = 32 - (d - 1).leading_zeros();
        let magic = ((((1u64 << l) - d as u64) << 32) / d as u64 + 1) as u32;
        Self { magic, shift: l - 1 }
    }

    #[inline]
    pub fn div(&self, n: u32) -> u32 {
        let q = ((self.magic as u64 * n as u64) >> 32) as u32;
        let t = ((n - q) >> 1) + q;
        t >> self.shift
    }
}

#[derive(Clone, Copy)]
pub struct U64Divider {
    magic: u64,
    shift: u32,
}

impl U64Divider {
    pub fn new(d: u64) -> Self {
        debug_assert!(d >= 2);
        let l = 64 - (d - 1).leading_zeros();
        let magic = ((((1u128 << l) - d as u128) << 64) / d as u128 + 1) as u64;
        Self { magic, shift: l - 1 }
    }

    #[inline]
    pub fn div(&self, n: u64) -> u64 {
        let q = ((self.magic as u128 * n as u128) >> 64) as u64;
        let t = ((n - q) >> 1) + q;
        t >> self.shift
    }
}

#[derive(Clone, Copy)]
pub struct I32Divider {
    unsigned: U32Divider,
    negative: bool,
}

impl I32Divider {
    pub fn new(d: i32) -> Self {
        debug_assert!(d != 0 && d != 1 && d != -1);
        Self {
            unsigned: U32Divider::new(d.unsigned_abs()),
            negative: d < 0,
        }
    }

    #[inline]
    pub fn div(&self, n: i32) -> i32 {
        // |d| >= 2 keeps the magnitude quotient inside i32 range
        let q = self.unsigned.div(n.unsigned_abs()) as i32;
        if (n < 0) != self.negative {
            q.wrapping_neg()
        } else {
            q
        }
    }
}

#[derive(Clone, Copy)]
pub struct I64Divider {
    unsigned: U64Divider,
    negative: bool,
}

impl I64Divider {
    pub fn new(d: i64) -> Self {
        debug_assert!(d != 0 && d != 1 && d != -1);
        Self {
            unsigned: U64Divider::new(d.unsigned_abs()),
            negative: d < 0,
        }
    }

    #[inline]
    pub fn div(&self, n: i64) -> i64 {
        let q = self.unsigned.div(n.unsigned_abs()) as i64;
        if (n < 0) != self.negative {
            q.wrapping_neg()
        } else {
            q
        }
    }
}

impl FastDivide for u32 {
    type Divider = U32Divider;

    fn make_divider(d: Self) -> Self::Divider {
        U32Divider::new(d)
    }

    #[inline]
    fn div_by(divider: &Self::Divider, n: Self) -> Self {
        divider.div(n)
    }

    fn div_slice(divider: &Self::Divider, src: &[Self], dst: &mut [Self]) {
        #[cfg(target_arch = "x86_64")]
        sse2::div_slice_u32(divider, src, dst);
        #[cfg(not(target_arch = "x86_64"))]
        for (out, &n) in dst.iter_mut().zip(src.iter()) {
            *out = divider.div(n);
        }
    }
}

impl FastDivide for u64 {
    type Divider = U64Divider;

    fn make_divider(d: Self) -> Self::Divider {
        U64Divider::new(d)
    }

    #[inline]
    fn div_by(divider: &Self::Divider, n: Self) -> Self {
        divider.div(n)
    }

    fn div_slice(divider: &Self::Divider, src: &[Self], dst: &mut [Self]) {
        #[cfg(target_arch = "x86_64")]
        sse2::div_slice_u64(divider, src, dst);
        #[cfg(not(target_arch = "x86_64"))]
        for (out, &n) in dst.iter_mut().zip(src.iter()) {
            *out = divider.div(n);
        }
    }
}

impl FastDivide for i32 {
    type Divider = I32Divider;

    fn make_divider(d: Self) -> Self::Divider {
        I32Divider::new(d)
    }

    #[inline]
    fn div_by(divider: &Self::Divider, n: Self) -> Self {
        divider.div(n)
    }

    fn div_slice(divider: &Self::Divider, src: &[Self], dst: &mut [Self]) {
        #[cfg(target_arch = "x86_64")]
        sse2::div_slice_i32(divider, src, dst);
        #[cfg(not(target_arch = "x86_64"))]
        for (out, &n) in dst.iter_mut().zip(src.iter()) {
            *out = divider.div(n);
        }
    }
}

impl FastDivide for i64 {
    type Divider = I64Divider;

    fn make_divider(d: Self) -> Self::Divider {
        I64Divider::new(d)
    }

    #[inline]
    fn div_by(divider: &Self::Divider, n: Self) -> Self {
        divider.div(n)
    }

    fn div_slice(divider: &Self::Divider, src: &[Self], dst: &mut [Self]) {
        #[cfg(target_arch = "x86_64")]
        sse2::div_slice_i64(divider, src, dst);
        #[cfg(not(target_arch = "x86_64"))]
        for (out, &n) in dst.iter_mut().zip(src.iter()) {
            *out = divider.div(n);
        }
    }
}

#[cfg(target_arch = "x86_64")]
mod sse2 {
    use std::arch::x86_64::*;

    use super::I32Divider;
    use super::I64Divider;
    use super::U32Divider;
    use super::U64Divider;

    pub(super) fn div_slice_u32(divider: &U32Divider, src: &[u32], dst: &mut [u32]) {
        const LANES: usize = 16 / std::mem::size_of::<u32>();
        let prefix = src.len() / LANES * LANES;
        unsafe {
            let magic = _mm_set1_epi32(divider.magic as i32);
            let shift = _mm_cvtsi32_si128(divider.shift as i32);
            let mut i = 0;
            while i < prefix {
                let n = _mm_loadu_si128(src.as_ptr().add(i) as *const __m128i);
                let q = div_u32x4(n, magic, shift);
                _mm_storeu_si128(dst.as_mut_ptr().add(i) as *mut __m128i, q);
                i += LANES;
            }
        }
        for i in prefix..src.len() {
            dst[i] = divider.div(src[i]);
        }
    }

    pub(super) fn div_slice_u64(divider: &U64Divider, src: &[u64], dst: &mut [u64]) {
        const LANES: usize = 16 / std::mem::size_of::<u64>();
        let prefix = src.len() / LANES * LANES;
        unsafe {
            let magic = _mm_set1_epi64x(divider.magic as i64);
            let shift = _mm_cvtsi32_si128(divider.shift as i32);
            let mut i = 0;
            while i < prefix {
                let n = _mm_loadu_si128(src.as_ptr().add(i) as *const __m128i);
                let q = div_u64x2(n, magic, shift);
                _mm_storeu_si128(dst.as_mut_ptr().add(i) as *mut __m128i, q);
                i += LANES;
            }
        }
        for i in prefix..src.len() {
            dst[i] = divider.div(src[i]);
        }
    }

    pub(super) fn div_slice_i32(divider: &I32Divider, src: &[i32], dst: &mut [i32]) {
        const LANES: usize = 16 / std::mem::size_of::<i32>();
        let prefix = src.len() / LANES * LANES;
        unsafe {
            let magic = _mm_set1_epi32(divider.unsigned.magic as i32);
            let shift = _mm_cvtsi32_si128(divider.unsigned.shift as i32);
            let dsign = _mm_set1_epi32(if divider.negative { -1 } else { 0 });
            let mut i = 0;
            while i < prefix {
                let n = _mm_loadu_si128(src.as_ptr().add(i) as *const __m128i);
                let sign = _mm_srai_epi32::<31>(n);
                let magnitude = _mm_sub_epi32(_mm_xor_si128(n, sign), sign);
                let q = div_u32x4(magnitude, magic, shift);
                let mask = _mm_xor_si128(sign, dsign);
                let r = _mm_sub_epi32(_mm_xor_si128(q, mask), mask);
                _mm_storeu_si128(dst.as_mut_ptr().add(i) as *mut __m128i, r);
                i += LANES;
            }
        }
        for i in prefix..src.len() {
            dst[i] = divider.div(src[i]);
        }
    }

    pub(super) fn div_slice_i64(divider: &I64Divider, src: &[i64], dst: &mut [i64]) {
        const LANES: usize = 16 / std::mem::size_of::<i64>();
        let prefix = src.len() / LANES * LANES;
        unsafe {
            let magic = _mm_set1_epi64x(divider.unsigned.magic as i64);
            let shift = _mm_cvtsi32_si128(divider.unsigned.shift as i32);
            let dsign = _mm_set1_epi64x(if divider.negative { -1 } else { 0 });
            let mut i = 0;
            while i < prefix {
                let n = _mm_loadu_si128(src.as_ptr().add(i) as *const __m128i);
                // no 64-bit arithmetic shift in SSE2: replicate the high
                // dwords and shift those
                let sign = _mm_srai_epi32::<31>(_mm_shuffle_epi32::<0b11_11_01_01>(n));
                let magnitude = _mm_sub_epi64(_mm_xor_si128(n, sign), sign);
                let q = div_u64x2(magnitude, magic, shift);
                let mask = _mm_xor_si128(sign, dsign);
                let r = _mm_sub_epi64(_mm_xor_si128(q, mask), mask);
                _mm_storeu_si128(dst.as_mut_ptr().add(i) as *mut __m128i, r);
                i += LANES;
            }
        }
        for i in prefix..src.len() {
            dst[i] = divider.div(src[i]);
        }
    }

    #[inline]
    unsafe fn div_u32x4(n: __m128i, magic: __m128i, shift: __m128i) -> __m128i {
        let q = mulhi_epu32(n, magic);
        let t = _mm_add_epi32(_mm_srli_epi32::<1>(_mm_sub_epi32(n, q)), q);
        _mm_srl_epi32(t, shift)
    }

    #[inline]
    unsafe fn div_u64x2(n: __m128i, magic: __m128i, shift: __m128i) -> __m128i {
        let q = mulhi_epu64(n, magic);
        let t = _mm_add_epi64(_mm_srli_epi64::<1>(_mm_sub_epi64(n, q)), q);
        _mm_srl_epi64(t, shift)
    }

    /// High 32 bits of the four unsigned 32-bit lane products.
    #[inline]
    unsafe fn mulhi_epu32(a: __m128i, b: __m128i) -> __m128i {
        let even = _mm_srli_epi64::<32>(_mm_mul_epu32(a, b));
        let odd = _mm_mul_epu32(_mm_srli_epi64::<32>(a), _mm_srli_epi64::<32>(b));
        let odd_mask = _mm_set_epi32(-1, 0, -1, 0);
        _mm_or_si128(even, _mm_and_si128(odd, odd_mask))
    }

    /// High 64 bits of the two unsigned 64-bit lane products, by 32-bit
    /// schoolbook pieces (SSE2 has no 64-bit multiply).
    #[inline]
    unsafe fn mulhi_epu64(a: __m128i, b: __m128i) -> __m128i {
        let lo_mask = _mm_set1_epi64x(0xFFFF_FFFF);
        let a_hi = _mm_srli_epi64::<32>(a);
        let b_hi = _mm_srli_epi64::<32>(b);
        let ll = _mm_mul_epu32(a, b);
        let hl = _mm_mul_epu32(a_hi, b);
        let lh = _mm_mul_epu32(a, b_hi);
        let hh = _mm_mul_epu32(a_hi, b_hi);
        let mid = _mm_add_epi64(
            _mm_add_epi64(_mm_srli_epi64::<32>(ll), _mm_and_si128(hl, lo_mask)),
            _mm_and_si128(lh, lo_mask),
        );
        _mm_add_epi64(
            _mm_add_epi64(hh, _mm_srli_epi64::<32>(hl)),
            _mm_add_epi64(_mm_srli_epi64::<32>(lh), _mm_srli_epi64::<32>(mid)),
        )
    }
}
