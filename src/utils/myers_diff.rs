//! Based on <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>
//!
//! Myers' diff algorithm.
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.
//!
//! # Heuristics
//!
//! There are no heuristics for pathological inputs: two large and completely
//! distinct sequences make it explore every diagonal.

use std::ops::{Index, IndexMut, Range};

use crate::utils::common_affix_len::{common_prefix_len, common_suffix_len};

/// A maximal run of elements sharing the same fate, given as index ranges
/// into the compared slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    Equal { old: Range<usize>, new: Range<usize> },
    Delete(Range<usize>),
    Insert(Range<usize>),
}

/// Diffs `old` against `new`, returning runs in edit-script order. Adjacent
/// runs of the same kind are merged and empty runs are never produced.
pub fn myers_diff<T>(old: &[T], new: &[T]) -> Vec<Run>
where
    T: PartialEq,
{
    let max_d = max_d(old.len(), new.len());
    let mut vb = V::new(max_d);
    let mut vf = V::new(max_d);
    let mut result = Runs::default();

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut result,
    );

    result.0
}

#[derive(Debug, Default)]
struct Runs(Vec<Run>);

impl Runs {
    fn push(&mut self, run: Run) {
        let is_empty = match &run {
            Run::Equal { old, .. } => old.is_empty(),
            Run::Delete(range) | Run::Insert(range) => range.is_empty(),
        };
        if is_empty {
            return;
        }

        match (self.0.last_mut(), run) {
            (
                Some(Run::Equal {
                    old: last_old,
                    new: last_new,
                }),
                Run::Equal { old, new },
            ) if last_old.end == old.start && last_new.end == new.start => {
                last_old.end = old.end;
                last_new.end = new.end;
            }
            (Some(Run::Delete(last)), Run::Delete(range))
            | (Some(Run::Insert(last)), Run::Insert(range))
                if last.end == range.start =>
            {
                last.end = range.end;
            }
            (_, run) => self.0.push(run),
        }
    }
}

// A D-path is a path which starts at (0,0) that has exactly D non-diagonal
// edges. All D-paths consist of a (D - 1)-path followed by a non-diagonal edge
// and then a possibly empty sequence of diagonal edges called a snake.

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, we only need to retain `x`
/// because `y` can be computed from `x - k`.
///
/// `k` can be negative, so `V` is a Vec plus an `offset` mapping the
/// smallest possible `k` to zero.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: to_isize(max_d),
            v: vec![0; 2 * max_d],
        }
    }

    fn len(&self) -> usize { self.v.len() }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output { &self.v[to_usize(index + self.offset)] }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        &mut self.v[to_usize(index + self.offset)]
    }
}

fn to_isize(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

fn to_usize(value: isize) -> usize { usize::try_from(value).unwrap_or(0) }

fn max_d(len1: usize, len2: usize) -> usize { (len1 + len2).div_ceil(2) + 1 }

fn split_at(range: Range<usize>, at: usize) -> (Range<usize>, Range<usize>) {
    (range.start..at, at..range.end)
}

/// Finds the middle snake of an optimal D-path by running the greedy search
/// forwards from the top-left and backwards from the bottom-right corner
/// until the two frontiers overlap. Returns the start of that snake.
fn find_middle_snake<T>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)>
where
    T: PartialEq,
{
    let n = old_range.len();
    let m = new_range.len();

    // By Lemma 1 in the paper, the optimal edit script length is odd or even as
    // `delta` is odd or even.
    let delta = to_isize(n) - to_isize(m);
    let odd = delta & 1 == 1;

    // The initial point at (0, -1)
    vf[1] = 0;
    // The initial point at (N, M+1)
    vb[1] = 0;

    let d_max = max_d(n, m);
    debug_assert!(vf.len() >= d_max);
    debug_assert!(vb.len() >= d_max);

    for d in 0..to_isize(d_max) {
        // Forward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = to_usize(to_isize(x) - k);

            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix_len(
                    old,
                    old_range.start + x..old_range.end,
                    new,
                    new_range.start + y..new_range.end,
                );
            }

            vf[k] = x;

            // Only check for connections from the forward search when N - M is
            // odd and when there is a reciprocal k line coming from the other
            // direction.
            if odd && (k - delta).abs() <= (d - 1) && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + old_range.start, y0 + new_range.start));
            }
        }

        // Backward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = to_usize(to_isize(x) - k);

            if x < n && y < m {
                let advance = common_suffix_len(
                    old,
                    old_range.start..old_range.start + n - x,
                    new,
                    new_range.start..new_range.start + m - y,
                );
                x += advance;
                y += advance;
            }

            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + old_range.start, m - y + new_range.start));
            }
        }
    }

    None
}

fn conquer<T>(
    old: &[T],
    mut old_range: Range<usize>,
    new: &[T],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    result: &mut Runs,
) where
    T: PartialEq,
{
    let prefix_len = common_prefix_len(old, old_range.clone(), new, new_range.clone());
    result.push(Run::Equal {
        old: old_range.start..old_range.start + prefix_len,
        new: new_range.start..new_range.start + prefix_len,
    });
    old_range.start += prefix_len;
    new_range.start += prefix_len;

    let suffix_len = common_suffix_len(old, old_range.clone(), new, new_range.clone());
    let suffix = Run::Equal {
        old: old_range.end - suffix_len..old_range.end,
        new: new_range.end - suffix_len..new_range.end,
    };
    old_range.end -= suffix_len;
    new_range.end -= suffix_len;

    if old_range.is_empty() || new_range.is_empty() {
        result.push(Run::Delete(old_range));
        result.push(Run::Insert(new_range));
    } else if let Some((x_start, y_start)) =
        find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb)
    {
        let (old_a, old_b) = split_at(old_range, x_start);
        let (new_a, new_b) = split_at(new_range, y_start);
        conquer(old, old_a, new, new_a, vf, vb, result);
        conquer(old, old_b, new, new_b, vf, vb, result);
    } else {
        result.push(Run::Delete(old_range));
        result.push(Run::Insert(new_range));
    }

    result.push(suffix);
}
