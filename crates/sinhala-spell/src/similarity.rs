// Similarity metrics used by fuzzy scoring.
//
// Every metric returns a percentage in [0, 100]. Inputs are char slices so
// multi-byte Sinhala text is compared per Unicode scalar value.

/// Length of the longest common subsequence of `a` and `b`.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                cur[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Indel similarity: `2 * LCS / (len(a) + len(b))`, rounded to a whole
/// percentage. Returns 0 if either side is empty.
pub fn ratio(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let total = (a.len() + b.len()) as f64;
    (200.0 * lcs_len(a, b) as f64 / total).round()
}

/// Normalized Levenshtein similarity.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Canonical form for token-order-insensitive comparison: split on every
/// non-alphanumeric character, sort the pieces, join them with single
/// spaces.
///
/// Sinhala dependent vowel signs are alphabetic, so only the virama and
/// punctuation break a word into pieces; conjunct halves then compare
/// regardless of their order.
pub fn token_sort_key(word: &str) -> Vec<char> {
    let mut tokens: Vec<String> = word
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect();
    tokens.sort_unstable();
    tokens.join(" ").chars().collect()
}

/// Token-order-insensitive similarity over precomputed
/// [`token_sort_key`]s.
pub fn token_sort_ratio(a_key: &[char], b_key: &[char]) -> f64 {
    ratio(a_key, b_key)
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]` as
/// `(start_a, start_b, len)`. Among equally long matches the one starting
/// earliest in `a`, then earliest in `b`, is returned.
fn longest_match(
    a: &[char],
    b: &[char],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let k = if a[i] == b[j] { prev[j - blo] + 1 } else { 0 };
            cur[j - blo + 1] = k;
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}

/// Ratcliff/Obershelp similarity: find the longest common block, recurse on
/// both sides of it, and score `2 * matched / (len(a) + len(b))`.
///
/// Two empty inputs are identical (100).
pub fn sequence_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    let mut matched = 0;
    let mut pending = vec![((0, a.len()), (0, b.len()))];
    while let Some((ra, rb)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, ra, rb);
        if k == 0 {
            continue;
        }
        matched += k;
        if ra.0 < i && rb.0 < j {
            pending.push(((ra.0, i), (rb.0, j)));
        }
        if i + k < ra.1 && j + k < rb.1 {
            pending.push(((i + k, ra.1), (j + k, rb.1)));
        }
    }
    200.0 * matched as f64 / total as f64
}
