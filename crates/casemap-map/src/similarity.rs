//! Edit distance and normalized similarity.

/// Levenshtein distance between `a` and `b`, counted in characters.
///
/// Fills a `(|b| + 1) x (|a| + 1)` table in row-major order.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let width = a.len() + 1;
    let mut table = vec![0usize; width * (b.len() + 1)];

    for (j, cell) in table.iter_mut().take(width).enumerate() {
        *cell = j;
    }
    for i in 1..=b.len() {
        table[i * width] = i;
        for j in 1..=a.len() {
            let substitution = if b[i - 1] == a[j - 1] { 0 } else { 1 };
            let replace = table[(i - 1) * width + (j - 1)] + substitution;
            let insert = table[i * width + (j - 1)] + 1;
            let delete = table[(i - 1) * width + j] + 1;
            table[i * width + j] = replace.min(insert).min(delete);
        }
    }

    table[b.len() * width + a.len()]
}

/// Case-insensitive similarity ratio in `[0, 1]`.
///
/// Two empty strings are identical (`1.0`).
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - distance(&a, &b) as f64 / longest as f64
}
