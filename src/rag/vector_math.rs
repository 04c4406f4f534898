use super::RetrievalError;

/// Full cosine formula; inputs are not assumed to be unit length.
///
/// A zero-magnitude vector has no direction and scores 0.0.
pub fn cosine_similarity(query: &[f32], candidate: &[f32]) -> Result<f32, RetrievalError> {
    if query.is_empty() || candidate.is_empty() {
        return Err(RetrievalError::EmptyVector);
    }
    if query.len() != candidate.len() {
        return Err(RetrievalError::DimensionMismatch {
            expected: query.len(),
            found: candidate.len(),
        });
    }

    let dot: f64 = query
        .iter()
        .zip(candidate.iter())
        .map(|(q, c)| (*q as f64) * (*c as f64))
        .sum();
    let query_norm = l2_norm(query);
    let candidate_norm = l2_norm(candidate);
    let denom = query_norm * candidate_norm;
    if denom <= f64::EPSILON {
        return Ok(0.0);
    }

    Ok((dot / denom).clamp(-1.0, 1.0) as f32)
}

/// Scores every candidate in input order.
pub fn score_all<'a, I>(query: &[f32], candidates: I) -> Result<Vec<(usize, f32)>, RetrievalError>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    candidates
        .into_iter()
        .enumerate()
        .map(|(idx, candidate)| cosine_similarity(query, candidate).map(|score| (idx, score)))
        .collect()
}

fn l2_norm(values: &[f32]) -> f64 {
    values
        .iter()
        .map(|v| (*v as f64) * (*v as f64))
        .sum::<f64>()
        .sqrt()
}
