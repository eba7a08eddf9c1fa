use super::*;

/// Index of the largest value, first occurrence on ties.
pub(crate) fn argmax<D>(x: &ArrayView<f32, D>) -> usize
where
  D: ndarray::Dimension,
{
  x.iter()
    .enumerate()
    .fold((0, f32::NEG_INFINITY), |best, (index, &value)| {
      if value > best.1 {
        (index, value)
      } else {
        best
      }
    })
    .0
}

pub(crate) fn relu(x: f32) -> f32 {
  x.max(0.0)
}

pub(crate) fn softmax(logits: Array1<f32>) -> Array1<f32> {
  // shift by the max so large logits don't overflow exp
  let max = logits.fold(f32::NEG_INFINITY, |a, &b| a.max(b));
  let exponentials = logits.mapv(|value| (value - max).exp());
  let total = exponentials.sum();
  exponentials / total
}
