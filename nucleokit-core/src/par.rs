/// Parallel map: apply `$f` to each element of `$iter`, collecting into a Vec.
/// Output order matches the input order with or without the `parallel` feature.
macro_rules! par_map {
    ($iter:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IntoParallelIterator, ParallelIterator};
            $iter.into_par_iter().map($f).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $iter.into_iter().map($f).collect()
        }
    }};
}
