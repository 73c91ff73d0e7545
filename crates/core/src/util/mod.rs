pub mod range;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took under the given label, and evaluates to
/// the value of the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} µs", $label, elapsed.as_micros());
        value
    }};
}

/// Make sure a caller-owned buffer can hold at least `len` items. Buffers only
/// ever grow, and new slots are filled with `filler`. Existing contents are
/// left alone, so anything past the section that gets written is stale.
pub fn ensure_len<T: Clone>(buffer: &mut Vec<T>, len: usize, filler: T) {
    if buffer.len() < len {
        buffer.resize(len, filler);
    }
}
