//! Injected profiling hook: best-effort stage timing with zero overhead when
//! unused.

/// Receives `start`/`stop` events bracketing each pipeline stage.
///
/// Implementations must be free of side effects on the computation itself;
/// a profiler that panics or blocks will wedge the render, but the pipeline
/// never inspects what a profiler does with the events.
pub trait Profiler {
    fn start(&mut self, name: &str);
    fn stop(&mut self, name: &str);
}

/// Zero-cost default: both methods are empty and marked `#[inline]`, so the
/// optimizer removes the calls entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProfiler;

impl Profiler for NoopProfiler {
    #[inline]
    fn start(&mut self, _name: &str) {}
    #[inline]
    fn stop(&mut self, _name: &str) {}
}

/// Prints each stage's name to stderr as it starts and stops; for manual
/// diagnostics, not for production use.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintProfiler;

impl Profiler for PrintProfiler {
    fn start(&mut self, name: &str) {
        eprintln!("[profiler] start {name}");
    }
    fn stop(&mut self, name: &str) {
        eprintln!("[profiler] stop  {name}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<String>);
    impl Profiler for Recorder {
        fn start(&mut self, name: &str) {
            self.0.push(format!("start:{name}"));
        }
        fn stop(&mut self, name: &str) {
            self.0.push(format!("stop:{name}"));
        }
    }

    #[test]
    fn recorder_captures_bracketed_events() {
        let mut r = Recorder(Vec::new());
        r.start("scale");
        r.stop("scale");
        assert_eq!(r.0, vec!["start:scale", "stop:scale"]);
    }

    #[test]
    fn noop_profiler_is_harmless() {
        let mut p = NoopProfiler;
        p.start("x");
        p.stop("x");
    }
}
