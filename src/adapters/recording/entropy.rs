//! Recording adapter for the `Entropy` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::Entropy;

/// Records every random draw while delegating to an inner source.
///
/// Replaying the resulting cassette reproduces the exact same assignment.
pub struct RecordingEntropy {
    inner: Box<dyn Entropy>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEntropy {
    /// Creates a new recording entropy source wrapping the given implementation.
    pub fn new(inner: Box<dyn Entropy>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Entropy for RecordingEntropy {
    fn index_below(&self, bound: usize) -> usize {
        let result = self.inner.index_below(bound);
        record_interaction(&self.recorder, "entropy", "index_below", &json!({ "bound": bound }), &result);
        result
    }

    fn unit(&self) -> f64 {
        let result = self.inner.unit();
        record_interaction(&self.recorder, "entropy", "unit", &(), &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::entropy::SeededEntropy;
    use crate::cassette::format::Cassette;

    #[test]
    fn records_each_draw_in_order() {
        let dir = std::env::temp_dir().join("giftdraw_rec_entropy_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("entropy.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));

        let (first, second) = {
            let entropy =
                RecordingEntropy::new(Box::new(SeededEntropy::new(8)), Arc::clone(&recorder));
            (entropy.index_below(10), entropy.index_below(3))
        };

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].input, json!({ "bound": 10 }));
        assert_eq!(cassette.interactions[0].output, json!(first));
        assert_eq!(cassette.interactions[1].input, json!({ "bound": 3 }));
        assert_eq!(cassette.interactions[1].output, json!(second));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
