//! Replaying adapter for the `Entropy` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::entropy::Entropy;

/// Replays recorded random draws from a cassette.
pub struct ReplayingEntropy {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEntropy {
    /// Creates a new replaying entropy source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Entropy for ReplayingEntropy {
    fn index_below(&self, bound: usize) -> usize {
        let interaction = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            replayer.next_interaction("entropy", "index_below")
        };
        let recorded_bound = interaction.input["bound"].as_u64();
        assert!(
            recorded_bound == u64::try_from(bound).ok(),
            "entropy::index_below: replay diverged at seq={}: recorded bound {recorded_bound:?}, \
             requested {bound}. The draw request differs from the recording.",
            interaction.seq,
        );
        let index = interaction
            .output
            .as_u64()
            .and_then(|v| usize::try_from(v).ok())
            .expect("entropy::index_below: expected unsigned integer output");
        assert!(index < bound, "entropy::index_below: recorded {index} is not below {bound}");
        index
    }

    fn unit(&self) -> f64 {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            replayer.next_interaction("entropy", "unit").output
        };
        output.as_f64().expect("entropy::unit: expected float output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn draw(seq: u64, bound: usize, output: usize) -> Interaction {
        Interaction {
            seq,
            port: "entropy".into(),
            method: "index_below".into(),
            input: json!({ "bound": bound }),
            output: json!(output),
        }
    }

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette { name: "test".into(), recorded_at: Utc::now(), interactions };
        CassetteReplayer::new(&cassette)
    }

    #[test]
    fn serves_recorded_indices_in_order() {
        let entropy = ReplayingEntropy::new(make_replayer(vec![draw(0, 3, 2), draw(1, 2, 0)]));
        assert_eq!(entropy.index_below(3), 2);
        assert_eq!(entropy.index_below(2), 0);
    }

    #[test]
    fn serves_recorded_units() {
        let entropy = ReplayingEntropy::new(make_replayer(vec![Interaction {
            seq: 0,
            port: "entropy".into(),
            method: "unit".into(),
            input: json!(null),
            output: json!(0.25),
        }]));
        assert!((entropy.unit() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "replay diverged")]
    fn mismatched_bound_panics() {
        let entropy = ReplayingEntropy::new(make_replayer(vec![draw(0, 3, 1)]));
        let _ = entropy.index_below(4);
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn running_past_the_recording_panics() {
        let entropy = ReplayingEntropy::new(make_replayer(vec![draw(0, 2, 1)]));
        let _ = entropy.index_below(2);
        let _ = entropy.index_below(2);
    }
}
